use thiserror::Error;

use crate::domain::product::ProductId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown occasion `{0}`")]
    UnknownOccasion(String),
    #[error("product {product_id} has no {tier} notes")]
    MissingNotes { product_id: ProductId, tier: &'static str },
    #[error("product {product_id} has strength {strength}, expected 1..=5")]
    StrengthOutOfRange { product_id: ProductId, strength: u8 },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("product {0} not found in catalog")]
    ProductNotFound(ProductId),
    #[error("catalog failure: {0}")]
    Catalog(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String },
    #[error("not found: {message}")]
    NotFound { message: String },
    #[error("catalog unavailable: {message}")]
    CatalogUnavailable { message: String },
    #[error("invalid configuration: {message}")]
    Configuration { message: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => {
                "The request could not be processed. Check inputs and try again."
            }
            Self::NotFound { .. } => "The requested item does not exist.",
            Self::CatalogUnavailable { .. } => {
                "The product catalog could not be loaded. Check the catalog path."
            }
            Self::Configuration { .. } => {
                "The configuration is invalid. Check aroma.toml and AROMA_* variables."
            }
        }
    }

    pub fn error_class(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad_request",
            Self::NotFound { .. } => "not_found",
            Self::CatalogUnavailable { .. } => "catalog_load",
            Self::Configuration { .. } => "config_validation",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration { .. } => 2,
            Self::CatalogUnavailable { .. } => 3,
            Self::BadRequest { .. } | Self::NotFound { .. } => 4,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message }
            | Self::NotFound { message }
            | Self::CatalogUnavailable { message }
            | Self::Configuration { message } => message,
        }
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::Domain(error) => Self::BadRequest { message: error.to_string() },
            ApplicationError::ProductNotFound(id) => {
                Self::NotFound { message: format!("product {id} not found in catalog") }
            }
            ApplicationError::Catalog(message) => Self::CatalogUnavailable { message },
            ApplicationError::Configuration(message) => Self::Configuration { message },
        }
    }
}
