//! Product catalog loading and the built-in seed catalog.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::domain::product::{Product, ProductId, ScentNotes, ScentProfile};
use crate::errors::{ApplicationError, DomainError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
    #[error("could not parse catalog: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("duplicate product id {0} in catalog")]
    DuplicateProductId(ProductId),
    #[error("invalid product in catalog: {0}")]
    InvalidProduct(#[from] DomainError),
}

impl From<CatalogError> for ApplicationError {
    fn from(value: CatalogError) -> Self {
        match value {
            CatalogError::InvalidProduct(error) => Self::Domain(error),
            other => Self::Catalog(other.to_string()),
        }
    }
}

/// A validated, read-only list of products in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate products and reject duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProductId(product.id));
            }
        }

        Ok(Self { products })
    }

    /// Parse a JSON array of products.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let products = serde_json::from_str::<Vec<Product>>(raw).map_err(CatalogError::Parse)?;
        Self::new(products)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        let products = serde_json::from_str::<Vec<Product>>(&raw)
            .map_err(|source| CatalogError::ParseFile { path: path.to_path_buf(), source })?;
        let catalog = Self::new(products)?;

        info!(
            event_name = "catalog.loaded",
            path = %path.display(),
            product_count = catalog.len(),
            "catalog loaded from file"
        );
        Ok(catalog)
    }

    /// File catalog when a path is given, the built-in catalog otherwise.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn builtin() -> Self {
        Self { products: CATALOG_SEEDS.iter().map(CatalogSeed::product).collect() }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
struct CatalogSeed {
    id: u32,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    price: u32,
    top: &'static [&'static str],
    middle: &'static [&'static str],
    base: &'static [&'static str],
    occasions: &'static [&'static str],
    strength: u8,
    profile: ScentProfile,
}

impl CatalogSeed {
    fn product(&self) -> Product {
        Product {
            id: ProductId(self.id),
            name: self.name.to_owned(),
            category: self.category.to_owned(),
            description: self.description.to_owned(),
            price: self.price,
            notes: ScentNotes {
                top: owned(self.top),
                middle: owned(self.middle),
                base: owned(self.base),
            },
            occasions: owned(self.occasions),
            strength: self.strength,
            profile: self.profile,
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

const CATALOG_SEEDS: &[CatalogSeed] = &[
    CatalogSeed {
        id: 1,
        name: "Midnight Oud",
        category: "Eau de Parfum",
        description: "Smoky oud wrapped in saffron and worn leather.",
        price: 4999,
        top: &["Saffron", "Pink Pepper"],
        middle: &["Oud", "Leather"],
        base: &["Amber", "Patchouli"],
        occasions: &["party", "festival"],
        strength: 5,
        profile: ScentProfile::Strong,
    },
    CatalogSeed {
        id: 2,
        name: "Velvet Rose",
        category: "Eau de Parfum",
        description: "Damask rose over a warm vanilla heart.",
        price: 3899,
        top: &["Lychee", "Pink Pepper"],
        middle: &["Damask Rose", "Jasmine"],
        base: &["Vanilla", "Tonka Bean"],
        occasions: &["date", "party"],
        strength: 4,
        profile: ScentProfile::Sweet,
    },
    CatalogSeed {
        id: 3,
        name: "Tide Line",
        category: "Eau de Toilette",
        description: "Salt air and citrus after a morning swim.",
        price: 2499,
        top: &["Bergamot", "Grapefruit"],
        middle: &["Sea Salt", "Lavender"],
        base: &["White Musk", "Cedar"],
        occasions: &["gym"],
        strength: 2,
        profile: ScentProfile::Fresh,
    },
    CatalogSeed {
        id: 4,
        name: "Cool Down",
        category: "Body Mist",
        description: "Crushed mint and lemon for the walk home from training.",
        price: 1299,
        top: &["Mint", "Lemon"],
        middle: &["Aquatic Accord", "Verbena"],
        base: &["Vetiver"],
        occasions: &["gym", "college"],
        strength: 1,
        profile: ScentProfile::Fresh,
    },
    CatalogSeed {
        id: 5,
        name: "Quiet Hours",
        category: "Eau de Toilette",
        description: "Powdery iris softened with cedar for long days at the desk.",
        price: 3299,
        top: &["Neroli", "Bergamot"],
        middle: &["Iris", "Violet Leaf"],
        base: &["Cedarwood", "Vetiver"],
        occasions: &["office"],
        strength: 2,
        profile: ScentProfile::Mild,
    },
    CatalogSeed {
        id: 6,
        name: "Campus Green",
        category: "Eau de Toilette",
        description: "Green apple and tea, light enough for an eight o'clock lecture.",
        price: 1799,
        top: &["Green Apple", "Citrus"],
        middle: &["Green Tea", "Lavender"],
        base: &["Soft Musk"],
        occasions: &["college"],
        strength: 2,
        profile: ScentProfile::Mild,
    },
    CatalogSeed {
        id: 7,
        name: "Diya Nights",
        category: "Attar",
        description: "Sandalwood and saffron for celebrations that run late.",
        price: 4299,
        top: &["Saffron", "Cardamom"],
        middle: &["Jasmine Sambac", "Rose"],
        base: &["Sandalwood", "Musk"],
        occasions: &["festival", "date"],
        strength: 4,
        profile: ScentProfile::Sweet,
    },
    CatalogSeed {
        id: 8,
        name: "Boardroom",
        category: "Eau de Parfum",
        description: "Crisp vetiver and pepper with a polished finish.",
        price: 3599,
        top: &["Black Pepper", "Bergamot"],
        middle: &["Vetiver", "Geranium"],
        base: &["Tobacco", "Leather"],
        occasions: &["office", "party"],
        strength: 3,
        profile: ScentProfile::Strong,
    },
];
