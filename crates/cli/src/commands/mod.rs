pub mod config;
pub mod doctor;
pub mod occasions;
pub mod recommend;
pub mod score;

use std::path::PathBuf;

use aroma_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use aroma_core::{ApplicationError, Catalog, InterfaceError};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(&payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(&payload) }
    }

    pub fn from_error(command: &str, error: impl Into<ApplicationError>) -> Self {
        let interface = InterfaceError::from(error.into());
        Self::failure(command, interface.error_class(), interface.message(), interface.exit_code())
    }

    /// Successful command whose output is a structured report.
    pub fn report(payload: &impl Serialize) -> Self {
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn text(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }
}

/// Config and catalog resolved for one command invocation.
pub struct CommandContext {
    pub config: AppConfig,
    pub catalog: Catalog,
}

pub fn load_context(catalog_path: Option<PathBuf>) -> Result<CommandContext, ApplicationError> {
    let config = AppConfig::load(LoadOptions {
        overrides: ConfigOverrides { catalog_path, ..ConfigOverrides::default() },
        ..LoadOptions::default()
    })?;
    let catalog = Catalog::load_or_builtin(config.catalog.path.as_deref())?;

    Ok(CommandContext { config, catalog })
}

fn serialize_payload(payload: &impl Serialize) -> String {
    serde_json::to_string(payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
