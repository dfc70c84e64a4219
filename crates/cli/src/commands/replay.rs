//! Replay an event script against a fresh storefront page.
//!
//! Scripts are either JSON lines (one tagged event per line) or a YAML list
//! of the same events, chosen by file extension.

use std::path::Path;

use genae_storefront::{Storefront, StorefrontConfig, UiEvent};
use thiserror::Error;
use tracing::info;

use super::write_update;

/// Errors raised while loading an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid event on line {line}: {source}")]
    JsonLine {
        line: usize,
        source: serde_json::Error,
    },
    #[error("Invalid YAML event script: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Script encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptFormat {
    JsonLines,
    Yaml,
}

impl ScriptFormat {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::JsonLines,
        }
    }
}

/// Replay `script` and write one page update per event to stdout.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, configuration is
/// invalid, rendering fails, or stdout cannot be written.
pub fn run(script: &Path, pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let events = load_script(script)?;
    info!(path = %script.display(), events = events.len(), "Loaded event script");

    let config = StorefrontConfig::from_env()?;
    let mut page = Storefront::new(config)?;

    let mut out = std::io::stdout().lock();
    for event in events {
        let update = page.dispatch(event)?;
        write_update(&mut out, &update, pretty)?;
    }

    info!(
        items = page.store().item_count(),
        total = %page.store().total(),
        "Replay finished"
    );
    Ok(())
}

fn load_script(path: &Path) -> Result<Vec<UiEvent>, ScriptError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_script(&content, ScriptFormat::from_path(path))
}

fn parse_script(content: &str, format: ScriptFormat) -> Result<Vec<UiEvent>, ScriptError> {
    match format {
        ScriptFormat::Yaml => Ok(serde_yaml::from_str(content)?),
        ScriptFormat::JsonLines => content
            .lines()
            .enumerate()
            .filter(|(_, line)| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|source| ScriptError::JsonLine {
                    line: index + 1,
                    source,
                })
            })
            .collect(),
    }
}
