//! Build a kitchen from configuration plus the menu and cook roster files.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::config::KitchenConfig;
use crate::core::{AppResult, Catalog, Kitchen, Notifier, Roster};

/// Load the menu catalog from a JSON file.
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Catalog> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading menu file {}", path.display()))?;
    let catalog = Catalog::from_json_str(&raw)
        .with_context(|| format!("loading menu file {}", path.display()))?;
    tracing::info!(path = %path.display(), foods = catalog.len(), "menu loaded");
    Ok(catalog)
}

/// Load the cook roster from a JSON file.
pub fn load_roster(path: impl AsRef<Path>) -> AppResult<Roster> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading cooks file {}", path.display()))?;
    let roster = Roster::from_json_str(&raw)
        .with_context(|| format!("loading cooks file {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        cooks = roster.len(),
        proficiency = roster.total_proficiency(),
        "cook roster loaded"
    );
    Ok(roster)
}

/// Load data files named by `cfg` and start a kitchen.
///
/// # Errors
///
/// Fails if either data file path is missing from the configuration, a file
/// cannot be read or parsed, or the kitchen rejects the result.
pub fn build_kitchen(cfg: &KitchenConfig, notifier: Arc<dyn Notifier>) -> AppResult<Kitchen> {
    let menu_path = cfg
        .menu_path
        .as_ref()
        .context("menu_path is not configured")?;
    let cooks_path = cfg
        .cooks_path
        .as_ref()
        .context("cooks_path is not configured")?;

    let catalog = load_catalog(menu_path)?;
    let roster = load_roster(cooks_path)?;
    let kitchen = Kitchen::start(cfg.clone(), catalog, roster, notifier)?;
    Ok(kitchen)
}
