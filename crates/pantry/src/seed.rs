//! Seed catalog: the two ordered record sequences the stores are built from.
//!
//! The default catalog is compiled into the binary. `catalog.seed` in the configuration
//! replaces it with a JSON file of the same layout:
//!
//! ```json
//! { "recipes": [ { "id": "1", "name": "...", "cookTime": 45, ... } ], "ingredients": [ ... ] }
//! ```

use crate::error::{PantryError, PantryErrorExt};
use pantry_domain::config::CatalogConfig;
use pantry_domain::{Ingredient, Recipe};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// The catalog shipped with the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../seed/catalog.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedCatalog {
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl SeedCatalog {
    /// Parses [`EMBEDDED_CATALOG`].
    ///
    /// # Errors
    /// Only if the embedded file is malformed, which the test suite rules out.
    pub fn embedded() -> Result<Self, PantryError> {
        serde_json::from_str::<Self>(EMBEDDED_CATALOG).context("Parsing embedded catalog")
    }

    /// Reads and parses a seed file.
    ///
    /// # Errors
    /// * [`PantryError::Io`] if the file cannot be read.
    /// * [`PantryError::Json`] if it is not a valid catalog.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PantryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .context(format!("Reading seed file {}", path.display()))?;

        serde_json::from_str::<Self>(&raw).context(format!("Parsing seed file {}", path.display()))
    }

    /// The configured seed file, or the embedded catalog when none is configured.
    ///
    /// # Errors
    /// See [`SeedCatalog::from_path`].
    pub fn load(config: &CatalogConfig) -> Result<Self, PantryError> {
        let catalog = match &config.seed {
            Some(path) => Self::from_path(path)?,
            None => Self::embedded()?,
        };
        let source = config.seed.as_ref().map_or_else(|| "embedded".to_owned(), |p| p.display().to_string());
        info!(
            %source,
            recipes = catalog.recipes.len(),
            ingredients = catalog.ingredients.len(),
            "Seed catalog loaded"
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = SeedCatalog::embedded().unwrap();
        assert_eq!(catalog.recipes.len(), 4);
        assert!(catalog.ingredients.len() >= 4);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog: SeedCatalog = serde_json::from_str(r#"{ "ingredients": [] }"#).unwrap();
        assert!(catalog.recipes.is_empty());
    }

    #[test]
    fn unknown_top_level_keys_are_rejected() {
        assert!(serde_json::from_str::<SeedCatalog>(r#"{ "recipe": [] }"#).is_err());
    }
}
