//! Facade crate for the pantry catalog.
//! Re-exports domain/kernel primitives, loads the seed catalog and assembles the feature
//! slices behind [`Pantry`]. Business rules live in the feature crates; this crate only
//! composes them.
//!
//! ## Usage
//! ```rust
//! let pantry = pantry::build(pantry::SeedCatalog::embedded()?)?;
//!
//! let tikka = pantry.get_recipe_by_id(1).expect("seeded");
//! let names: Vec<_> = pantry.resolve_ingredients(tikka).iter().map(|i| i.name.as_str()).collect();
//! assert_eq!(names, ["Chicken", "Yogurt", "Tomato Sauce", "Cream"]);
//! # Ok::<(), pantry::PantryError>(())
//! ```
//!
//! With the `server` feature, [`init`] registers the slices for the kernel `ApiState` and
//! [`server::catalog_router`] exposes the read API.

mod error;
mod facade;
pub mod seed;
#[cfg(feature = "server")]
pub mod server;

pub use crate::error::{PantryError, PantryErrorExt};
pub use crate::facade::{CatalogStats, Pantry, PantryInner};
pub use crate::seed::SeedCatalog;
pub use pantry_domain as domain;
pub use pantry_kernel as kernel;

use pantry_domain::config::ApiConfig;
use pantry_domain::registry::InitializedSlice;

/// Feature crates composed by the facade.
pub mod features {
    pub use pantry_ingredients as ingredients;
    pub use pantry_recipes as recipes;
}

/// Builds both stores from `catalog` and injects them into a [`Pantry`].
///
/// # Errors
/// Returns [`PantryError::Recipes`] or [`PantryError::Ingredients`] when a store rejects
/// its records.
pub fn build(catalog: SeedCatalog) -> Result<Pantry, PantryError> {
    let SeedCatalog { recipes, ingredients } = catalog;

    let recipes = features::recipes::init(recipes)?;
    let ingredients = features::ingredients::init(ingredients)?;
    let pantry = Pantry::from_slices(recipes, ingredients);

    for (recipe, ingredient) in pantry.dangling_ingredient_ids() {
        tracing::debug!(%recipe, %ingredient, "Recipe references an unknown ingredient");
    }

    Ok(pantry)
}

/// Loads the configured catalog and returns the slices to register in the API state.
///
/// # Errors
/// Returns an error if the seed cannot be read or parsed, or a store rejects it.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, PantryError> {
    let catalog = SeedCatalog::load(&config.catalog)?;
    let pantry = build(catalog)?;

    Ok(vec![
        InitializedSlice::new(pantry.recipes.clone()),
        InitializedSlice::new(pantry.ingredients.clone()),
        InitializedSlice::new(pantry),
    ])
}
