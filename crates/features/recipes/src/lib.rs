//! Recipe feature slice: an immutable, ordered store of [`Recipe`] records with
//! point lookup, full listing and case-insensitive name search.

mod error;
mod store;

pub use crate::error::{RecipeError, RecipeErrorExt};
pub use crate::store::RecipeStore;
use pantry_domain::Recipe;

/// Recipe feature state.
#[pantry_derive::pantry_slice]
pub struct Recipes {
    pub store: RecipeStore,
}

/// Builds the recipe slice from seed records, keeping their order.
///
/// # Errors
/// Returns [`RecipeError`] when two records share an id or a record has an empty name.
pub fn init<I>(records: I) -> Result<Recipes, RecipeError>
where
    I: IntoIterator<Item = Recipe>,
{
    let store = RecipeStore::new(records).context("Building recipe slice")?;
    tracing::info!(recipes = store.len(), "Recipe slice initialized");

    Ok(Recipes::new(RecipesInner { store }))
}
