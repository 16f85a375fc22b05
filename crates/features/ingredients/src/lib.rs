//! Ingredient feature slice: an immutable, ordered store of [`Ingredient`] records.
//!
//! The store is built once from seed records and only answers reads afterwards.

mod error;
mod store;

pub use crate::error::{IngredientError, IngredientErrorExt};
pub use crate::store::IngredientStore;
use pantry_domain::Ingredient;

/// Ingredient feature state.
#[pantry_derive::pantry_slice]
pub struct Ingredients {
    pub store: IngredientStore,
}

/// Builds the ingredient slice from seed records, keeping their order.
///
/// # Errors
/// Returns [`IngredientError`] when two records share an id or a record has an empty name.
pub fn init<I>(records: I) -> Result<Ingredients, IngredientError>
where
    I: IntoIterator<Item = Ingredient>,
{
    let store = IngredientStore::new(records).context("Building ingredient slice")?;
    tracing::info!(ingredients = store.len(), "Ingredient slice initialized");

    Ok(Ingredients::new(IngredientsInner { store }))
}
