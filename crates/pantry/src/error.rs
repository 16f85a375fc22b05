use pantry_ingredients::IngredientError;
use pantry_recipes::RecipeError;
use std::borrow::Cow;

/// Errors raised while loading the seed catalog and assembling the facade.
#[pantry_derive::pantry_error]
pub enum PantryError {
    #[error("Recipe store error{}: {source}", format_context(.context))]
    Recipes { source: RecipeError, context: Option<Cow<'static, str>> },
    #[error("Ingredient store error{}: {source}", format_context(.context))]
    Ingredients { source: IngredientError, context: Option<Cow<'static, str>> },
    #[error("Seed I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
    #[error("Seed format error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
