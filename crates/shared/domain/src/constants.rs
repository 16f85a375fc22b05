//! `OpenAPI` tags shared by the HTTP handlers.

pub const SYSTEM_TAG: &str = "System";
pub const RECIPES_TAG: &str = "Recipes";
pub const INGREDIENTS_TAG: &str = "Ingredients";
