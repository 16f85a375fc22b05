use pantry_derive::api_model;
use pantry_domain::{Ingredient, Recipe, RecordId};
use pantry_ingredients::Ingredients;
use pantry_recipes::Recipes;
use tracing::debug;

/// Read-only query surface over the recipe and ingredient slices.
///
/// Both slices are `Arc`-backed, so cloning a `Pantry` shares the same records. Every
/// method is a pure read; calling one any number of times has no side effect.
#[pantry_derive::pantry_slice]
pub struct Pantry {
    pub recipes: Recipes,
    pub ingredients: Ingredients,
}

/// Record counts, for health checks and diagnostics.
#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub recipes: usize,
    pub ingredients: usize,
}

impl Pantry {
    #[must_use]
    pub fn from_slices(recipes: Recipes, ingredients: Ingredients) -> Self {
        Self::new(PantryInner { recipes, ingredients })
    }

    pub fn get_recipe_by_id(&self, id: impl Into<RecordId>) -> Option<&Recipe> {
        let id = id.into();
        let recipe = self.recipes.store.get_recipe_by_id(&id);
        debug!(%id, found = recipe.is_some(), "get_recipe_by_id");
        recipe
    }

    #[must_use]
    pub fn get_all_recipes(&self) -> &[Recipe] {
        let recipes = self.recipes.store.get_all_recipes();
        debug!(count = recipes.len(), "get_all_recipes");
        recipes
    }

    pub fn search_recipes(&self, query: impl AsRef<str>) -> Vec<&Recipe> {
        let query = query.as_ref();
        let matches = self.recipes.store.search_recipes(query);
        debug!(query, count = matches.len(), "search_recipes");
        matches
    }

    pub fn get_ingredient_by_id(&self, id: impl Into<RecordId>) -> Option<&Ingredient> {
        let id = id.into();
        let ingredient = self.ingredients.store.get_ingredient_by_id(&id);
        debug!(%id, found = ingredient.is_some(), "get_ingredient_by_id");
        ingredient
    }

    pub fn get_ingredients_by_ids<I>(&self, ids: I) -> Vec<&Ingredient>
    where
        I: IntoIterator,
        I::Item: Into<RecordId>,
    {
        let ingredients = self.ingredients.store.get_ingredients_by_ids(ids);
        debug!(count = ingredients.len(), "get_ingredients_by_ids");
        ingredients
    }

    /// Ingredients referenced by `recipe`, in ingredient store order. Unknown ids are dropped.
    pub fn resolve_ingredients(&self, recipe: &Recipe) -> Vec<&Ingredient> {
        let ingredients = self.ingredients.store.get_ingredients_by_ids(&recipe.ingredient_ids);
        debug!(
            recipe = %recipe.id,
            requested = recipe.ingredient_ids.len(),
            count = ingredients.len(),
            "resolve_ingredients"
        );
        ingredients
    }

    /// Ingredient ids referenced by recipes but absent from the ingredient store.
    #[must_use]
    pub fn dangling_ingredient_ids(&self) -> Vec<(&RecordId, &RecordId)> {
        self.recipes
            .store
            .get_all_recipes()
            .iter()
            .flat_map(|recipe| recipe.ingredient_ids.iter().map(move |id| (&recipe.id, id)))
            .filter(|(_, id)| self.ingredients.store.get_ingredient_by_id(*id).is_none())
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats { recipes: self.recipes.store.len(), ingredients: self.ingredients.store.len() }
    }
}
