use crate::error::RecipeError;
use fxhash::FxHashMap;
use pantry_domain::{Recipe, RecordId};

/// Recipe records in seed order, indexed by id.
#[derive(Debug, Default)]
pub struct RecipeStore {
    records: Vec<Recipe>,
    index: FxHashMap<RecordId, usize>,
    // Lowercased names, same positions as `records`.
    search_keys: Vec<String>,
}

impl RecipeStore {
    /// Validates and indexes `records`.
    ///
    /// # Errors
    /// * [`RecipeError::DuplicateId`] if an id appears twice.
    /// * [`RecipeError::Validation`] if a name is blank.
    pub fn new<I>(records: I) -> Result<Self, RecipeError>
    where
        I: IntoIterator<Item = Recipe>,
    {
        let records: Vec<Recipe> = records.into_iter().collect();
        let mut index = FxHashMap::with_capacity_and_hasher(records.len(), Default::default());
        let mut search_keys = Vec::with_capacity(records.len());

        for (position, recipe) in records.iter().enumerate() {
            if recipe.name.trim().is_empty() {
                return Err(RecipeError::Validation {
                    message: format!("recipe '{}' has an empty name", recipe.id).into(),
                    context: None,
                });
            }
            if index.insert(recipe.id.clone(), position).is_some() {
                return Err(RecipeError::DuplicateId {
                    message: recipe.id.to_string().into(),
                    context: None,
                });
            }
            search_keys.push(recipe.name.to_lowercase());
        }

        Ok(Self { records, index, search_keys })
    }

    /// Point lookup; `None` when no recipe has this id.
    pub fn get_recipe_by_id(&self, id: impl Into<RecordId>) -> Option<&Recipe> {
        let id = id.into();
        self.index.get(id.as_str()).map(|&position| &self.records[position])
    }

    /// All recipes in store order.
    #[must_use]
    pub fn get_all_recipes(&self) -> &[Recipe] {
        &self.records
    }

    /// Recipes whose lowercased name contains the lowercased `query`, in store order.
    /// An empty query matches every recipe.
    pub fn search_recipes(&self, query: impl AsRef<str>) -> Vec<&Recipe> {
        let needle = query.as_ref().to_lowercase();

        self.search_keys
            .iter()
            .zip(&self.records)
            .filter(|(key, _)| key.contains(needle.as_str()))
            .map(|(_, recipe)| recipe)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
