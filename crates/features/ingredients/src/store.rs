use crate::error::IngredientError;
use fxhash::{FxHashMap, FxHashSet};
use pantry_domain::{Ingredient, RecordId};

/// Ingredient records in seed order, indexed by id.
#[derive(Debug, Default)]
pub struct IngredientStore {
    records: Vec<Ingredient>,
    index: FxHashMap<RecordId, usize>,
}

impl IngredientStore {
    /// Validates and indexes `records`.
    ///
    /// # Errors
    /// * [`IngredientError::DuplicateId`] if an id appears twice.
    /// * [`IngredientError::Validation`] if a name is blank.
    pub fn new<I>(records: I) -> Result<Self, IngredientError>
    where
        I: IntoIterator<Item = Ingredient>,
    {
        let records: Vec<Ingredient> = records.into_iter().collect();
        let mut index = FxHashMap::with_capacity_and_hasher(records.len(), Default::default());

        for (position, record) in records.iter().enumerate() {
            if record.name.trim().is_empty() {
                return Err(IngredientError::Validation {
                    message: format!("ingredient '{}' has an empty name", record.id).into(),
                    context: None,
                });
            }
            if index.insert(record.id.clone(), position).is_some() {
                return Err(IngredientError::DuplicateId {
                    message: record.id.to_string().into(),
                    context: None,
                });
            }
        }

        Ok(Self { records, index })
    }

    /// Point lookup; `None` when no record has this id.
    pub fn get_ingredient_by_id(&self, id: impl Into<RecordId>) -> Option<&Ingredient> {
        let id = id.into();
        self.index.get(id.as_str()).map(|&position| &self.records[position])
    }

    /// Every record whose id appears in `ids`, in store order.
    ///
    /// The order of `ids` is irrelevant, unknown ids are skipped and repeated ids do not
    /// repeat records.
    pub fn get_ingredients_by_ids<I>(&self, ids: I) -> Vec<&Ingredient>
    where
        I: IntoIterator,
        I::Item: Into<RecordId>,
    {
        let wanted: FxHashSet<RecordId> = ids.into_iter().map(Into::into).collect();
        if wanted.is_empty() {
            return Vec::new();
        }

        self.records.iter().filter(|record| wanted.contains(&record.id)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.records.iter()
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

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(id: &str, name: &str) -> Ingredient {
        Ingredient { id: id.into(), name: name.to_owned(), quantity: "1 cup".to_owned() }
    }

    fn names(records: &[&Ingredient]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn batch_lookup_follows_store_order() {
        let store = IngredientStore::new([
            ingredient("a", "Flour"),
            ingredient("b", "Sugar"),
            ingredient("c", "Eggs"),
        ])
        .unwrap();

        let found = store.get_ingredients_by_ids(["c", "a", "c", "zzz"]);
        assert_eq!(names(&found), ["Flour", "Eggs"]);
    }

    #[test]
    fn empty_request_yields_nothing() {
        let store = IngredientStore::new([ingredient("a", "Flour")]).unwrap();
        assert!(store.get_ingredients_by_ids(Vec::<RecordId>::new()).is_empty());
    }

    #[test]
    fn rejects_duplicates_and_blank_names() {
        let duplicate = IngredientStore::new([ingredient("a", "Flour"), ingredient("a", "Rye")]);
        assert!(matches!(duplicate, Err(IngredientError::DuplicateId { .. })));

        let blank = IngredientStore::new([ingredient("a", "  ")]);
        assert!(matches!(blank, Err(IngredientError::Validation { .. })));
    }
}
