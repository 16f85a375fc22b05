use pantry_domain::registry::InitializedSlice;
use pantry_domain::{Ingredient, RecordId};
use pantry_ingredients::{IngredientError, IngredientStore, Ingredients, init};
use proptest::prelude::*;

fn pantry_shelf() -> Vec<Ingredient> {
    [("1", "Chicken", "500 g"), ("2", "Yogurt", "1 cup"), ("3", "Tomato Sauce", "400 ml"), ("4", "Cream", "100 ml")]
        .into_iter()
        .map(|(id, name, quantity)| Ingredient {
            id: id.into(),
            name: name.to_owned(),
            quantity: quantity.to_owned(),
        })
        .collect()
}

#[test]
fn every_known_id_resolves_to_its_record() {
    let store = IngredientStore::new(pantry_shelf()).unwrap();

    for record in pantry_shelf() {
        let found = store.get_ingredient_by_id(&record.id).expect("known id");
        assert_eq!(found, &record);
    }
    assert!(store.get_ingredient_by_id("999").is_none());
}

#[test]
fn integer_ids_are_coerced() {
    let store = IngredientStore::new(pantry_shelf()).unwrap();

    assert_eq!(store.get_ingredient_by_id(2).map(|i| i.name.as_str()), Some("Yogurt"));
    assert_eq!(store.get_ingredient_by_id(2_u64), store.get_ingredient_by_id("2"));
}

#[test]
fn unknown_ids_are_dropped_from_batches() {
    let store = IngredientStore::new(pantry_shelf()).unwrap();

    let found = store.get_ingredients_by_ids(["1", "999"]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Chicken");
}

#[test]
fn init_produces_registrable_slice() {
    let slice = init(pantry_shelf()).unwrap();
    assert_eq!(slice.store.len(), 4);

    let registered = InitializedSlice::new(slice);
    assert_eq!(registered.id, std::any::TypeId::of::<Ingredients>());
    assert!(registered.downcast_ref::<Ingredients>().is_some());
}

#[test]
fn init_reports_duplicate_ids_with_context() {
    let mut records = pantry_shelf();
    records.push(records[0].clone());

    let err = init(records).unwrap_err();
    assert!(matches!(err, IngredientError::DuplicateId { .. }));
    assert!(err.to_string().contains("Building ingredient slice"), "{err}");
}

proptest! {
    #[test]
    fn batch_lookup_is_a_store_ordered_filter(requested in proptest::collection::vec(0_u32..8, 0..12)) {
        let store = IngredientStore::new(pantry_shelf()).unwrap();
        let found = store.get_ingredients_by_ids(requested.iter().copied());

        let expected: Vec<&Ingredient> = store
            .iter()
            .filter(|record| requested.iter().any(|&id| RecordId::from(id) == record.id))
            .collect();
        prop_assert_eq!(&found, &expected);

        let mut unique_known: Vec<u32> = requested.iter().copied().filter(|id| (1..=4).contains(id)).collect();
        unique_known.sort_unstable();
        unique_known.dedup();
        prop_assert_eq!(found.len(), unique_known.len());
    }

    #[test]
    fn lookups_are_idempotent(id in 0_u32..8) {
        let store = IngredientStore::new(pantry_shelf()).unwrap();
        prop_assert_eq!(store.get_ingredient_by_id(id), store.get_ingredient_by_id(id));
        prop_assert_eq!(store.get_ingredients_by_ids([id]), store.get_ingredients_by_ids([id]));
    }
}
