use pantry::domain::config::{ApiConfig, CatalogConfig};
use pantry::domain::registry::InitializedSlice;
use pantry::features::{ingredients::Ingredients, recipes::Recipes};
use pantry::{Pantry, PantryError, SeedCatalog};
use std::fs;
use std::path::PathBuf;

const SMALL_CATALOG: &str = r#"{
    "recipes": [
        { "id": "a", "name": "Porridge", "steps": null, "cookTime": 5, "difficulty": "trivial", "ingredientIds": ["x", "y"] }
    ],
    "ingredients": [
        { "id": "x", "name": "Oats", "quantity": "1 cup" },
        { "id": "y", "name": "Milk", "quantity": "2 cups" }
    ]
}"#;

fn write_seed(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

fn config_with_seed(seed: Option<PathBuf>) -> ApiConfig {
    let mut config = ApiConfig::default();
    config.catalog = CatalogConfig { seed };
    config
}

fn slice<'a, T: pantry::domain::registry::FeatureSlice>(slices: &'a [InitializedSlice]) -> Option<&'a T> {
    slices.iter().find_map(InitializedSlice::downcast_ref::<T>)
}

#[test]
fn default_config_uses_the_embedded_catalog() {
    let catalog = SeedCatalog::load(&CatalogConfig::default()).unwrap();
    assert_eq!(catalog, SeedCatalog::embedded().unwrap());
}

#[test]
fn seed_file_replaces_the_embedded_catalog() {
    let (_dir, path) = write_seed(SMALL_CATALOG);

    let slices = pantry::init(&config_with_seed(Some(path))).unwrap();
    assert_eq!(slices.len(), 3);

    let pantry = slice::<Pantry>(&slices).unwrap();
    assert_eq!(pantry.stats().recipes, 1);
    assert!(pantry.get_recipe_by_id("1").is_none());

    let porridge = pantry.get_recipe_by_id("a").unwrap();
    assert_eq!(porridge.difficulty.as_str(), "trivial");
    assert_eq!(pantry.resolve_ingredients(porridge).len(), 2);

    assert_eq!(slice::<Recipes>(&slices).unwrap().store.len(), 1);
    assert_eq!(slice::<Ingredients>(&slices).unwrap().store.len(), 2);
}

#[test]
fn missing_seed_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = pantry::init(&config_with_seed(Some(dir.path().join("absent.json")))).unwrap_err();

    assert!(matches!(err, PantryError::Io { .. }));
    assert!(err.to_string().contains("Reading seed file"));
}

#[test]
fn malformed_seed_file_is_a_format_error() {
    let (_dir, path) = write_seed(r#"{ "recipes": [ { "id": "a" } ] }"#);
    let err = SeedCatalog::from_path(&path).unwrap_err();

    assert!(matches!(err, PantryError::Json { .. }));
    assert!(err.to_string().starts_with("Seed format error (Parsing seed file"));
}

#[test]
fn duplicate_ids_surface_as_store_errors() {
    let (_dir, path) = write_seed(
        r#"{
            "recipes": [],
            "ingredients": [
                { "id": "x", "name": "Oats", "quantity": "1 cup" },
                { "id": "x", "name": "Rye", "quantity": "1 cup" }
            ]
        }"#,
    );

    let err = pantry::init(&config_with_seed(Some(path))).unwrap_err();
    assert!(matches!(err, PantryError::Ingredients { .. }));
    assert!(err.to_string().contains("Building ingredient slice"));
}

#[test]
fn blank_recipe_names_are_rejected() {
    let mut catalog = SeedCatalog::embedded().unwrap();
    catalog.recipes[0].name = "   ".to_owned();

    let err = pantry::build(catalog).unwrap_err();
    assert!(matches!(err, PantryError::Recipes { .. }));
}
