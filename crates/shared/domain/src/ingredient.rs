use crate::RecordId;
use pantry_derive::api_model;

/// An ingredient record. `quantity` is free text ("1 cup", "2 cloves"), never parsed.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct Ingredient {
    #[cfg_attr(feature = "server", schema(value_type = String, example = "1"))]
    pub id: RecordId,
    #[cfg_attr(feature = "server", schema(example = "Chicken"))]
    pub name: String,
    #[cfg_attr(feature = "server", schema(example = "500 g"))]
    pub quantity: String,
}
