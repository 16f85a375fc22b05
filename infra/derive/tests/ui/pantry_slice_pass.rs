use pantry_derive::pantry_slice;
use pantry_domain::registry::InitializedSlice;

#[pantry_slice]
pub struct Shelf {
    pub label: String,
}

#[pantry_slice]
pub struct Marker;

fn main() {
    let shelf = Shelf::new(ShelfInner { label: "dry goods".to_owned() });
    assert_eq!(shelf.label, "dry goods");

    let _ = InitializedSlice::new(shelf);
    let _ = InitializedSlice::new(Marker::new(MarkerInner));
}
