use pantry_derive::pantry_slice;

#[pantry_slice]
pub struct Shelf<T> {
    pub items: Vec<T>,
}

fn main() {}
