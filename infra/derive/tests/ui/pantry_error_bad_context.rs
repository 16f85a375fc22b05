use pantry_derive::pantry_error;

#[pantry_error]
pub enum ShelfError {
    #[error("Shelf error: {message}")]
    Shelf { message: String, context: Option<String> },
}

fn main() {}
