use pantry_derive::pantry_error;

#[pantry_error]
pub enum ShelfError {
    #[error("Shelf I/O error: {0}")]
    Io(std::io::Error),
}

fn main() {}
