use pantry_derive::pantry_error;

#[pantry_error]
pub enum ShelfError {
    #[error("Shelf I/O error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
