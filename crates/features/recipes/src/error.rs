use std::borrow::Cow;

/// Errors raised while building the recipe store.
#[pantry_derive::pantry_error]
pub enum RecipeError {
    /// Two seed records share an id.
    #[error("Duplicate recipe id{}: {message}", format_context(.context))]
    DuplicateId { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// A seed record breaks a field invariant (e.g. empty name).
    #[error("Invalid recipe{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
