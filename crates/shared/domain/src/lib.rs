//! # Domain Models
//!
//! Plain data shared by every crate: [`Recipe`], [`Ingredient`], [`RecordId`], the API
//! configuration and the feature slice registry.
//! No I/O and no business logic here; stores and the facade live in their own crates.

pub mod config;
pub mod constants;
pub mod id;
pub mod ingredient;
pub mod recipe;
pub mod registry;

pub use id::RecordId;
pub use ingredient::Ingredient;
pub use recipe::{Difficulty, Recipe};
