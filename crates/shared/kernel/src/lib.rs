//! Kernel utilities shared by the catalog facade and the server binary.
//! Keep this crate lightweight: configuration loading, the API state with its slice registry,
//! HTTP error mapping and the system routes.
//!
//! ## Config loading
//! ```rust,ignore
//! use pantry_kernel::config::load_config;
//! use pantry_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server"))?;
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use pantry_domain as domain;
