mod error;
mod health;
mod router;
mod state;

pub use error::{ApiError, ErrorBody};
pub use health::HealthResponse;
pub use router::system_router;
pub use state::{ApiState, ApiStateBuilder, ApiStateError, ApiStateInner};
