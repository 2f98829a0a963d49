#[path = "api/types.rs"]
mod types;

#[path = "api/handlers.rs"]
mod handlers;

pub use handlers::{router, ServerState};
pub use types::{ErrorBody, EvaluateRequest};
