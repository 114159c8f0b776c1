pub mod error;
pub mod health;
pub mod routes;

pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
