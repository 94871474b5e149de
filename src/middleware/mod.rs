pub mod auth;
pub mod response;

pub use auth::{session_auth_middleware, CurrentUser};
pub use response::{ApiResponse, ApiResult};
