// Domain layer modules
pub mod lambda_response;

// Re-exports
pub use lambda_response::{ALIVE_MESSAGE, LambdaResponse};
