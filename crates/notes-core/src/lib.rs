pub mod error;
pub mod extract;
pub mod health;
pub mod middleware;
pub mod tracing;
pub mod validation;
