pub mod crud;
pub mod health;
pub mod user;
