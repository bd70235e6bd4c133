pub mod model;
pub mod note;
pub mod password;
pub mod seed;
pub mod user;
