//! sea-orm entities for the notes service tables.

pub mod users;
pub mod users_details;
pub mod users_notes;
