//! Domain Value Objects

pub mod public_id;
pub mod public_key;
pub mod user_id;
pub mod user_name;
pub mod user_password;
pub mod user_status;
