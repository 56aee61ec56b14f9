pub mod greeting;
pub mod health;
pub mod info;
pub mod not_found;
pub mod profile;
