pub mod info;
pub mod session;
