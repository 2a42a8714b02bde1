pub mod application;
pub mod note;
pub mod profile;
