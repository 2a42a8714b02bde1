// Resume Hub: the structured profile editor and the PDF resume library.

pub mod handlers;
pub mod library;
pub mod profile;
