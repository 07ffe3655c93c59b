pub mod analyze;
pub mod letters;
pub mod mood;
