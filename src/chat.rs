pub mod context;
pub mod courses;
pub mod engine;
pub mod knowledge;
pub mod random;
