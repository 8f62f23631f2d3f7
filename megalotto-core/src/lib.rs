pub mod export;
pub mod frequency;
pub mod models;
pub mod sampler;
pub mod universe;
