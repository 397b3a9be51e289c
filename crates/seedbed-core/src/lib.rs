pub mod abstract_trait;
pub mod config;
pub mod docker;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod probe;
pub mod utils;
