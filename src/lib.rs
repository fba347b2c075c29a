// Library exports for testing
pub mod badge;
pub mod constants;
pub mod tree;
