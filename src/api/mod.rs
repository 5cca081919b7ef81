pub mod imagedict;
pub mod models;

pub use imagedict::*;
