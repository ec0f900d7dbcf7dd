mod models;
pub mod view;

pub use models::*;
