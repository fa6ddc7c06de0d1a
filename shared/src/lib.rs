//! Clothing decision engine for the Run Outfit Advisor
//!
//! This crate is pure: it turns hourly weather samples and a planned run window
//! into a suitability score and a clothing recommendation. It is shared between
//! the backend and the browser front end (via WASM).

pub mod assessment;
pub mod clothing;
pub mod error;
pub mod models;
pub mod resolver;
pub mod scoring;
pub mod types;
pub mod validation;

pub use assessment::*;
pub use clothing::*;
pub use error::*;
pub use models::*;
pub use resolver::*;
pub use scoring::*;
pub use types::*;
pub use validation::*;
