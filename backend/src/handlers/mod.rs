//! HTTP handlers

pub mod advice;
pub mod health;
pub mod score;

pub use advice::*;
pub use health::*;
pub use score::*;
