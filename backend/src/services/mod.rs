//! Business logic services for the Run Outfit Advisor

pub mod advice;

pub use advice::AdviceService;
