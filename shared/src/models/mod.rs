//! Domain models for the run advisor

mod clothing;
mod run;
mod score;
mod weather;

pub use clothing::*;
pub use run::*;
pub use score::*;
pub use weather::*;
