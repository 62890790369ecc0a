//! Monte Carlo aggregation over the core play API.

mod batch;
mod config;
mod error;
mod report;

pub use batch::*;
pub use config::*;
pub use error::*;
pub use report::*;
