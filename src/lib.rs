//! Active security scanner for AEM Dispatcher installations.
//!
//! Probes a fixed list of dispatcher-sensitive paths on a target host and
//! classifies each response as SAFE, VULNERABLE or FAILED.

pub mod args;
pub mod classifier;
pub mod cli;
mod error;
pub mod model;
pub mod paths;
pub mod scanner;

pub use error::Error;
