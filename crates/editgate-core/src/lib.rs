pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod protected;
pub mod request;
pub mod rule;
pub mod rules;

pub use error::{GateError, Result};
