//! Core business logic abstractions

pub mod config;
pub mod engine;
pub mod error;
pub mod log;
pub mod quote;

// Re-export main types for cleaner imports
pub use engine::{
    ConversionRequest, ConversionResult, RateOrigin, RateQuery, ResolvedRate, resolve_and_convert,
    sync_rate,
};
pub use error::RateError;
pub use quote::{Quote, QuoteProvider, Side, select_rate};
