//! Core business logic abstractions

pub mod config;
pub mod filter;
pub mod log;
pub mod names;
pub mod normalize;
pub mod rate;
pub mod source;

// Re-export main types for cleaner imports
pub use normalize::RateNormalizer;
pub use rate::CurrencyRate;
pub use source::{RateSource, load_rates};
