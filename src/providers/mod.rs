pub mod http;

pub use http::HttpRateFetcher;
