// =============================================================================
// Data Provider Module
// =============================================================================
//
// The only I/O in the service: fetching daily closing-price history from the
// remote quote provider. Failures surface as a typed `ProviderError` so the
// API layer can map them to distinct status codes instead of returning a
// meaningless recommendation.

pub mod alpha_vantage;

pub use alpha_vantage::{AlphaVantageClient, ProviderError};
