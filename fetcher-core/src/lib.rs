//! Core library for the `weather-fetcher` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - Query URL construction and the HTTP transport
//! - Field extraction (marker scan or structured JSON) into a [`WeatherReading`]
//! - Unit conversion and the console table
//!
//! It is used by `weather-fetcher`, but can also be reused by other binaries.

pub mod client;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod model;
pub mod parse;
pub mod render;
pub mod request;
pub mod transport;

pub use client::WeatherClient;
pub use config::{Config, Settings};
pub use error::{ExtractionError, TransportError, WeatherError};
pub use model::{RawResponse, WeatherReading};
pub use parse::ParserKind;
pub use transport::{HttpTransport, Transport};
