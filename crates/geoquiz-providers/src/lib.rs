//! geoquiz-providers — location and reverse-geocoding collaborators.
//!
//! Implements the `LocationProvider` and `ReverseGeocoder` traits from
//! `geoquiz-core`: a Nominatim client over HTTP, a statically configured
//! location source, and mocks for tests.

pub mod config;
pub mod error;
pub mod location;
pub mod mock;
pub mod nominatim;

pub use config::{create_geocoder, create_location, load_config, GeoquizConfig};
pub use error::ProviderError;
