//! Mock geocoder for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use geoquiz_core::model::{Address, Coordinates};
use geoquiz_core::traits::ReverseGeocoder;
use geoquiz_core::ResolveError;

/// A mock reverse geocoder for exercising sessions without network calls.
///
/// Always returns the configured answer and records what it was asked.
pub struct MockGeocoder {
    answer: Result<Address, ResolveError>,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Coordinates of the last request.
    last_coordinates: Mutex<Option<Coordinates>>,
}

impl MockGeocoder {
    /// A geocoder that places every coordinate in `country`.
    pub fn with_country(country: &str) -> Self {
        Self::with_address(Address {
            country: Some(country.to_string()),
            country_code: None,
        })
    }

    pub fn with_address(address: Address) -> Self {
        Self::new(Ok(address))
    }

    pub fn failing(error: ResolveError) -> Self {
        Self::new(Err(error))
    }

    fn new(answer: Result<Address, ResolveError>) -> Self {
        Self {
            answer,
            call_count: AtomicU32::new(0),
            last_coordinates: Mutex::new(None),
        }
    }

    /// Get the number of calls made to this geocoder.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the coordinates of the last request.
    pub fn last_coordinates(&self) -> Option<Coordinates> {
        *self
            .last_coordinates
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ReverseGeocoder for MockGeocoder {
    fn name(&self) -> &str {
        "mock"
    }

    async fn reverse(&self, coords: Coordinates) -> Result<Address, ResolveError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self
            .last_coordinates
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(coords);
        self.answer.clone()
    }
}
