//! Collaborator traits for device location and reverse geocoding.
//!
//! These async traits are implemented by the `geoquiz-providers` crate.

use async_trait::async_trait;

use crate::error::ResolveError;
use crate::model::{Address, Coordinates, Permission};

// ---------------------------------------------------------------------------
// Location provider trait
// ---------------------------------------------------------------------------

/// Source of the device position.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Human-readable provider name (e.g. "static").
    fn name(&self) -> &str;

    /// Ask the user for access to their location.
    async fn request_permission(&self) -> Permission;

    /// Read the current position once.
    ///
    /// Fails with [`ResolveError::LocationUnavailable`] when no fix is available.
    async fn current_position(&self) -> Result<Coordinates, ResolveError>;
}

// ---------------------------------------------------------------------------
// Reverse geocoder trait
// ---------------------------------------------------------------------------

/// Service that maps coordinates to a postal address.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Human-readable geocoder name (e.g. "nominatim").
    fn name(&self) -> &str;

    /// Look up the address at `coords`.
    ///
    /// Fails with [`ResolveError::NoAddressFound`] when the service answers
    /// without an address, and [`ResolveError::NetworkError`] when it cannot
    /// be reached.
    async fn reverse(&self, coords: Coordinates) -> Result<Address, ResolveError>;
}
