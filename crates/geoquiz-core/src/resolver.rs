//! Country resolution: device position → reverse geocoding → country name.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ResolveError;
use crate::model::{Coordinates, Country, Permission};
use crate::traits::{LocationProvider, ReverseGeocoder};

/// A successful resolution: where the device was and which country that is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub coordinates: Coordinates,
    pub country: Country,
}

/// Wraps the location and reverse-geocoding collaborators.
///
/// Each call to [`CountryResolver::resolve`] is a single best-effort attempt:
/// one permission request, one position read, one geocoding request. Nothing
/// is retried or cached.
pub struct CountryResolver {
    location: Arc<dyn LocationProvider>,
    geocoder: Arc<dyn ReverseGeocoder>,
}

impl CountryResolver {
    pub fn new(location: Arc<dyn LocationProvider>, geocoder: Arc<dyn ReverseGeocoder>) -> Self {
        Self { location, geocoder }
    }

    #[instrument(skip(self), fields(location = self.location.name(), geocoder = self.geocoder.name()))]
    pub async fn resolve(&self) -> Result<Resolution, ResolveError> {
        if self.location.request_permission().await == Permission::Denied {
            tracing::warn!("location permission denied");
            return Err(ResolveError::PermissionDenied);
        }

        let coordinates = self.location.current_position().await?;
        tracing::debug!(%coordinates, "captured device position");

        let address = self.geocoder.reverse(coordinates).await?;
        let country = Country::from(address.country);
        if !country.is_resolved() {
            tracing::info!(%coordinates, "address has no country name");
        }

        Ok(Resolution {
            coordinates,
            country,
        })
    }
}
