//! Location provider fed from configuration or command-line flags.

use async_trait::async_trait;

use geoquiz_core::model::{Coordinates, Permission};
use geoquiz_core::traits::LocationProvider;
use geoquiz_core::ResolveError;

/// A location source with a fixed permission answer and an optional fix.
#[derive(Debug, Clone)]
pub struct StaticLocation {
    permission: Permission,
    coordinates: Option<Coordinates>,
}

impl StaticLocation {
    pub fn new(permission: Permission, coordinates: Option<Coordinates>) -> Self {
        Self {
            permission,
            coordinates,
        }
    }

    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self::new(
            Permission::Granted,
            Some(Coordinates::new(latitude, longitude)),
        )
    }

    pub fn denied() -> Self {
        Self::new(Permission::Denied, None)
    }
}

#[async_trait]
impl LocationProvider for StaticLocation {
    fn name(&self) -> &str {
        "static"
    }

    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn current_position(&self) -> Result<Coordinates, ResolveError> {
        let coords = self.coordinates.ok_or_else(|| {
            ResolveError::LocationUnavailable("no coordinates configured".into())
        })?;

        if !(-90.0..=90.0).contains(&coords.latitude)
            || !(-180.0..=180.0).contains(&coords.longitude)
        {
            return Err(ResolveError::LocationUnavailable(format!(
                "coordinates out of range: {coords}"
            )));
        }

        Ok(coords)
    }
}
