// Builder configuration: Earth model and courier speed

use crate::error::ConfigError;
use crate::models::{Kilometers, Location, Minutes};
use crate::utils::distance::{haversine_distance_km, travel_time_minutes};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_SPEED_KMH: f64 = 20.0;

/// Constants of the distance model. Missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Sphere radius used by the haversine formula
    #[serde(rename = "earthRadiusKm")]
    pub earth_radius_km: f64,

    /// Constant straight-line courier speed
    #[serde(rename = "assumedSpeedKmPerHour")]
    pub assumed_speed_kmh: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: DEFAULT_EARTH_RADIUS_KM,
            assumed_speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl RouteConfig {
    pub fn with_earth_radius_km(mut self, earth_radius_km: f64) -> Self {
        self.earth_radius_km = earth_radius_km;
        self
    }

    pub fn with_assumed_speed_kmh(mut self, assumed_speed_kmh: f64) -> Self {
        self.assumed_speed_kmh = assumed_speed_kmh;
        self
    }

    /// Applies command-line overrides; `None` keeps the current value
    pub fn with_overrides(mut self, speed_kmh: Option<f64>, earth_radius_km: Option<f64>) -> Self {
        if let Some(speed) = speed_kmh {
            self.assumed_speed_kmh = speed;
        }
        if let Some(radius) = earth_radius_km {
            self.earth_radius_km = radius;
        }
        self
    }

    /// Rejects radii and speeds that are not finite and strictly positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.earth_radius_km.is_finite() && self.earth_radius_km > 0.0) {
            return Err(ConfigError::EarthRadius(self.earth_radius_km));
        }
        if !(self.assumed_speed_kmh.is_finite() && self.assumed_speed_kmh > 0.0) {
            return Err(ConfigError::Speed(self.assumed_speed_kmh));
        }
        Ok(())
    }

    /// Rounded great-circle distance between two locations
    pub fn distance_km(&self, a: &Location, b: &Location) -> Kilometers {
        haversine_distance_km(a.point(), b.point(), self.earth_radius_km)
    }

    /// Travel time between two locations at the configured speed
    pub fn travel_time_minutes(&self, a: &Location, b: &Location) -> Minutes {
        travel_time_minutes(self.distance_km(a, b), self.assumed_speed_kmh)
    }
}
