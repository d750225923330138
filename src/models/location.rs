// Location model representing a stop (or the courier's start) in geographic space

use crate::models::{LocationId, Minutes};
use geo::Point;
use serde::{Deserialize, Serialize};

/// Represents a location with an id, latitude/longitude in degrees and the
/// delivery metadata the route builder needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Unique identifier of the stop
    pub id: LocationId,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lng: f64,

    /// Minutes the courier has to wait here (food preparation for restaurants)
    #[serde(default)]
    pub wait_time: Minutes,

    /// Restaurant whose order must be picked up before this stop can be served
    #[serde(default, alias = "orderFrom", skip_serializing_if = "Option::is_none")]
    pub pickup_source: Option<LocationId>,
}

impl Location {
    /// Creates a location without wait time or pickup dependency
    pub fn new<S: Into<LocationId>>(id: S, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lng,
            wait_time: 0.0,
            pickup_source: None,
        }
    }

    /// Creates a restaurant stop with the given preparation time
    pub fn restaurant<S: Into<LocationId>>(id: S, lat: f64, lng: f64, wait_time: Minutes) -> Self {
        Self::new(id, lat, lng).with_wait_time(wait_time)
    }

    /// Creates a customer stop served from the given restaurant
    pub fn customer<S, R>(id: S, lat: f64, lng: f64, pickup_source: R) -> Self
    where
        S: Into<LocationId>,
        R: Into<LocationId>,
    {
        Self {
            pickup_source: Some(pickup_source.into()),
            ..Self::new(id, lat, lng)
        }
    }

    pub fn with_wait_time(mut self, wait_time: Minutes) -> Self {
        self.wait_time = wait_time;
        self
    }

    /// Coordinate as a `geo` point (x = longitude, y = latitude)
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lng, self.lat)
    }

    /// True when this stop can only be served after its pickup
    pub fn is_dropoff(&self) -> bool {
        self.pickup_source.is_some()
    }
}
