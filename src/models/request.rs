// Route request: the input of one courier's route computation

use crate::config::RouteConfig;
use crate::models::Location;
use serde::{Deserialize, Serialize};

/// Starting position plus the stops one courier has to serve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Courier position; never part of `stops`
    pub start: Location,

    /// Restaurants and customers, in input order (the tie-break order)
    #[serde(default)]
    pub stops: Vec<Location>,

    /// Per-request override of the builder configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RouteConfig>,
}

impl RouteRequest {
    pub fn new(start: Location, stops: Vec<Location>) -> Self {
        Self {
            start,
            stops,
            config: None,
        }
    }

    pub fn with_config(mut self, config: RouteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Configuration for this request: defaults, then the request's own
    /// `config`, then the given overrides
    pub fn resolved_config(&self, speed_kmh: Option<f64>, earth_radius_km: Option<f64>) -> RouteConfig {
        self.config
            .unwrap_or_default()
            .with_overrides(speed_kmh, earth_radius_km)
    }

    /// Parses either a single request object or an array of requests
    pub fn parse_many(raw: &str) -> Result<Vec<RouteRequest>, serde_json::Error> {
        if raw.trim_start().starts_with('[') {
            serde_json::from_str(raw)
        } else {
            serde_json::from_str(raw).map(|request| vec![request])
        }
    }
}
