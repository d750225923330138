// Models module - exports all model types

mod location;
mod outcome;
mod request;
mod route;

// Re-export model types
pub use self::location::Location;
pub use self::outcome::RouteOutcome;
pub use self::request::RouteRequest;
pub use self::route::{RouteLeg, RoutePlan};

// Common type aliases for improved code readability
pub type LocationId = String;
pub type Minutes = f64;
pub type Kilometers = f64;
