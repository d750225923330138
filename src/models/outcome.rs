// Per-request result of a batch route computation

use crate::error::RouteError;
use crate::models::RoutePlan;
use serde::Serialize;

/// Result of one request in a batch, tagged with its position in the input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOutcome {
    /// Index of the request in the batch
    pub request: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<RoutePlan>,

    /// Rendered error when the request failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RouteOutcome {
    /// One outcome per result, in order; failures do not hide other plans
    pub fn from_results(results: Vec<Result<RoutePlan, RouteError>>) -> Vec<RouteOutcome> {
        results
            .into_iter()
            .enumerate()
            .map(|(request, result)| match result {
                Ok(plan) => RouteOutcome {
                    request,
                    plan: Some(plan),
                    error: None,
                },
                Err(err) => RouteOutcome {
                    request,
                    plan: None,
                    error: Some(err.to_string()),
                },
            })
            .collect()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
