//! Traits for advisor standardization.

use serde::Serialize;

use super::AdvisorError;

/// Trait for validating request objects in strict input mode.
pub trait Validator {
    /// Validate the state of the object.
    fn validate(&self) -> Result<(), AdvisorError>;
}

/// Trait for tool advisors.
pub trait Advisor<Req> {
    type Response: Serialize;

    /// Produce the tool response for a request.
    fn advise(&self, request: Req) -> Result<Self::Response, AdvisorError>;
}
