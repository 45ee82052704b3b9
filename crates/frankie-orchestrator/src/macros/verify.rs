//! Step result checking.

use frankie_config::VerificationPolicy;
use frankie_protocols::error::AutomationError;

use super::step::AutomationStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepVerdict {
    Continue,
    Abort,
}

/// Decides whether a macro keeps going after a step.
pub trait StepVerifier: Send + Sync {
    fn verify(
        &self,
        index: usize,
        step: &AutomationStep,
        outcome: &Result<(), AutomationError>,
    ) -> StepVerdict;
}

impl StepVerifier for VerificationPolicy {
    fn verify(
        &self,
        _index: usize,
        _step: &AutomationStep,
        outcome: &Result<(), AutomationError>,
    ) -> StepVerdict {
        match (self, outcome) {
            (VerificationPolicy::Strict, Err(_)) => StepVerdict::Abort,
            _ => StepVerdict::Continue,
        }
    }
}
