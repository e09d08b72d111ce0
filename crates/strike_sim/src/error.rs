//! Simulation error types

/// Data-contract violations surfaced at construction time
///
/// The simulation core has no I/O or recoverable runtime failures; the only
/// caller-visible errors are invalid construction parameters, which are
/// rejected eagerly rather than clamped.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// Kill probability outside the closed interval [0, 1]
    #[error("kill probability {0} is outside [0, 1]")]
    KillProbabilityOutOfRange(f32),

    /// Impact radius must be finite and strictly positive
    #[error("impact radius {0} is not a finite positive value")]
    InvalidImpactRadius(f32),
}
