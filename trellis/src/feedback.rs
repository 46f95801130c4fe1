use thiserror::Error;

/// Rejected rating parameters. Raised at builder construction, before any
/// search runs; a parameter set that validates never fails later.
#[derive(Error, Debug, PartialEq)]
pub enum ParamsError {
    /// An unknown-link penalty at or below the saturation penalty would let
    /// unmeasured links outrate measured-but-poor ones.
    #[error("unknown-link penalty {0} does not exceed the saturation penalty")]
    UnknownPenaltyTooLow(f64),
    #[error("hop overhead must be non-negative, got {0}")]
    NegativeHopOverhead(f64),
    #[error("acceptable rating must be non-negative, got {0}")]
    NegativeAcceptableRating(f64),
}
