//! Error types shared by the accumulator and prover.

/// Errors surfaced by the public API of this crate.
///
/// All fallible operations return `Result<T, AccumulatorError>`; none panic
/// on caller-supplied input. An `ArithmeticFailure` implies a broken
/// invariant (a modular inverse of zero on secret-controlled arithmetic) and
/// the instance that produced it should be discarded.
#[derive(Debug, thiserror::Error)]
pub enum AccumulatorError {
    /// The input does not satisfy the shape the operation requires, e.g. a
    /// deletion naming an element the prover is not currently tracking.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// `Accumulator::del` was called with a witness that does not verify
    /// against the current commitment.
    #[error("witness does not verify against the current commitment")]
    NotAMember,

    /// A modular inverse of zero was required. Negligible probability for
    /// random inputs; indicates the instance's invariants no longer hold.
    #[error("arithmetic failure: {0}")]
    ArithmeticFailure(&'static str),

    /// `Prover::prove` was asked to prove membership of an element the
    /// prover has never observed (or has since observed a deletion for).
    #[error("element is not a tracked member")]
    UnknownElement,
}
