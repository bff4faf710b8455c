use super::records::{Element, Point, Update, Witness, WitnessUpdate};
use super::secret::Secret;
use crate::error::AccumulatorError;
use crate::hash::{generate_scalar, Digest};
use blsful::inner_types::Scalar;
use core::fmt::{self, Debug, Formatter};

/// The trusted party: holds the secret `c` and mutates the commitment on
/// add/delete.
///
/// Maintains `z = g * prod_{e in A} (e + c)`, with `(Q, i)` tracking
/// `g * c^k` and `k - 1` for the current set size `k`.
pub struct Accumulator {
    c: Secret,
    z: Point,
    q: Point,
    i: Option<u64>,
    digest: Digest,
}

impl Debug for Accumulator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("c", &self.c)
            .field("z", &self.z)
            .field("q", &self.q)
            .field("i", &self.i)
            .field("digest", &self.digest)
            .finish()
    }
}

impl Accumulator {
    /// Creates a new, empty accumulator.
    ///
    /// `seed` deterministically derives the secret `c` (for reproducible
    /// tests); when `None`, `c` is drawn uniformly at random. `digest`
    /// selects the hash backing `Element::hash`; defaults to SHA-256.
    pub fn new(seed: Option<&[u8]>, digest: Digest) -> Self {
        let c = Secret(generate_scalar(seed, rand::rngs::OsRng));
        Self {
            c,
            z: Point::generator(),
            q: Point::identity(),
            i: None,
            digest,
        }
    }

    /// Creates a new, empty accumulator with an exact caller-supplied secret
    /// `c`, given as its big-endian scalar encoding.
    ///
    /// Fails with `InvalidArgument` if `bytes` does not encode a scalar in
    /// `[0, n)`.
    pub fn with_secret(bytes: &[u8; 32], digest: Digest) -> Result<Self, AccumulatorError> {
        let c = Secret::from_be_bytes(bytes).ok_or(AccumulatorError::InvalidArgument(
            "secret bytes do not encode a valid scalar",
        ))?;
        Ok(Self {
            c,
            z: Point::generator(),
            q: Point::identity(),
            i: None,
            digest,
        })
    }

    /// The current commitment.
    pub fn commitment(&self) -> Point {
        self.z
    }

    /// The current cursor; `None` when the accumulated set is empty.
    pub fn cursor(&self) -> Option<u64> {
        self.i
    }

    /// The digest this accumulator maps elements with.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// Adds `d` to the accumulated set.
    ///
    /// Fails only with `ArithmeticFailure` in the negligible-probability
    /// case that `H(d) + c == 0`, which would otherwise leave the
    /// accumulator unable to ever delete this element again.
    pub fn add(&mut self, d: &[u8]) -> Result<WitnessUpdate, AccumulatorError> {
        let e = Element::hash(self.digest, d);
        let e_plus_c = e.0 + self.c.0;
        if e_plus_c == Scalar::ZERO {
            tracing::warn!("add rejected: hashed element is the additive inverse of the secret");
            return Err(AccumulatorError::ArithmeticFailure(
                "e + c is zero; cannot accumulate this element",
            ));
        }

        let v = self.z;
        let w = Point(self.z.0 * self.c.0);

        self.z = Point(self.z.0 * e_plus_c);
        self.q = match self.i {
            None => Point::generator(),
            Some(_) => Point(self.q.0 * self.c.0),
        };
        let q_out = Point(self.q.0 * self.c.0);
        self.i = Some(self.i.map_or(0, |i| i + 1));

        tracing::trace!(cursor = ?self.i, "accumulator add");
        Ok(WitnessUpdate {
            d: e,
            z: self.z,
            v,
            w,
            q: q_out,
            i: self.i,
        })
    }

    /// Removes the element witnessed by `witness` from the accumulated set.
    ///
    /// Rejects with `NotAMember` (no state change) when `witness` does not
    /// verify against the current commitment.
    pub fn del(&mut self, witness: &Witness) -> Result<Update, AccumulatorError> {
        if !self.verify(witness) {
            tracing::warn!("del rejected: witness does not verify against current commitment");
            return Err(AccumulatorError::NotAMember);
        }
        let e_plus_c = witness.d.0 + self.c.0;
        let inv: Option<Scalar> = Option::from(e_plus_c.invert());
        let inv = inv.ok_or(AccumulatorError::ArithmeticFailure(
            "e + c is zero despite a passing verification; invariant violated",
        ))?;

        let q_out = self.q;
        self.z = Point(self.z.0 * inv);
        self.q = if self.i == Some(0) {
            Point::identity()
        } else {
            Point(self.q.0 * inv)
        };
        self.i = match self.i {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };

        tracing::trace!(cursor = ?self.i, "accumulator del");
        Ok(Update {
            d: witness.d,
            z: self.z,
            q: q_out,
            i: self.i,
        })
    }

    /// `true` iff `witness` verifies against the current commitment:
    /// `v * (e + c) == z`.
    pub fn verify(&self, witness: &Witness) -> bool {
        witness.v.0 * (witness.d.0 + self.c.0) == self.z.0
    }

    /// Computes a witness for `d` directly from the secret, without needing
    /// a replayed update stream.
    pub fn prove(&self, d: &[u8]) -> Result<Witness, AccumulatorError> {
        let e = Element::hash(self.digest, d);
        let e_plus_c = e.0 + self.c.0;
        let inv: Option<Scalar> = Option::from(e_plus_c.invert());
        let inv = inv.ok_or(AccumulatorError::ArithmeticFailure(
            "e + c is zero; element was never a valid member",
        ))?;
        let e_inv: Option<Scalar> = Option::from(e.0.invert());
        let e_inv = e_inv.ok_or(AccumulatorError::ArithmeticFailure(
            "hashed element is zero",
        ))?;

        Ok(Witness {
            d: e,
            v: Point(self.z.0 * inv),
            w: Point(self.z.0 * e_inv),
        })
    }
}
