use crate::hash::{map_element, Digest};
use blsful::inner_types::{G1Projective, Scalar};
use core::fmt::{self, Display, Formatter};
use serde::{Deserialize, Serialize};

/// A hashed element `e = H(d) mod n`.
///
/// Both the accumulator and the prover work in terms of `Element`, not raw
/// element bytes, once an element has been mapped once by `Element::hash`:
/// passing the mapped scalar through update messages (rather than the
/// original bytes) means the prover never needs to re-hash, and there is no
/// possibility of accumulator and prover disagreeing about which digest
/// produced a given member.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Element(pub(crate) Scalar);

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Element({})", hex_prefix(&self.0.to_be_bytes()))
    }
}

impl Element {
    /// Maps element bytes to their scalar representation via `digest`.
    pub fn hash(digest: Digest, d: &[u8]) -> Self {
        Self(map_element(digest, d))
    }
}

/// A point in the accumulator's group, used for commitments, witnesses, and
/// the public `Q` sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Point(pub(crate) G1Projective);

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Point({})", hex_prefix(&self.0.to_compressed()))
    }
}

impl Point {
    pub(crate) fn identity() -> Self {
        Self(G1Projective::IDENTITY)
    }

    pub(crate) fn generator() -> Self {
        Self(G1Projective::GENERATOR)
    }
}

fn hex_prefix(bytes: &[u8]) -> String {
    bytes.iter().take(8).map(|b| format!("{b:02x}")).collect()
}

/// Emitted by `Accumulator::add`.
///
/// Carries both the multiplicative witness `v` (the pre-update commitment)
/// and the additive auxiliary `w = v * c`, satisfying both verification
/// forms for the element it was produced for.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct WitnessUpdate {
    /// The element that was added.
    pub d: Element,
    /// The post-update commitment.
    pub z: Point,
    /// The pre-update commitment, usable directly as a witness numerator.
    pub v: Point,
    /// `v * c`, completing the additive verification form.
    pub w: Point,
    /// `g * c^{i+2}`, the next point in the public sequence.
    pub q: Point,
    /// The cursor after this addition.
    pub i: Option<u64>,
}

/// Emitted by `Accumulator::del`.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Update {
    /// The element that was removed.
    pub d: Element,
    /// The post-update commitment.
    pub z: Point,
    /// The pre-decrement value of the accumulator's auxiliary point,
    /// i.e. `g * c^{i+1}` using the cursor from before this deletion.
    pub q: Point,
    /// The cursor after this deletion.
    pub i: Option<u64>,
}

/// A membership witness: `(v, w)` such that `v * e + w == z` (prover form)
/// or `v * (e + c) == z` (accumulator form).
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Witness {
    /// The element this witness attests membership for.
    pub d: Element,
    /// The multiplicative witness numerator, `z / (e + c)`.
    pub v: Point,
    /// The additive auxiliary satisfying `v * e + w == z`.
    pub w: Point,
}
