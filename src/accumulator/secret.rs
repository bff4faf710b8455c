use blsful::inner_types::Scalar;
use core::fmt;
use zeroize::DefaultIsZeroes;

/// The accumulator's secret scalar `c`.
///
/// Does not derive `Serialize`/`Deserialize` and redacts its value from
/// `Debug` output; the scalar is zeroized when dropped.
#[derive(Clone, Copy, Default)]
pub(crate) struct Secret(pub(crate) Scalar);

impl DefaultIsZeroes for Secret {}

impl Secret {
    /// Reconstructs a secret from its big-endian scalar encoding, for
    /// callers supplying an exact `c` rather than deriving one from a seed.
    pub(crate) fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Option::<Scalar>::from(Scalar::from_be_bytes(bytes)).map(Self)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&"<redacted>").finish()
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(self);
    }
}
