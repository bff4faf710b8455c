//! Hash-to-scalar adapter.
//!
//! `map_element` is the hash-to-scalar map `H: bytes -> Z_n`: deterministic,
//! total, and replayable by the untrusted prover (it never mixes in
//! randomness). `generate_scalar` is the sibling used only for drawing the
//! accumulator's secret at construction time, where randomness (or an
//! explicit seed, for reproducible tests) is wanted instead of determinism.

use blsful::inner_types::Scalar;
use rand::{CryptoRng, RngCore};
use sha2::Sha256;
use sha3::{Digest as _, Sha3_256};

const SECRET_SALT: &[u8] = b"CKS-ACC-KEYGEN-SALT-";

/// Choice of digest backing the hash-to-scalar map.
///
/// The core never evaluates a pairing, so either digest is equally valid;
/// this only controls which bytes feed the random-oracle model of `H`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Digest {
    /// SHA-256 (the default, and the digest used in the test vectors).
    #[default]
    Sha256,
    /// SHA3-256, offered as an alternative digest.
    Sha3_256,
}

impl Digest {
    fn digest32(&self, input: &[u8]) -> [u8; 32] {
        match self {
            Digest::Sha256 => {
                let mut hasher = <Sha256 as sha2::Digest>::new();
                sha2::Digest::update(&mut hasher, input);
                sha2::Digest::finalize(hasher).into()
            }
            Digest::Sha3_256 => {
                let mut hasher = Sha3_256::new();
                hasher.update(input);
                hasher.finalize().into()
            }
        }
    }

    /// Hashes `salt || input` once, zero-padded into the 64-byte buffer
    /// `Scalar::from_bytes_wide` takes. Used only by `generate_scalar`,
    /// which needs a salt to separate keygen from element hashing; the
    /// element map itself carries no salt.
    fn salted_wide_bytes(&self, salt: &[u8], input: &[u8]) -> [u8; 64] {
        let mut buf = [0u8; 64];
        let mut hasher_input = Vec::with_capacity(salt.len() + input.len());
        hasher_input.extend_from_slice(salt);
        hasher_input.extend_from_slice(input);
        buf[..32].copy_from_slice(&self.digest32(&hasher_input));
        buf
    }
}

/// `map(H, d) = be_bytes_to_int(H(d)) mod n`, via a single hash call
/// zero-padded into the 64-byte buffer `Scalar::from_bytes_wide` takes.
///
/// `d` is taken as raw bytes; callers passing text are expected to have
/// already encoded it as UTF-8.
pub fn map_element(digest: Digest, d: &[u8]) -> Scalar {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(&digest.digest32(d));
    Scalar::from_bytes_wide(&buf)
}

/// Draws a scalar either deterministically from `seed`, or uniformly at
/// random from `rng` when no seed is given, so deterministic tests can pin
/// the accumulator's secret.
pub(crate) fn generate_scalar(seed: Option<&[u8]>, mut rng: impl RngCore + CryptoRng) -> Scalar {
    match seed {
        Some(seed) => Scalar::from_bytes_wide(&Digest::Sha256.salted_wide_bytes(SECRET_SALT, seed)),
        None => {
            let mut buf = [0u8; 64];
            rng.fill_bytes(&mut buf);
            Scalar::from_bytes_wide(&buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_is_deterministic() {
        let a = map_element(Digest::Sha256, b"hello");
        let b = map_element(Digest::Sha256, b"hello");
        assert_eq!(a, b);
    }

    #[test]
    fn map_is_sensitive_to_input() {
        let a = map_element(Digest::Sha256, b"a");
        let b = map_element(Digest::Sha256, b"b");
        assert_ne!(a, b);
    }

    #[test]
    fn digest_choice_changes_output() {
        let a = map_element(Digest::Sha256, b"hello");
        let b = map_element(Digest::Sha3_256, b"hello");
        assert_ne!(a, b);
    }

    #[test]
    fn generate_scalar_is_deterministic_for_seed() {
        let a = generate_scalar(Some(b"seed"), rand::rngs::OsRng);
        let b = generate_scalar(Some(b"seed"), rand::rngs::OsRng);
        assert_eq!(a, b);
    }

    #[test]
    fn generate_scalar_varies_without_seed() {
        let a = generate_scalar(None, rand::rngs::OsRng);
        let b = generate_scalar(None, rand::rngs::OsRng);
        assert_ne!(a, b);
    }
}
