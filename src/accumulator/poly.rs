//! Elementary symmetric polynomials over the scalar field.
//!
//! The prover's witness construction needs, for a multiset `S` of scalars,
//! every `sigma_j(S)` for `j` from `0` up to `|S|`. Naive subset enumeration
//! is `O(2^|S|)`; the incremental recurrence below is `O(|S|^2)` scalar
//! multiplications and is the approach used here.

use blsful::inner_types::Scalar;

/// Computes `sigma_0(xs), sigma_1(xs), ..., sigma_k(xs)` where `k = xs.len()`.
///
/// `sigma_0 = 1` always. The recurrence processes one element of `xs` at a
/// time: `sigma_j(S u {x}) = sigma_j(S) + x * sigma_{j-1}(S)`, applied from
/// the top degree down so each `sigma_j` is only read before it is
/// overwritten.
pub(crate) fn elementary_symmetric(xs: &[Scalar]) -> Vec<Scalar> {
    let mut sigma = vec![Scalar::ONE];
    for &x in xs {
        sigma.push(Scalar::ZERO);
        for j in (1..sigma.len()).rev() {
            sigma[j] += x * sigma[j - 1];
        }
    }
    sigma
}

/// `sigma_j(xs)`, or zero when `j` exceeds `xs.len()`.
pub(crate) fn sigma_at(sigma: &[Scalar], j: usize) -> Scalar {
    sigma.get(j).copied().unwrap_or(Scalar::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_sigma_zero_one() {
        let sigma = elementary_symmetric(&[]);
        assert_eq!(sigma, vec![Scalar::ONE]);
    }

    #[test]
    fn matches_naive_subset_enumeration() {
        let xs: Vec<Scalar> = (1u64..=6).map(Scalar::from).collect();
        let sigma = elementary_symmetric(&xs);
        for (j, &expected) in sigma.iter().enumerate() {
            assert_eq!(expected, naive_sigma(&xs, j));
        }
    }

    #[test]
    fn sigma_at_is_zero_past_the_end() {
        let sigma = elementary_symmetric(&[Scalar::from(2u64), Scalar::from(3u64)]);
        assert_eq!(sigma_at(&sigma, 5), Scalar::ZERO);
    }

    fn naive_sigma(xs: &[Scalar], j: usize) -> Scalar {
        fn combinations(xs: &[Scalar], j: usize, start: usize, acc: Scalar, out: &mut Scalar) {
            if j == 0 {
                *out += acc;
                return;
            }
            for i in start..xs.len() {
                combinations(xs, j - 1, i + 1, acc * xs[i], out);
            }
        }
        let mut out = Scalar::ZERO;
        combinations(xs, j, 0, Scalar::ONE, &mut out);
        out
    }
}
