//! The untrusted prover: tracks the public cursor, the observed element
//! multiset, and the `Q` point sequence, and recomputes witnesses for any
//! currently-accumulated element without ever learning the secret `c`.
use crate::accumulator::{elementary_symmetric, sigma_at, Element, Point, Update, Witness, WitnessUpdate};
use crate::error::AccumulatorError;
use crate::hash::Digest;
use blsful::inner_types::G1Projective;

/// One observed update, tagged by whether it is an insertion or a deletion.
///
/// A tagged enum makes the distinction a type-level fact rather than a
/// runtime comparison of cursors; `From` impls let `Accumulator::add`/`del`
/// outputs be passed to `Prover::update` without the caller naming this
/// type.
#[derive(Copy, Clone, Debug)]
pub enum UpdateMessage {
    /// An insertion, as emitted by `Accumulator::add`.
    Add(WitnessUpdate),
    /// A deletion, as emitted by `Accumulator::del`.
    Delete(Update),
}

impl From<WitnessUpdate> for UpdateMessage {
    fn from(u: WitnessUpdate) -> Self {
        Self::Add(u)
    }
}

impl From<Update> for UpdateMessage {
    fn from(u: Update) -> Self {
        Self::Delete(u)
    }
}

/// The untrusted party: replays the accumulator's public update stream and,
/// from it alone, can recompute a membership witness for any element it is
/// currently tracking.
#[derive(Clone, Debug)]
pub struct Prover {
    a: Vec<Element>,
    q: Vec<Point>,
    i: Option<u64>,
    z: Option<Point>,
    digest: Digest,
}

impl Prover {
    /// Creates a fresh prover with no observed elements. `Q[0] = g` is
    /// installed immediately and never overwritten.
    pub fn new(digest: Digest) -> Self {
        Self {
            a: Vec::new(),
            q: vec![Point::generator()],
            i: None,
            z: None,
            digest,
        }
    }

    /// The prover's current view of the cursor.
    pub fn cursor(&self) -> Option<u64> {
        self.i
    }

    /// The prover's current view of the commitment, if any update has been
    /// observed yet.
    pub fn commitment(&self) -> Option<Point> {
        self.z
    }

    /// The number of elements currently tracked.
    pub fn len(&self) -> usize {
        self.a.len()
    }

    /// `true` iff no elements are currently tracked.
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Observes one update from the accumulator's public stream.
    ///
    /// Updates must be observed in emission order. A deletion
    /// naming an element this prover is not tracking is rejected with
    /// `InvalidArgument` rather than silently corrupting state.
    pub fn update(&mut self, msg: impl Into<UpdateMessage>) -> Result<(), AccumulatorError> {
        match msg.into() {
            UpdateMessage::Add(u) => self.apply_add(u),
            UpdateMessage::Delete(u) => self.apply_delete(u),
        }
    }

    fn apply_add(&mut self, u: WitnessUpdate) -> Result<(), AccumulatorError> {
        self.a.push(u.d);
        self.store_q(u.i, u.q);
        self.i = u.i;
        self.z = Some(u.z);
        tracing::trace!(cursor = ?self.i, "prover observed add");
        Ok(())
    }

    fn apply_delete(&mut self, u: Update) -> Result<(), AccumulatorError> {
        let pos = self.a.iter().position(|tracked| tracked.0 == u.d.0).ok_or_else(|| {
            tracing::warn!("update rejected: deletion names an untracked element");
            AccumulatorError::InvalidArgument(
                "deletion names an element this prover is not tracking",
            )
        })?;
        self.a.remove(pos);
        self.store_q(u.i, u.q);
        self.i = u.i;
        self.z = Some(u.z);
        tracing::trace!(cursor = ?self.i, "prover observed delete");
        Ok(())
    }

    fn store_q(&mut self, i: Option<u64>, point: Point) {
        let idx = match i {
            None => 1,
            Some(i) => i as usize + 1,
        };
        if self.q.len() <= idx {
            self.q.resize(idx + 1, Point::identity());
        }
        self.q[idx] = point;
    }

    fn q_at(&self, idx: u64) -> Result<Point, AccumulatorError> {
        self.q
            .get(idx as usize)
            .copied()
            .ok_or(AccumulatorError::InvalidArgument(
                "update stream is incomplete for this prove call",
            ))
    }

    /// Recomputes a witness for `d` from the observed update stream alone.
    ///
    /// Fails with `UnknownElement` if `d` is not currently tracked (never
    /// observed, or since deleted), rather than returning a witness doomed
    /// to fail verification.
    pub fn prove(&self, d: &[u8]) -> Result<Witness, AccumulatorError> {
        let e = Element::hash(self.digest, d);
        let pos = self
            .a
            .iter()
            .position(|tracked| tracked.0 == e.0)
            .ok_or(AccumulatorError::UnknownElement)?;
        let cursor = self.i.ok_or(AccumulatorError::UnknownElement)?;

        let mut others: Vec<_> = self.a.iter().map(|elem| elem.0).collect();
        others.remove(pos);
        let sigma = elementary_symmetric(&others);

        let mut v = G1Projective::IDENTITY;
        let mut w = G1Projective::IDENTITY;
        for j in 0..=cursor {
            let coeff = sigma_at(&sigma, j as usize);
            v += self.q_at(cursor - j)?.0 * coeff;
            w += self.q_at(cursor - j + 1)?.0 * coeff;
        }
        Ok(Witness {
            d: e,
            v: Point(v),
            w: Point(w),
        })
    }

    /// `true` iff `witness` verifies against the prover's current view of
    /// the commitment: `v * e + w == z`.
    pub fn verify(&self, witness: &Witness) -> bool {
        match self.z {
            Some(z) => witness.v.0 * witness.d.0 + witness.w.0 == z.0,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::Accumulator;

    #[test]
    fn fresh_prover_tracks_nothing() {
        let p = Prover::new(Digest::Sha256);
        assert!(p.is_empty());
        assert_eq!(p.cursor(), None);
        assert!(p.commitment().is_none());
    }

    #[test]
    fn prove_unknown_element_is_an_error() {
        let p = Prover::new(Digest::Sha256);
        assert!(matches!(p.prove(b"nobody"), Err(AccumulatorError::UnknownElement)));
    }

    #[test]
    fn tracks_accumulator_after_single_add() {
        let mut acc = Accumulator::new(Some(b"prover-seed"), Digest::Sha256);
        let mut prover = Prover::new(Digest::Sha256);

        let u = acc.add(b"alice").unwrap();
        prover.update(u).unwrap();

        assert_eq!(prover.cursor(), acc.cursor());
        assert_eq!(prover.commitment(), Some(acc.commitment()));

        let w = prover.prove(b"alice").unwrap();
        assert!(acc.verify(&w));
        assert!(prover.verify(&w));
    }

    #[test]
    fn tracks_accumulator_through_several_updates() {
        let mut acc = Accumulator::new(Some(b"prover-seed-2"), Digest::Sha256);
        let mut prover = Prover::new(Digest::Sha256);

        for d in [&b"a"[..], &b"b"[..], &b"c"[..]] {
            let u = acc.add(d).unwrap();
            prover.update(u).unwrap();
        }

        for d in [&b"a"[..], &b"b"[..], &b"c"[..]] {
            let w = prover.prove(d).unwrap();
            assert!(acc.verify(&w), "witness for {d:?} should verify");
            assert!(prover.verify(&w));
        }
        assert_eq!(prover.cursor(), acc.cursor());
        assert_eq!(prover.commitment(), Some(acc.commitment()));
    }

    #[test]
    fn deletion_is_reflected_in_prover_state() {
        let mut acc = Accumulator::new(Some(b"prover-seed-3"), Digest::Sha256);
        let mut prover = Prover::new(Digest::Sha256);

        let u_a = acc.add(b"a").unwrap();
        prover.update(u_a).unwrap();
        let u_b = acc.add(b"b").unwrap();
        prover.update(u_b).unwrap();

        let w_b = Witness {
            d: u_b.d,
            v: u_b.v,
            w: u_b.w,
        };
        let del = acc.del(&w_b).unwrap();
        prover.update(del).unwrap();

        assert_eq!(prover.len(), 1);
        assert!(matches!(prover.prove(b"b"), Err(AccumulatorError::UnknownElement)));
        let w_a = prover.prove(b"a").unwrap();
        assert!(acc.verify(&w_a));
    }

    #[test]
    fn full_add_verify_prove_delete_cycle() {
        let mut acc = Accumulator::new(Some(b"prover-seed-5"), Digest::Sha256);
        let mut prover = Prover::new(Digest::Sha256);

        let u_a = acc.add(b"a").unwrap();
        let u_b = acc.add(b"b").unwrap();
        let u_c = acc.add(b"c").unwrap();
        assert_eq!(acc.cursor(), Some(2));

        // Adding invalidates all but the most recent witness.
        let w_a = Witness { d: u_a.d, v: u_a.v, w: u_a.w };
        let w_b = Witness { d: u_b.d, v: u_b.v, w: u_b.w };
        let w_c = Witness { d: u_c.d, v: u_c.v, w: u_c.w };
        assert!(!acc.verify(&w_a));
        assert!(!acc.verify(&w_b));
        assert!(acc.verify(&w_c));

        prover.update(u_a).unwrap();
        prover.update(u_b).unwrap();
        prover.update(u_c).unwrap();
        for d in [&b"a"[..], &b"b"[..], &b"c"[..]] {
            let w = prover.prove(d).unwrap();
            assert!(acc.verify(&w));
        }

        // Delete "c", then confirm proving it is no longer possible.
        let del_c = acc.del(&w_c).unwrap();
        prover.update(del_c).unwrap();
        assert!(matches!(prover.prove(b"c"), Err(AccumulatorError::UnknownElement)));

        // Finish tearing down; state returns to empty on both sides.
        let w_b2 = prover.prove(b"b").unwrap();
        let del_b = acc.del(&w_b2).unwrap();
        prover.update(del_b).unwrap();
        let w_a2 = prover.prove(b"a").unwrap();
        let del_a = acc.del(&w_a2).unwrap();
        prover.update(del_a).unwrap();

        assert_eq!(acc.cursor(), None);
        assert_eq!(acc.commitment(), Point::generator());
        assert!(prover.is_empty());
        assert!(!acc.verify(&w_a));
        assert!(!acc.verify(&w_b));
        assert!(!acc.verify(&w_c));
    }

    #[test]
    fn delete_of_untracked_element_is_rejected() {
        let mut acc = Accumulator::new(Some(b"prover-seed-4"), Digest::Sha256);
        let mut prover = Prover::new(Digest::Sha256);
        let u = acc.add(b"a").unwrap();
        let w = Witness {
            d: u.d,
            v: u.v,
            w: u.w,
        };
        let del = acc.del(&w).unwrap();
        assert!(matches!(
            prover.update(del),
            Err(AccumulatorError::InvalidArgument(_))
        ));
    }
}
