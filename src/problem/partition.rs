//! Three-way element partition with constant-time moves.
//!
//! Slots are laid out as `[candidates | visited | accepted]`. Moving an
//! element out of the candidate region swaps it with the last candidate and
//! shrinks the region boundary, so no move ever shifts the array.

use super::types::ElementId;

/// Exact {candidate, visited, accepted} partition of `0..n`.
///
/// Accepted elements are additionally kept in acceptance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    slots: Vec<ElementId>,
    position: Vec<usize>,
    num_candidates: usize,
    num_visited: usize,
    accepted: Vec<ElementId>,
}

impl Partition {
    /// Creates a partition where all `n` elements are candidates.
    pub fn new(n: usize) -> Self {
        Self {
            slots: (0..n).collect(),
            position: (0..n).collect(),
            num_candidates: n,
            num_visited: 0,
            accepted: Vec::with_capacity(n),
        }
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn candidates(&self) -> &[ElementId] {
        &self.slots[..self.num_candidates]
    }

    pub fn visited(&self) -> &[ElementId] {
        &self.slots[self.num_candidates..self.num_candidates + self.num_visited]
    }

    /// Accepted elements in acceptance order.
    pub fn accepted(&self) -> &[ElementId] {
        &self.accepted
    }

    pub fn is_candidate(&self, element: ElementId) -> bool {
        self.position
            .get(element)
            .is_some_and(|&pos| pos < self.num_candidates)
    }

    /// Moves a candidate to the visited region.
    ///
    /// # Panics
    /// Panics if `element` is not a candidate.
    pub fn visit(&mut self, element: ElementId) {
        self.detach_candidate(element);
        self.num_visited += 1;
    }

    /// Moves a candidate to the accepted region.
    ///
    /// # Panics
    /// Panics if `element` is not a candidate.
    pub fn accept(&mut self, element: ElementId) {
        self.detach_candidate(element);
        // `element` now opens the visited region; push it past the end.
        let first_visited = self.num_candidates;
        let last_visited = first_visited + self.num_visited;
        self.swap_slots(first_visited, last_visited);
        self.accepted.push(element);
    }

    /// Removes `element` from the candidate region, leaving it at the
    /// position right after the (shrunk) region.
    fn detach_candidate(&mut self, element: ElementId) {
        assert!(
            self.is_candidate(element),
            "element {element} is not a candidate"
        );
        let last = self.num_candidates - 1;
        self.swap_slots(self.position[element], last);
        self.num_candidates = last;
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.slots.swap(a, b);
        self.position[self.slots[a]] = a;
        self.position[self.slots[b]] = b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_exact(p: &Partition) {
        let total = p.candidates().len() + p.visited().len() + p.accepted().len();
        assert_eq!(total, p.len());

        let mut seen = vec![0u8; p.len()];
        for &e in p
            .candidates()
            .iter()
            .chain(p.visited())
            .chain(p.accepted())
        {
            seen[e] += 1;
        }
        assert!(seen.iter().all(|&c| c == 1), "partition is not exact: {seen:?}");
    }

    #[test]
    fn test_new_all_candidates() {
        let p = Partition::new(4);
        assert_eq!(p.candidates().len(), 4);
        assert!(p.visited().is_empty());
        assert!(p.accepted().is_empty());
        assert_exact(&p);
    }

    #[test]
    fn test_accept_keeps_order() {
        let mut p = Partition::new(5);
        p.accept(3);
        p.visit(0);
        p.accept(1);
        p.visit(4);
        assert_eq!(p.accepted(), &[3, 1]);
        let mut visited = p.visited().to_vec();
        visited.sort_unstable();
        assert_eq!(visited, vec![0, 4]);
        assert_eq!(p.candidates(), &[2]);
        assert_exact(&p);
    }

    #[test]
    fn test_is_candidate() {
        let mut p = Partition::new(3);
        assert!(p.is_candidate(2));
        p.visit(2);
        assert!(!p.is_candidate(2));
        assert!(!p.is_candidate(99));
    }

    #[test]
    #[should_panic(expected = "is not a candidate")]
    fn test_double_visit_panics() {
        let mut p = Partition::new(3);
        p.visit(1);
        p.visit(1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a = Partition::new(4);
        a.accept(0);
        let mut b = a.clone();
        b.visit(2);
        b.accept(3);
        assert_eq!(a.accepted(), &[0]);
        assert!(a.visited().is_empty());
        assert_eq!(a.candidates().len(), 3);
        assert_exact(&a);
        assert_exact(&b);
    }

    proptest! {
        #[test]
        fn prop_partition_stays_exact(
            n in 1usize..40,
            moves in proptest::collection::vec((any::<prop::sample::Index>(), any::<bool>()), 0..60),
        ) {
            let mut p = Partition::new(n);
            for (pick, accept) in moves {
                if p.candidates().is_empty() {
                    break;
                }
                let e = p.candidates()[pick.index(p.candidates().len())];
                if accept { p.accept(e) } else { p.visit(e) }
                assert_exact(&p);
            }
        }
    }
}
