use tracing::{debug, info, trace};

use super::{Disk, DiskStack, Peg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    num_disks: usize,
    hand: Option<Disk>,
    pegs: [DiskStack; 3],
}

impl PuzzleState {
    /// Create a puzzle with `num_disks` disks stacked on peg A
    pub fn new(num_disks: usize) -> Self {
        let mut state = PuzzleState {
            num_disks,
            hand: None,
            pegs: Default::default(),
        };
        state.reset(num_disks);
        state
    }

    /// Clear the hand and all pegs, then rebuild peg A with `num_disks` disks,
    /// largest at the bottom.
    pub fn reset(&mut self, num_disks: usize) {
        self.num_disks = num_disks;
        self.hand = None;
        for stack in &mut self.pegs {
            stack.clear();
        }
        for size in (1..=num_disks).rev() {
            self.pegs[Peg::A.index()].push(Disk::new(size));
        }
        info!(num_disks, "puzzle reset");
    }

    pub fn num_disks(&self) -> usize {
        self.num_disks
    }

    /// The disk currently picked up, if any
    pub fn hand(&self) -> Option<Disk> {
        self.hand
    }

    /// Get reference to a peg's stack
    pub fn peg(&self, peg: Peg) -> &DiskStack {
        &self.pegs[peg.index()]
    }

    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.peg(peg).peek()
    }

    /// Touch a peg: pick up its top disk if the hand is empty, otherwise try
    /// to drop the held disk onto it.
    ///
    /// Returns `true` if a pickup or drop happened. Picking up from an empty
    /// peg, or dropping onto a smaller disk, leaves the state untouched.
    pub fn select_peg(&mut self, peg: Peg) -> bool {
        let moved = match self.hand {
            None => self.pick_up(peg),
            Some(held) => self.drop_onto(peg, held),
        };
        debug_assert!(self.is_consistent());
        moved
    }

    fn pick_up(&mut self, peg: Peg) -> bool {
        match self.pegs[peg.index()].pop() {
            Some(disk) => {
                debug!(peg = %peg, size = disk.size(), "picked up disk");
                self.hand = Some(disk);
                true
            }
            None => {
                trace!(peg = %peg, "nothing to pick up");
                false
            }
        }
    }

    fn drop_onto(&mut self, peg: Peg, held: Disk) -> bool {
        let stack = &mut self.pegs[peg.index()];
        if let Some(top) = stack.peek() {
            if !held.fits_on_top_of(top) {
                trace!(peg = %peg, held = held.size(), top = top.size(), "illegal drop");
                return false;
            }
        }
        stack.push(held);
        self.hand = None;
        debug!(peg = %peg, size = held.size(), "dropped disk");
        true
    }

    /// Every disk sits on peg C, in order, with nothing in hand.
    pub fn is_solved(&self) -> bool {
        self.hand.is_none()
            && self.peg(Peg::A).is_empty()
            && self.peg(Peg::B).is_empty()
            && self.peg(Peg::C).len() == self.num_disks
    }

    /// Check the puzzle invariants: each peg ordered, and every disk accounted
    /// for exactly once across the pegs and the hand.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.num_disks + 1];
        let on_pegs = self.pegs.iter().flat_map(|s| s.iter_bottom_up());
        for disk in on_pegs.chain(self.hand) {
            let size = disk.size();
            if size == 0 || size > self.num_disks || seen[size] {
                return false;
            }
            seen[size] = true;
        }
        seen.iter().skip(1).all(|&s| s) && self.pegs.iter().all(DiskStack::is_ordered)
    }
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sizes(state: &PuzzleState, peg: Peg) -> Vec<usize> {
        state.peg(peg).iter_bottom_up().map(Disk::size).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = PuzzleState::new(4);
        assert_eq!(state.num_disks(), 4);
        assert_eq!(state.hand(), None);
        assert_eq!(sizes(&state, Peg::A), vec![4, 3, 2, 1]);
        assert!(state.peg(Peg::B).is_empty());
        assert!(state.peg(Peg::C).is_empty());
        assert!(state.is_consistent());
        assert!(!state.is_solved());
    }

    #[test]
    fn test_zero_disks_is_empty_and_solved() {
        let state = PuzzleState::new(0);
        for peg in Peg::ALL {
            assert!(state.peg(peg).is_empty());
        }
        assert!(state.is_solved());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_pickup_from_empty_peg_is_noop() {
        let mut state = PuzzleState::new(3);
        let before = state.clone();
        assert!(!state.select_peg(Peg::B));
        assert_eq!(state, before);
    }

    #[test]
    fn test_pickup_and_drop_on_empty_peg() {
        let mut state = PuzzleState::new(3);
        assert!(state.select_peg(Peg::A));
        assert_eq!(state.hand(), Some(Disk::new(1)));
        assert_eq!(sizes(&state, Peg::A), vec![3, 2]);

        assert!(state.select_peg(Peg::C));
        assert_eq!(state.hand(), None);
        assert_eq!(sizes(&state, Peg::C), vec![1]);
    }

    #[test]
    fn test_drop_on_smaller_disk_is_noop() {
        let mut state = PuzzleState::new(3);
        // Disk 1 to C, then pick up disk 2
        assert!(state.select_peg(Peg::A));
        assert!(state.select_peg(Peg::C));
        assert!(state.select_peg(Peg::A));
        assert_eq!(state.hand(), Some(Disk::new(2)));

        let peg_c = state.peg(Peg::C).clone();
        assert!(!state.select_peg(Peg::C));
        assert_eq!(state.hand(), Some(Disk::new(2)));
        assert_eq!(state.peg(Peg::C), &peg_c);
    }

    #[test]
    fn test_drop_back_on_source_peg() {
        let mut state = PuzzleState::new(2);
        assert!(state.select_peg(Peg::A));
        assert!(state.select_peg(Peg::A));
        assert_eq!(state, PuzzleState::new(2));
    }

    #[test]
    fn test_reset_restores_initial_layout() {
        let mut state = PuzzleState::new(3);
        state.select_peg(Peg::A);
        state.select_peg(Peg::B);
        state.select_peg(Peg::A);

        state.reset(5);
        assert_eq!(state, PuzzleState::new(5));
        assert_eq!(sizes(&state, Peg::A), vec![5, 4, 3, 2, 1]);

        state.reset(5);
        assert_eq!(state, PuzzleState::new(5));
    }

    #[test]
    fn test_invariant_holds_under_arbitrary_touches() {
        let mut rng = StdRng::seed_from_u64(12345);
        let mut state = PuzzleState::new(5);
        for _ in 0..2_000 {
            let peg = Peg::ALL[rng.random_range(0..3)];
            state.select_peg(peg);
            assert!(state.is_consistent());
            for peg in Peg::ALL {
                assert!(state.peg(peg).is_ordered());
            }
        }
    }

    #[test]
    fn test_reset_from_any_reachable_state() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 0..=8 {
            for _ in 0..20 {
                let mut state = PuzzleState::new(n);
                let touches = rng.random_range(0..200);
                for _ in 0..touches {
                    state.select_peg(Peg::ALL[rng.random_range(0..3)]);
                    assert!(state.is_consistent(), "n = {n}");
                }

                let size = rng.random_range(0..=8);
                state.reset(size);
                assert_eq!(state, PuzzleState::new(size));
                assert_eq!(state.hand(), None);
                assert_eq!(sizes(&state, Peg::A), (1..=size).rev().collect::<Vec<_>>());
                assert!(state.peg(Peg::B).is_empty());
                assert!(state.peg(Peg::C).is_empty());
            }
        }
    }

    #[test]
    fn test_solved_detection() {
        let mut state = PuzzleState::new(1);
        state.select_peg(Peg::A);
        assert!(!state.is_solved());
        state.select_peg(Peg::C);
        assert!(state.is_solved());
    }
}
