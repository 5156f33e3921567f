use std::fmt;

use crate::game::Peg;

/// Transfer of the top disk of `from` onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Peg,
    pub to: Peg,
}

impl Move {
    pub fn new(from: Peg, to: Peg) -> Self {
        Move { from, to }
    }

    /// The two peg touches that carry out this move: pick up, then drop.
    pub fn touches(self) -> [Peg; 2] {
        [self.from, self.to]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{2192}{}", self.from, self.to)
    }
}

/// Optimal solution moving `num_disks` disks from `from` to `to`, using `via`
/// as the spare peg. Always has 2^n - 1 moves.
pub fn generate_moves(num_disks: usize, from: Peg, via: Peg, to: Peg) -> Vec<Move> {
    let mut moves = Vec::new();
    solve(num_disks, from, via, to, &mut moves);
    moves
}

fn solve(n: usize, from: Peg, via: Peg, to: Peg, out: &mut Vec<Move>) {
    if n == 0 {
        return;
    }
    solve(n - 1, from, to, via, out);
    out.push(Move::new(from, to));
    solve(n - 1, via, from, to, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Peg::{A, B, C};

    #[test]
    fn test_zero_disks_has_no_moves() {
        assert!(generate_moves(0, A, B, C).is_empty());
    }

    #[test]
    fn test_one_disk() {
        assert_eq!(generate_moves(1, A, B, C), vec![Move::new(A, C)]);
    }

    #[test]
    fn test_two_disks() {
        assert_eq!(
            generate_moves(2, A, B, C),
            vec![Move::new(A, B), Move::new(A, C), Move::new(B, C)]
        );
    }

    #[test]
    fn test_three_disks_starts_with_relabeled_two_disk_solution() {
        let moves = generate_moves(3, A, B, C);
        assert_eq!(moves.len(), 7);
        // n=2 solution with B and C swapped
        assert_eq!(
            &moves[..3],
            &[Move::new(A, C), Move::new(A, B), Move::new(C, B)]
        );
        assert_eq!(moves[3], Move::new(A, C));
    }

    #[test]
    fn test_move_count_is_two_pow_n_minus_one() {
        for n in 0..=12 {
            assert_eq!(generate_moves(n, A, B, C).len(), (1 << n) - 1, "n = {n}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::new(A, C).to_string(), "A\u{2192}C");
        assert_eq!(Move::new(B, A).touches(), [B, A]);
    }
}
