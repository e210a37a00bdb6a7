//! Problem constants and the compact solution record.
//!
//! A planar Langford sequence for size `n` occupies positions `0..2n`.
//! A completed solution is stored as the closing position of every value:
//! `pos[m-1]` is the index of the second occurrence of value `m`, and the
//! first occurrence sits at `pos[m-1] - m - 1`, leaving exactly `m`
//! entries between the two.

/// Largest supported problem size.
///
/// Keeps the availability bitset within a `u32` and the open-pair bitsets
/// (one bit per sequence position) within a `u64`.
pub const MAX_N: usize = 31;

/// Closing positions of values `1..=n`, the canonical solution record.
///
/// Uses a fixed-size array to avoid heap allocation in the solver's hot
/// loop. Entries at index `n` and beyond are never written and stay zero,
/// so the derived ordering and equality compare solutions of the same `n`
/// by their meaningful prefix alone.
pub type ClosingPositions = [u8; MAX_N];

/// Whether any planar Langford sequence can exist for this size.
///
/// Sizes outside `1..=MAX_N` or with n ≡ 1 or 2 (mod 4) admit no
/// solutions; the parity argument is the classic Langford one and is not
/// rechecked at runtime.
#[inline]
pub fn feasible(n: usize) -> bool {
    n >= 1 && n <= MAX_N && (n % 4 == 0 || n % 4 == 3)
}

/// Reconstructs the full value sequence from a solution record.
///
/// Returns the `2n` values in position order, each of `1..=n` appearing
/// exactly twice. The asserts guard the derivation invariants: a failure
/// here means the search produced a corrupted record, which is a logic
/// fault and aborts the run.
pub fn value_sequence(pos: &ClosingPositions, n: usize) -> Vec<u8> {
    let mut seq = vec![0u8; 2 * n];
    for m in 1..=n {
        let close = pos[m - 1] as usize;
        assert!(close < 2 * n, "closing position {close} out of range");
        assert!(close > m, "value {m} closes at {close}, before its opening");
        let open = close - m - 1;
        assert_eq!(seq[open], 0, "position {open} filled twice");
        assert_eq!(seq[close], 0, "position {close} filled twice");
        seq[open] = m as u8;
        seq[close] = m as u8;
    }
    seq
}

/// Formats a value sequence as fixed-width columns, e.g. `  3  1  2  1  3  2`.
pub fn format_sequence(seq: &[u8]) -> String {
    let mut out = String::with_capacity(3 * seq.len());
    for &value in seq {
        out.push_str(&format!("{value:>3}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feasible_residues() {
        // only n ≡ 0 or 3 (mod 4) can have solutions
        for n in 1..=MAX_N {
            assert_eq!(feasible(n), n % 4 == 0 || n % 4 == 3, "n = {n}");
        }
        assert!(!feasible(0));
        assert!(!feasible(MAX_N + 1));
        assert!(!feasible(100));
    }

    #[test]
    fn test_value_sequence_n3() {
        // the unique planar solution for n = 3: 3 1 2 1 3 2
        let mut pos = [0u8; MAX_N];
        pos[0] = 3; // value 1 closes at index 3
        pos[1] = 5; // value 2 closes at index 5
        pos[2] = 4; // value 3 closes at index 4
        assert_eq!(value_sequence(&pos, 3), vec![3, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn test_value_sequence_separations() {
        let mut pos = [0u8; MAX_N];
        pos[0] = 3;
        pos[1] = 5;
        pos[2] = 4;
        let seq = value_sequence(&pos, 3);
        for m in 1..=3u8 {
            let positions: Vec<usize> = (0..seq.len()).filter(|&i| seq[i] == m).collect();
            assert_eq!(positions.len(), 2);
            assert_eq!(positions[1] - positions[0], m as usize + 1);
        }
    }

    #[test]
    #[should_panic(expected = "filled twice")]
    fn test_value_sequence_rejects_colliding_record() {
        let mut pos = [0u8; MAX_N];
        // value 1 (open at 2, close at 4) and value 2 (open at 2, close
        // at 5) both claim position 2
        pos[0] = 4;
        pos[1] = 5;
        pos[2] = 4;
        value_sequence(&pos, 3);
    }

    #[test]
    fn test_format_sequence() {
        assert_eq!(format_sequence(&[3, 1, 2, 1, 3, 2]), "  3  1  2  1  3  2");
        assert_eq!(format_sequence(&[12, 5]), " 12  5");
    }
}
