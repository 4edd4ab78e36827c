//! Ordered record of accepted moves.
//!
//! A move record is the string the player submitted, immutable once accepted.
//! The history's length always equals the number of accepted submissions —
//! rejected moves never touch it.

/// Accepted move strings in play order.
#[derive(Debug, Default, Clone)]
pub struct MoveHistory {
    moves: Vec<String>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, move_text: String) {
        self.moves.push(move_text);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    /// Number of numbered turns (a turn is a white move plus an optional
    /// black reply).
    pub fn turn_count(&self) -> usize {
        self.moves.len().div_ceil(2)
    }

    /// Format the full sequence into numbered turn pairs:
    /// `[e4, e5, Nf3]` → `"1. e4 e5\n2. Nf3"`.
    ///
    /// O(n) per call; fine at the tens-of-moves scale of a real game.
    pub fn numbered_turns(&self) -> String {
        self.moves
            .chunks(2)
            .enumerate()
            .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(moves: &[&str]) -> MoveHistory {
        let mut h = MoveHistory::new();
        for m in moves {
            h.push(m.to_string());
        }
        h
    }

    #[test]
    fn test_empty_history_formats_to_nothing() {
        let h = MoveHistory::new();
        assert!(h.is_empty());
        assert_eq!(h.numbered_turns(), "");
        assert_eq!(h.turn_count(), 0);
    }

    #[test]
    fn test_numbered_turn_pairs() {
        let h = history_of(&["e4", "e5", "Nf3"]);
        assert_eq!(h.numbered_turns(), "1. e4 e5\n2. Nf3");
        assert_eq!(h.turn_count(), 2);
    }

    #[test]
    fn test_even_move_count() {
        let h = history_of(&["e4", "e5", "Nf3", "Nc6"]);
        assert_eq!(h.numbered_turns(), "1. e4 e5\n2. Nf3 Nc6");
        assert_eq!(h.turn_count(), 2);
    }

    #[test]
    fn test_single_move() {
        let h = history_of(&["d4"]);
        assert_eq!(h.numbered_turns(), "1. d4");
        assert_eq!(h.turn_count(), 1);
    }
}
