//! Reveal sequencer.
//!
//! The round-robin state machine for the secret reveal: the device is
//! passed around the table and each player privately flips the role card
//! exactly once, in roster order.
//!
//! # State Diagram
//!
//! ```text
//! player 0          player 1              player N-1
//! ┌────────┐ reveal ┌──────┐ pass ┌────┐        ┌──────┐ pass
//! │  Down  │───────▶│  Up  │─────▶│Down│─ ... ──│  Up  │──────▶ Complete
//! └────────┘        └──────┘      └────┘        └──────┘
//! ```
//!
//! Actions issued out of turn (`reveal` on a face-up card, `pass` on a
//! face-down card, anything after completion) are ignored, never errors:
//! a double tap on the phone must not skip anyone's reveal.

use crate::state::words::{Category, SecretEntry};

/// Which side of the role card is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Down,
    Up,
}

/// The role view shown to the current player after flipping.
///
/// The imposter sees only the hint; a crewmate sees only the word.
/// Neither variant carries the other's secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCard {
    Imposter { category: Category, hint: String },
    Crewmate { category: Category, word: String },
}

/// Outcome of a reveal or pass action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealStep {
    /// Card flipped face-up; show this role view to the current player.
    Flipped(RoleCard),
    /// Card handed on; `player_index` is now up.
    Next { player_index: usize },
    /// Every player has seen their role.
    Complete,
    /// Action issued out of turn; nothing changed.
    Ignored,
}

/// Round-robin reveal state machine.
#[derive(Debug, Clone)]
pub struct RevealSequencer {
    player_count: usize,
    imposter_index: usize,
    category: Category,
    entry: SecretEntry,
    current: usize,
    face: CardFace,
    complete: bool,
}

impl RevealSequencer {
    /// Start a reveal round at player 0, card face-down.
    ///
    /// Callers guarantee `imposter_index < player_count` (the session
    /// controller always passes a fresh assignment).
    pub fn new(
        player_count: usize,
        imposter_index: usize,
        category: Category,
        entry: SecretEntry,
    ) -> Self {
        Self {
            player_count,
            imposter_index,
            category,
            entry,
            current: 0,
            face: CardFace::Down,
            complete: false,
        }
    }

    /// Index of the player currently holding the device.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Whether the current player is the last to reveal.
    pub fn is_last_player(&self) -> bool {
        self.current + 1 == self.player_count
    }

    /// One-based progress for display: "Player 2 of 5".
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.player_count)
    }

    /// Flip the card face-up, producing the current player's role view.
    pub fn reveal(&mut self) -> RevealStep {
        if self.complete || self.face == CardFace::Up {
            return RevealStep::Ignored;
        }

        self.face = CardFace::Up;
        RevealStep::Flipped(self.role_for(self.current))
    }

    /// Acknowledge the role and pass the device to the next player.
    /// On the last player this emits `Complete` instead of advancing.
    pub fn pass(&mut self) -> RevealStep {
        if self.complete || self.face == CardFace::Down {
            return RevealStep::Ignored;
        }

        if self.is_last_player() {
            self.complete = true;
            return RevealStep::Complete;
        }

        self.current += 1;
        self.face = CardFace::Down;
        RevealStep::Next {
            player_index: self.current,
        }
    }

    fn role_for(&self, index: usize) -> RoleCard {
        if index == self.imposter_index {
            RoleCard::Imposter {
                category: self.category,
                hint: self.entry.hint.clone(),
            }
        } else {
            RoleCard::Crewmate {
                category: self.category,
                word: self.entry.word.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sequencer(player_count: usize, imposter_index: usize) -> RevealSequencer {
        RevealSequencer::new(
            player_count,
            imposter_index,
            Category::Animals,
            SecretEntry {
                word: "Penguin".to_string(),
                hint: "A bird in a tuxedo".to_string(),
            },
        )
    }

    #[test]
    fn test_visits_every_player_once_in_order() {
        let mut seq = make_sequencer(4, 2);
        let mut visited = Vec::new();

        loop {
            visited.push(seq.current_index());
            assert!(matches!(seq.reveal(), RevealStep::Flipped(_)));
            match seq.pass() {
                RevealStep::Next { player_index } => {
                    assert_eq!(player_index, visited.len());
                }
                RevealStep::Complete => break,
                other => panic!("unexpected step {:?}", other),
            }
        }

        assert_eq!(visited, vec![0, 1, 2, 3]);
        assert!(seq.is_complete());
    }

    #[test]
    fn test_imposter_sees_hint_only() {
        let mut seq = make_sequencer(3, 1);

        // Player 0: crewmate
        match seq.reveal() {
            RevealStep::Flipped(RoleCard::Crewmate { category, word }) => {
                assert_eq!(category, Category::Animals);
                assert_eq!(word, "Penguin");
            }
            other => panic!("unexpected step {:?}", other),
        }
        seq.pass();

        // Player 1: imposter
        match seq.reveal() {
            RevealStep::Flipped(RoleCard::Imposter { category, hint }) => {
                assert_eq!(category, Category::Animals);
                assert_eq!(hint, "A bird in a tuxedo");
            }
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_out_of_turn_actions_ignored() {
        let mut seq = make_sequencer(3, 0);

        // Pass before reveal: ignored
        assert_eq!(seq.pass(), RevealStep::Ignored);
        assert_eq!(seq.current_index(), 0);

        // Double reveal: second is ignored
        assert!(matches!(seq.reveal(), RevealStep::Flipped(_)));
        assert_eq!(seq.reveal(), RevealStep::Ignored);

        // Still advances normally afterwards
        assert_eq!(seq.pass(), RevealStep::Next { player_index: 1 });
    }

    #[test]
    fn test_actions_after_complete_ignored() {
        let mut seq = make_sequencer(3, 0);

        for _ in 0..3 {
            seq.reveal();
            seq.pass();
        }
        assert!(seq.is_complete());

        assert_eq!(seq.reveal(), RevealStep::Ignored);
        assert_eq!(seq.pass(), RevealStep::Ignored);
        assert_eq!(seq.current_index(), 2);
    }

    #[test]
    fn test_progress() {
        let mut seq = make_sequencer(5, 4);
        assert_eq!(seq.progress(), (1, 5));
        assert!(!seq.is_last_player());

        seq.reveal();
        seq.pass();
        assert_eq!(seq.progress(), (2, 5));
    }
}
