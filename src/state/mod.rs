//! State management module for the Imposter party game.
//!
//! This module provides the core state types:
//!
//! - `words` - Word bank and random role assignment
//! - `roster` - Player roster and its persistence blob
//! - `reveal` - Round-robin secret reveal state machine
//! - `timer` - Cancellable discussion countdown
//! - `vote` - Accusation resolution
//! - `session` - The session controller gating everything by phase
//! - `reminders` - Daily reminder schedule for the platform scheduler
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                            Session                                │
//! │                                                                   │
//! │  CategorySelect ─▶ RosterBuild ─▶ Reveal ─▶ Discussion ─▶ Voting  │
//! │         ▲               ▲                                    │    │
//! │         │ menu          │ rematch                            ▼    │
//! │         └───────────────┴─────────────────────────────── Resolved │
//! │                                                                   │
//! │  ┌─────────┐  ┌──────────────┐  ┌───────────────┐  ┌───────────┐  │
//! │  │ Roster  │  │ words::assign│  │RevealSequencer│  │ Discussion│  │
//! │  │ (names) │  │ (rng draws)  │  │ (card flips)  │  │   Timer   │  │
//! │  └─────────┘  └──────────────┘  └───────────────┘  └───────────┘  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate is pure state: rendering, navigation, storage, and tick
//! scheduling are external collaborators. The session hands them typed
//! values (`RoleCard`, `TimerHandle`, JSON snapshots, the roster blob)
//! and accepts their events back through phase-gated operations.

pub mod reminders;
pub mod reveal;
pub mod roster;
pub mod session;
pub mod timer;
pub mod vote;
pub mod words;

// Re-export commonly used types
pub use reminders::{daily_reminders, Reminder, EVENING_REMINDER, MORNING_REMINDER};
pub use reveal::{CardFace, RevealSequencer, RevealStep, RoleCard};
pub use roster::{
    MemoryStore, Roster, RosterError, RosterStore, MIN_PLAYERS, ROSTER_STORAGE_KEY,
};
pub use session::{Phase, Session, SessionError};
pub use timer::{DiscussionTimer, Tick, TimerHandle, DEFAULT_DISCUSSION_SECS};
pub use vote::{resolve, Verdict, VoteError, VoteOutcome};
pub use words::{assign, entries, AssignError, Assignment, Category, SecretEntry};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_game_smoke() {
        let mut store = MemoryStore::new();
        let mut session = Session::new();

        session.select_category(Category::Movies).unwrap();
        for name in ["Alice", "Bob", "Cara", "Dave"] {
            session.add_player(name).unwrap();
        }
        session.save_roster(&mut store);
        session.confirm_roster().unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        session.start_reveal(&mut rng).unwrap();
        while session.phase().is_reveal() {
            session.reveal_card().unwrap();
            session.pass_card().unwrap();
        }

        let handle = session.start_discussion().unwrap();
        while session.phase().is_discussion() {
            session.tick(handle);
        }

        let imposter = session.imposter_index().unwrap();
        let outcome = session.cast_vote(imposter).unwrap();
        assert_eq!(outcome.verdict, Verdict::CrewWins);

        // The roster survives for the next launch
        assert_eq!(Roster::load_from(&store).len(), 4);
    }
}
