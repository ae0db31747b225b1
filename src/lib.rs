//! Imposter State Library
//!
//! This crate provides session state management for the Imposter party
//! game: one phone is passed around the table, each player privately
//! learns whether they are the imposter (hint only) or a crewmate
//! (secret word only), the group discusses under a countdown, then votes.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Session Controller** - One state machine per game session with
//!   phase-gated operations and validated transitions.
//!
//! - **Word Bank & Role Assignment** - Static category word lists and
//!   uniform, independent random draws from an injectable random source.
//!
//! - **Reveal Sequencer** - Round-robin card flips, each player's role
//!   shown exactly once; out-of-turn taps are ignored.
//!
//! - **Discussion Timer** - A cancellable countdown whose stale ticks
//!   can never advance an already-reset session.
//!
//! # Design Principles
//!
//! 1. **State machines validate transitions** - Any operation issued in
//!    the wrong phase is rejected with a typed error, never corrupts state.
//!
//! 2. **Randomness is injected** - All draws go through `&mut impl Rng`,
//!    so tests drive the game with seeded generators.
//!
//! 3. **No I/O** - This crate is pure state; rendering, navigation,
//!    storage, and tick scheduling are external collaborators.
//!
//! 4. **Serialization-ready** - Snapshots and the roster blob are JSON,
//!    and never contain the secret word or hint.
//!
//! # Example
//!
//! ```rust
//! use imposter_state::state::{Category, Session};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut session = Session::new();
//!
//! session.select_category(Category::Animals).unwrap();
//! session.add_player("Alice").unwrap();
//! session.add_player("Bob").unwrap();
//! session.add_player("Cara").unwrap();
//! session.confirm_roster().unwrap();
//!
//! // Draw the imposter and the secret word
//! let mut rng = StdRng::seed_from_u64(7);
//! session.start_reveal(&mut rng).unwrap();
//!
//! // Each player flips the card, then passes the phone on
//! for _ in 0..3 {
//!     session.reveal_card().unwrap();
//!     session.pass_card().unwrap();
//! }
//! assert!(session.phase().is_discussion());
//!
//! // Vote without waiting out the clock
//! session.skip_to_vote().unwrap();
//! let outcome = session.cast_vote(0).unwrap();
//! println!("{}: {}", outcome.title(), outcome.message());
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
