//! Game session controller.
//!
//! Owns the whole session state and gates every operation on the current
//! phase. Exactly one session is live at a time; a rematch or a return to
//! the menu fully supersedes the previous round before any new operation
//! is accepted.
//!
//! # Phase Diagram
//!
//! ```text
//! ┌────────────────┐ select_category ┌─────────────┐ start_reveal ┌────────┐
//! │ CategorySelect │────────────────▶│ RosterBuild │─────────────▶│ Reveal │
//! └────────────────┘                 └─────────────┘              └───┬────┘
//!          ▲                                ▲                         │ last pass
//!          │ reset_to_menu                  │ reset_for_rematch       ▼
//!          │                                │                   ┌────────────┐
//!    ┌──────────┐      cast_vote      ┌──────────┐  timer zero /│ Discussion │
//!    │ Resolved │◀────────────────────│  Voting  │◀─────────────│            │
//!    └──────────┘                     └──────────┘ skip_to_vote └────────────┘
//! ```
//!
//! Transitions are one-directional within a round. `select_category` is
//! also accepted during `RosterBuild` so the group can back out and pick
//! a different category before the reveal, and so a rematch (which clears
//! the category) can pick a new one. `reset_to_menu` is accepted in any
//! phase; it is also how a round is aborted mid-game.

use chrono::{DateTime, Utc};
use rand::Rng;
use std::fmt;

use crate::state::reveal::{RevealSequencer, RevealStep};
use crate::state::roster::{Roster, RosterError, RosterStore};
use crate::state::timer::{DiscussionTimer, Tick, TimerHandle, DEFAULT_DISCUSSION_SECS};
use crate::state::vote::{self, VoteError, VoteOutcome};
use crate::state::words::{self, AssignError, Category, SecretEntry};

/// Named stage of a single game session. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Choosing the word category.
    #[default]
    CategorySelect,
    /// Building the player roster.
    RosterBuild,
    /// Passing the device around for the secret reveal.
    Reveal,
    /// Open discussion under the countdown.
    Discussion,
    /// Casting the single accusation.
    Voting,
    /// Verdict reached; awaiting rematch or return to menu.
    Resolved,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CategorySelect => "category_select",
            Self::RosterBuild => "roster_build",
            Self::Reveal => "reveal",
            Self::Discussion => "discussion",
            Self::Voting => "voting",
            Self::Resolved => "resolved",
        }
    }

    pub fn is_category_select(&self) -> bool {
        matches!(self, Self::CategorySelect)
    }

    pub fn is_roster_build(&self) -> bool {
        matches!(self, Self::RosterBuild)
    }

    pub fn is_reveal(&self) -> bool {
        matches!(self, Self::Reveal)
    }

    pub fn is_discussion(&self) -> bool {
        matches!(self, Self::Discussion)
    }

    pub fn is_voting(&self) -> bool {
        matches!(self, Self::Voting)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Operation invalid for the current phase. State is unchanged.
    InvalidPhase { phase: Phase, action: &'static str },
    InsufficientPlayers { have: usize },
    CategoryNotSelected,
    RosterNotConfirmed,
    TimerAlreadyRunning,
    Roster(RosterError),
    Assign(AssignError),
    Vote(VoteError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhase { phase, action } => {
                write!(f, "Cannot {} during {} phase", action, phase)
            }
            Self::InsufficientPlayers { have } => write!(
                f,
                "Need at least {} players to start, have {}",
                crate::state::roster::MIN_PLAYERS,
                have
            ),
            Self::CategoryNotSelected => write!(f, "No category selected"),
            Self::RosterNotConfirmed => write!(f, "Roster has not been confirmed"),
            Self::TimerAlreadyRunning => write!(f, "Discussion timer already running"),
            Self::Roster(e) => e.fmt(f),
            Self::Assign(e) => e.fmt(f),
            Self::Vote(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<RosterError> for SessionError {
    fn from(e: RosterError) -> Self {
        Self::Roster(e)
    }
}

impl From<AssignError> for SessionError {
    fn from(e: AssignError) -> Self {
        Self::Assign(e)
    }
}

impl From<VoteError> for SessionError {
    fn from(e: VoteError) -> Self {
        Self::Vote(e)
    }
}

/// One pass-and-play game session.
///
/// All state lives here; views render from accessors and the values the
/// operations return. Every operation either completes a whole transition
/// or fails with a typed error leaving the session untouched.
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    roster: Roster,
    roster_confirmed: bool,
    category: Option<Category>,
    secret: Option<SecretEntry>,
    imposter_index: Option<usize>,
    reveal: Option<RevealSequencer>,
    timer: DiscussionTimer,
    discussion_secs: u32,
    outcome: Option<VoteOutcome>,
    created_at: DateTime<Utc>,
    resolved_at: Option<DateTime<Utc>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a fresh session in `CategorySelect` with an empty roster.
    pub fn new() -> Self {
        Self {
            phase: Phase::CategorySelect,
            roster: Roster::new(),
            roster_confirmed: false,
            category: None,
            secret: None,
            imposter_index: None,
            reveal: None,
            timer: DiscussionTimer::new(),
            discussion_secs: DEFAULT_DISCUSSION_SECS,
            outcome: None,
            created_at: Utc::now(),
            resolved_at: None,
        }
    }

    /// Create a session with a restored roster (from a previous launch).
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster,
            ..Self::new()
        }
    }

    /// Override the discussion length (default 60 seconds).
    pub fn with_discussion_secs(mut self, secs: u32) -> Self {
        self.discussion_secs = secs;
        self
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidPhase {
            phase: self.phase,
            action,
        }
    }

    // Setup operations

    /// Select (or re-select) the word category and move to roster building.
    pub fn select_category(&mut self, category: Category) -> Result<(), SessionError> {
        match self.phase {
            Phase::CategorySelect | Phase::RosterBuild => {
                self.category = Some(category);
                self.roster_confirmed = false;
                self.phase = Phase::RosterBuild;
                Ok(())
            }
            _ => Err(self.invalid("select category")),
        }
    }

    /// Add a player to the roster.
    pub fn add_player(&mut self, name: &str) -> Result<(), SessionError> {
        if self.phase != Phase::RosterBuild {
            return Err(self.invalid("add player"));
        }
        self.roster.add(name)?;
        self.roster_confirmed = false;
        Ok(())
    }

    /// Remove the player at `index` from the roster. Returns the removed
    /// name, or `None` if the index is out of range.
    pub fn remove_player(&mut self, index: usize) -> Result<Option<String>, SessionError> {
        if self.phase != Phase::RosterBuild {
            return Err(self.invalid("remove player"));
        }
        let removed = self.roster.remove(index);
        if removed.is_some() {
            self.roster_confirmed = false;
        }
        Ok(removed)
    }

    /// Lock in the roster for this round.
    pub fn confirm_roster(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::RosterBuild {
            return Err(self.invalid("confirm roster"));
        }
        if self.category.is_none() {
            return Err(SessionError::CategoryNotSelected);
        }
        if !self.roster.can_start() {
            return Err(SessionError::InsufficientPlayers {
                have: self.roster.len(),
            });
        }
        self.roster_confirmed = true;
        Ok(())
    }

    // Reveal phase

    /// Draw roles and begin the reveal round.
    pub fn start_reveal(&mut self, rng: &mut impl Rng) -> Result<(), SessionError> {
        if self.phase != Phase::RosterBuild {
            return Err(self.invalid("start reveal"));
        }
        if !self.roster_confirmed {
            return Err(SessionError::RosterNotConfirmed);
        }
        let category = self.category.ok_or(SessionError::CategoryNotSelected)?;

        let assignment = words::assign(self.roster.len(), category, rng)?;
        self.imposter_index = Some(assignment.imposter_index);
        self.reveal = Some(RevealSequencer::new(
            self.roster.len(),
            assignment.imposter_index,
            category,
            assignment.entry.clone(),
        ));
        self.secret = Some(assignment.entry);
        self.phase = Phase::Reveal;
        Ok(())
    }

    /// Flip the current player's card. Out-of-turn flips are `Ignored`.
    pub fn reveal_card(&mut self) -> Result<RevealStep, SessionError> {
        if self.phase != Phase::Reveal {
            return Err(self.invalid("reveal card"));
        }
        let seq = self.reveal.as_mut().ok_or(SessionError::InvalidPhase {
            phase: Phase::Reveal,
            action: "reveal card",
        })?;
        Ok(seq.reveal())
    }

    /// Acknowledge the role and pass the device on. When the last player
    /// passes, the secret is dropped and the session enters `Discussion`
    /// carrying only the roster and imposter index.
    pub fn pass_card(&mut self) -> Result<RevealStep, SessionError> {
        if self.phase != Phase::Reveal {
            return Err(self.invalid("pass card"));
        }
        let seq = self.reveal.as_mut().ok_or(SessionError::InvalidPhase {
            phase: Phase::Reveal,
            action: "pass card",
        })?;
        let step = seq.pass();

        if step == RevealStep::Complete {
            // Word and hint must not outlive the reveal.
            self.secret = None;
            self.reveal = None;
            self.phase = Phase::Discussion;
        }
        Ok(step)
    }

    // Discussion phase

    /// Start the countdown. Call `tick` once per elapsed second with the
    /// returned handle.
    pub fn start_discussion(&mut self) -> Result<TimerHandle, SessionError> {
        if self.phase != Phase::Discussion {
            return Err(self.invalid("start discussion"));
        }
        if self.timer.is_running() {
            return Err(SessionError::TimerAlreadyRunning);
        }
        Ok(self.timer.start(self.discussion_secs))
    }

    /// Advance the countdown by one second. Expiry auto-advances to
    /// `Voting`. Ticks outside the discussion phase or from a superseded
    /// timer run are `Stale` no-ops, so a late tick can never touch a
    /// session that has moved on.
    pub fn tick(&mut self, handle: TimerHandle) -> Tick {
        if self.phase != Phase::Discussion {
            return Tick::Stale;
        }
        let tick = self.timer.tick(handle);
        if tick == Tick::Expired {
            self.phase = Phase::Voting;
        }
        tick
    }

    /// Cut the discussion short and move straight to voting.
    pub fn skip_to_vote(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Discussion {
            return Err(self.invalid("skip to vote"));
        }
        self.timer.cancel();
        self.phase = Phase::Voting;
        Ok(())
    }

    // Voting phase

    /// Resolve the round's single accusation. Exactly one vote is
    /// accepted; the session then moves to `Resolved` and further votes
    /// are rejected until a reset.
    pub fn cast_vote(&mut self, accused_index: usize) -> Result<VoteOutcome, SessionError> {
        if self.phase != Phase::Voting {
            return Err(self.invalid("cast vote"));
        }
        let imposter_index = self.imposter_index.ok_or(SessionError::InvalidPhase {
            phase: Phase::Voting,
            action: "cast vote",
        })?;

        let outcome = vote::resolve(accused_index, imposter_index, &self.roster)?;
        self.outcome = Some(outcome.clone());
        self.resolved_at = Some(Utc::now());
        self.phase = Phase::Resolved;
        Ok(outcome)
    }

    // Resets

    /// Rematch: keep the roster, clear everything drawn for the round,
    /// and return to roster building so a (possibly new) category can be
    /// picked. Fresh roles are drawn at the next `start_reveal`.
    pub fn reset_for_rematch(&mut self) -> Result<(), SessionError> {
        if self.phase != Phase::Resolved {
            return Err(self.invalid("reset for rematch"));
        }
        self.clear_round();
        self.phase = Phase::RosterBuild;
        Ok(())
    }

    /// Quit to the main menu from any phase, abandoning the round. The
    /// in-memory session is cleared entirely; the persisted roster blob
    /// is untouched.
    pub fn reset_to_menu(&mut self) {
        self.clear_round();
        self.roster.clear();
        self.phase = Phase::CategorySelect;
        self.created_at = Utc::now();
    }

    fn clear_round(&mut self) {
        self.category = None;
        self.secret = None;
        self.imposter_index = None;
        self.reveal = None;
        self.outcome = None;
        self.resolved_at = None;
        self.roster_confirmed = false;
        self.timer.cancel();
    }

    // Persistence collaborator

    /// Replace the roster from the storage collaborator, empty on absence
    /// or failure. Only valid before roles have been drawn.
    pub fn load_roster(&mut self, store: &impl RosterStore) -> Result<(), SessionError> {
        match self.phase {
            Phase::CategorySelect | Phase::RosterBuild => {
                self.roster = Roster::load_from(store);
                self.roster_confirmed = false;
                Ok(())
            }
            _ => Err(self.invalid("load roster")),
        }
    }

    /// Persist the roster. Fire-and-forget; failures stay in the store.
    pub fn save_roster(&self, store: &mut impl RosterStore) {
        self.roster.save_to(store);
    }

    // Accessors

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn imposter_index(&self) -> Option<usize> {
        self.imposter_index
    }

    pub fn outcome(&self) -> Option<&VoteOutcome> {
        self.outcome.as_ref()
    }

    pub fn reveal(&self) -> Option<&RevealSequencer> {
        self.reveal.as_ref()
    }

    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn resolved_at(&self) -> Option<DateTime<Utc>> {
        self.resolved_at
    }

    /// Phase-tagged snapshot for the navigation collaborator.
    ///
    /// Never contains the secret word or hint in any phase; role views
    /// flow only through the [`RoleCard`](crate::state::reveal::RoleCard)
    /// values `reveal_card` returns.
    pub fn to_json(&self) -> serde_json::Value {
        let mut snapshot = serde_json::json!({
            "phase": self.phase.as_str(),
            "players": self.roster.names(),
            "category": self.category.map(|c| c.as_str()),
        });

        match self.phase {
            Phase::Reveal => {
                if let Some(seq) = &self.reveal {
                    let (current, total) = seq.progress();
                    snapshot["reveal"] = serde_json::json!({
                        "current_player": current,
                        "total_players": total,
                        "face_up": seq.face() == crate::state::reveal::CardFace::Up,
                    });
                }
            }
            Phase::Discussion => {
                snapshot["timer"] = serde_json::json!({
                    "remaining_secs": self.timer.remaining(),
                    "display": self.timer.display(),
                    "running": self.timer.is_running(),
                });
            }
            Phase::Resolved => {
                if let Some(outcome) = &self.outcome {
                    snapshot["outcome"] = outcome.to_json();
                }
            }
            _ => {}
        }

        snapshot
    }
}
