//! Vote resolution.
//!
//! After discussion the group agrees on one accusation. The accused index
//! is compared against the imposter index to produce the round's verdict
//! and the result message shown on the final screen.

use crate::state::roster::Roster;
use std::fmt;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The accusation hit the imposter.
    CrewWins,
    /// An innocent player was accused; the imposter escaped.
    ImposterWins,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CrewWins => "crew_wins",
            Self::ImposterWins => "imposter_wins",
        }
    }
}

/// Resolved outcome of the single vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub verdict: Verdict,
    pub accused_index: usize,
    pub accused_name: String,
}

impl VoteOutcome {
    /// Result screen title.
    pub fn title(&self) -> &'static str {
        match self.verdict {
            Verdict::CrewWins => "VICTORY!",
            Verdict::ImposterWins => "DEFEAT!",
        }
    }

    /// Result screen message: imposter caught, or imposter escaped with
    /// the wrongly-accused player's name.
    pub fn message(&self) -> String {
        match self.verdict {
            Verdict::CrewWins => {
                "You caught the Imposter! Well done crewmates.".to_string()
            }
            Verdict::ImposterWins => {
                format!("{} was innocent! The Imposter wins.", self.accused_name)
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "verdict": self.verdict.as_str(),
            "accused_index": self.accused_index,
            "accused_name": self.accused_name,
            "title": self.title(),
            "message": self.message()
        })
    }
}

/// Vote errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteError {
    /// Accused index is outside the roster.
    InvalidAccusation { index: usize, roster_len: usize },
}

impl fmt::Display for VoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAccusation { index, roster_len } => write!(
                f,
                "Accused index {} out of range for {} players",
                index, roster_len
            ),
        }
    }
}

impl std::error::Error for VoteError {}

/// Resolve the round's single accusation.
pub fn resolve(
    accused_index: usize,
    imposter_index: usize,
    roster: &Roster,
) -> Result<VoteOutcome, VoteError> {
    let accused_name = roster
        .get(accused_index)
        .ok_or(VoteError::InvalidAccusation {
            index: accused_index,
            roster_len: roster.len(),
        })?
        .to_string();

    let verdict = if accused_index == imposter_index {
        Verdict::CrewWins
    } else {
        Verdict::ImposterWins
    };

    Ok(VoteOutcome {
        verdict,
        accused_index,
        accused_name,
    })
}
