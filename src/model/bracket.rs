use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Reference to a club as stored on a match row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: String,
    pub name: String,
}

impl TeamRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single cup tie. Round 1 is the earliest round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub round: u32,
    pub slot: u32,
    pub home: Option<TeamRef>,
    pub away: Option<TeamRef>,
    pub home_score: Option<u8>,
    pub away_score: Option<u8>,
    pub winner: Option<TeamRef>,
    #[serde(default)]
    pub played: bool,
}

/// Played/total counts for one round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundProgress {
    pub round: u32,
    pub played: usize,
    pub total: usize,
}

/// Renders `3/4`, or `no matches` for an empty round.
impl Display for RoundProgress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.total == 0 {
            write!(f, "no matches")
        } else {
            write!(f, "{}/{}", self.played, self.total)
        }
    }
}

/// Per-round progress, ordered by round number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSummary {
    pub rounds: Vec<RoundProgress>,
}

/// Conventional name of a knockout round, counted back from the final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStage {
    Final,
    SemiFinal,
    QuarterFinal,
    RoundOf16,
    Round(u32),
}

impl Display for RoundStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundStage::Final => write!(f, "final"),
            RoundStage::SemiFinal => write!(f, "semi-final"),
            RoundStage::QuarterFinal => write!(f, "quarter-final"),
            RoundStage::RoundOf16 => write!(f, "round-of-16"),
            RoundStage::Round(round) => write!(f, "round-{round}"),
        }
    }
}
