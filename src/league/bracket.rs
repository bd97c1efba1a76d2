use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::{LeagueError, Result};
use crate::model::{BracketSummary, Match, RoundProgress, RoundStage, TeamRef};

/// Played/total counts for every round present in `matches`, in round order.
#[instrument(level = "debug", skip(matches), fields(total = matches.len()))]
pub fn summarize(matches: &[Match]) -> BracketSummary {
    let rounds = tally(matches).into_values().collect_vec();
    debug!(rounds = rounds.len(), "summarized bracket");
    BracketSummary { rounds }
}

/// Like [`summarize`], but reports every round from 1 to `rounds`, empty ones as `0/0`.
///
/// Rounds found in `matches` beyond `rounds` are still reported.
#[instrument(level = "debug", skip(matches), fields(total = matches.len()))]
pub fn summarize_rounds(matches: &[Match], rounds: u32) -> BracketSummary {
    let mut progress = tally(matches);
    for round in 1..=rounds {
        progress.entry(round).or_insert(RoundProgress {
            round,
            ..Default::default()
        });
    }
    BracketSummary {
        rounds: progress.into_values().collect(),
    }
}

fn tally(matches: &[Match]) -> BTreeMap<u32, RoundProgress> {
    matches.iter().fold(BTreeMap::new(), |mut acc, m| {
        let entry = acc.entry(m.round).or_insert(RoundProgress {
            round: m.round,
            ..Default::default()
        });
        entry.total += 1;
        if m.played {
            entry.played += 1;
        }
        acc
    })
}

/// The stored winner of a played match. Unplayed matches have none, whatever the row says.
pub fn winner_of(m: &Match) -> Option<&TeamRef> {
    m.winner.as_ref().filter(|_| m.played)
}

/// Winners of the played matches of `round`, in slot order.
pub fn winners(matches: &[Match], round: u32) -> Vec<&TeamRef> {
    matches
        .iter()
        .filter(|m| m.round == round)
        .sorted_by_key(|m| m.slot)
        .filter_map(winner_of)
        .collect()
}

/// Winner of the final, once it has been played and decided.
pub fn champion(matches: &[Match], final_round: u32) -> Option<&TeamRef> {
    matches
        .iter()
        .filter(|m| m.round == final_round)
        .find_map(winner_of)
}

impl RoundProgress {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All matches played. An empty round is never complete.
    pub fn is_complete(&self) -> bool {
        !self.is_empty() && self.played == self.total
    }

    /// Share of matches played, `None` for an empty round.
    pub fn completion(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.played as f64 / self.total as f64)
    }
}

impl BracketSummary {
    /// Progress of `round`, `0/0` when the round has no matches.
    pub fn round(&self, round: u32) -> RoundProgress {
        self.rounds
            .iter()
            .find(|r| r.round == round)
            .copied()
            .unwrap_or(RoundProgress {
                round,
                ..Default::default()
            })
    }

    pub fn played(&self) -> usize {
        self.rounds.iter().map(|r| r.played).sum()
    }

    pub fn total(&self) -> usize {
        self.rounds.iter().map(|r| r.total).sum()
    }

    /// Earliest round that still has unplayed matches.
    pub fn current_round(&self) -> Option<u32> {
        self.rounds
            .iter()
            .find(|r| r.played < r.total)
            .map(|r| r.round)
    }
}

impl RoundStage {
    /// Names `round` for a bracket whose final is `final_round`.
    pub fn for_round(round: u32, final_round: u32) -> Self {
        match final_round.checked_sub(round) {
            Some(0) => RoundStage::Final,
            Some(1) => RoundStage::SemiFinal,
            Some(2) => RoundStage::QuarterFinal,
            Some(3) => RoundStage::RoundOf16,
            _ => RoundStage::Round(round),
        }
    }
}

impl Match {
    /// Checks the row against the bracket invariants before the editing workflow saves it.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason| LeagueError::InvalidMatch {
            id: self.id.clone(),
            reason,
        };
        if self.round == 0 {
            return Err(invalid("round numbers start at 1"));
        }
        if let (Some(home), Some(away)) = (&self.home, &self.away) {
            if home.id == away.id {
                return Err(invalid("a team cannot play itself"));
            }
        }
        if !self.played && (self.home_score.is_some() || self.away_score.is_some()) {
            return Err(invalid("scores recorded on an unplayed match"));
        }
        if let Some(winner) = &self.winner {
            if !self.played {
                return Err(invalid("winner recorded on an unplayed match"));
            }
            let participant = [&self.home, &self.away]
                .into_iter()
                .flatten()
                .any(|team| team.id == winner.id);
            if !participant {
                return Err(invalid("winner is not one of the two teams"));
            }
        }
        Ok(())
    }
}
