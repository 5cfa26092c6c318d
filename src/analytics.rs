//! Aggregation of game outcomes and decision metrics by agent name.

use std::collections::BTreeMap;
use std::fmt;

use crate::board::Color;
use crate::metrics::AgentReport;

/// Running totals for one agent name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentTally {
    pub wins: u32,
    /// Average seconds per move, one entry per game
    pub times: Vec<f64>,
    /// Average MB per move, one entry per game
    pub memory: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameAnalytics {
    total_games: u32,
    draws: u32,
    agents: BTreeMap<String, AgentTally>,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

impl GameAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished game. `winner` is `None` for a draw.
    ///
    /// An agent is credited with a win when its color won; agents sharing a
    /// name share a tally.
    pub fn record_game(&mut self, winner: Option<Color>, reports: &[AgentReport]) {
        self.total_games += 1;
        if winner.is_none() {
            self.draws += 1;
        }
        for report in reports {
            let tally = self.agents.entry(report.name.clone()).or_default();
            if winner == Some(report.color) {
                tally.wins += 1;
            }
            tally.times.push(report.average_time.as_secs_f64());
            tally.memory.push(report.average_memory_mb);
        }
    }

    pub fn total_games(&self) -> u32 {
        self.total_games
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn wins(&self, name: &str) -> u32 {
        self.agents.get(name).map_or(0, |t| t.wins)
    }

    pub fn tally(&self, name: &str) -> Option<&AgentTally> {
        self.agents.get(name)
    }

    pub fn agent_names(&self) -> impl Iterator<Item = &str> {
        self.agents.keys().map(String::as_str)
    }

    pub fn win_rates(&self) -> BTreeMap<String, f64> {
        self.agents
            .iter()
            .map(|(name, t)| {
                let rate = if self.total_games == 0 {
                    0.0
                } else {
                    t.wins as f64 / self.total_games as f64
                };
                (name.clone(), rate)
            })
            .collect()
    }

    /// Mean of the per-game average seconds per move.
    pub fn average_times(&self) -> BTreeMap<String, f64> {
        self.agents
            .iter()
            .map(|(name, t)| (name.clone(), mean(&t.times)))
            .collect()
    }

    /// Mean of the per-game average MB per move.
    pub fn average_memory(&self) -> BTreeMap<String, f64> {
        self.agents
            .iter()
            .map(|(name, t)| (name.clone(), mean(&t.memory)))
            .collect()
    }

    /// Fold another set of results into this one.
    pub fn merge(&mut self, other: &GameAnalytics) {
        self.total_games += other.total_games;
        self.draws += other.draws;
        for (name, theirs) in &other.agents {
            let ours = self.agents.entry(name.clone()).or_default();
            ours.wins += theirs.wins;
            ours.times.extend_from_slice(&theirs.times);
            ours.memory.extend_from_slice(&theirs.memory);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for GameAnalytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Game Analytics Summary ===")?;
        writeln!(f, "Total Games: {}", self.total_games)?;
        writeln!(f, "Draws: {}", self.draws)?;

        writeln!(f, "\nWin Rates:")?;
        for (name, rate) in self.win_rates() {
            writeln!(
                f,
                "  {name}: {:.2}% ({}/{})",
                rate * 100.0,
                self.wins(&name),
                self.total_games
            )?;
        }

        writeln!(f, "\nAverage Time per Move:")?;
        for (name, secs) in self.average_times() {
            writeln!(f, "  {name}: {secs:.4} seconds")?;
        }

        writeln!(f, "\nAverage Memory Usage per Move:")?;
        for (name, mb) in self.average_memory() {
            writeln!(f, "  {name}: {mb:.2} MB")?;
        }
        Ok(())
    }
}
