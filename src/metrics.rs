//! Per-decision timing and memory accounting around any [`Agent`].
//!
//! Memory is sampled as resident set size before and after each decision.
//! On platforms without `/proc/self/status` the samples are unavailable and
//! every delta counts as zero.

use std::time::{Duration, Instant};

use crate::agent::Agent;
use crate::board::{Board, Color, Move};

/// Snapshot of an agent's averaged metrics, as consumed by analytics.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentReport {
    pub name: String,
    pub color: Color,
    pub average_time: Duration,
    pub average_memory_mb: f64,
}

/// Wraps an agent and accumulates decision counters until [`Metered::reset`].
pub struct Metered<A> {
    inner: A,
    moves: u32,
    total_time: Duration,
    total_memory_mb: f64,
}

impl<A: Agent> Metered<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            moves: 0,
            total_time: Duration::ZERO,
            total_memory_mb: 0.0,
        }
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut A {
        &mut self.inner
    }

    pub fn into_inner(self) -> A {
        self.inner
    }

    /// Number of decisions made since the last reset.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Sum of non-negative RSS growth over all decisions, in MB.
    pub fn total_memory_mb(&self) -> f64 {
        self.total_memory_mb
    }

    pub fn average_time(&self) -> Duration {
        if self.moves == 0 {
            return Duration::ZERO;
        }
        self.total_time / self.moves
    }

    pub fn average_memory_mb(&self) -> f64 {
        if self.moves == 0 {
            return 0.0;
        }
        self.total_memory_mb / self.moves as f64
    }

    pub fn reset(&mut self) {
        self.moves = 0;
        self.total_time = Duration::ZERO;
        self.total_memory_mb = 0.0;
    }

    pub fn report(&self) -> AgentReport {
        AgentReport {
            name: self.inner.name().to_string(),
            color: self.inner.color(),
            average_time: self.average_time(),
            average_memory_mb: self.average_memory_mb(),
        }
    }
}

impl<A: Agent> Agent for Metered<A> {
    fn color(&self) -> Color {
        self.inner.color()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn select_move(&mut self, board: &Board) -> Option<Move> {
        let memory_before = resident_memory_mb();
        let start = Instant::now();

        let mv = self.inner.select_move(board);

        let elapsed = start.elapsed();
        let memory_used = match (memory_before, resident_memory_mb()) {
            (Some(before), Some(after)) => (after - before).max(0.0),
            _ => 0.0,
        };
        self.moves += 1;
        self.total_time += elapsed;
        self.total_memory_mb += memory_used;
        mv
    }
}

/// Current resident set size of this process in MB, if the platform exposes it.
pub fn resident_memory_mb() -> Option<f64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_vm_rss(&status)
}

/// Extract `VmRSS` (reported in kB) from a `/proc/<pid>/status` listing.
fn parse_vm_rss(status: &str) -> Option<f64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: f64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::RandomAgent;

    #[test]
    fn test_parse_vm_rss() {
        let status = "Name:\tgo-minimax\nVmPeak:\t  20480 kB\nVmRSS:\t    3072 kB\nThreads:\t1\n";
        assert_eq!(parse_vm_rss(status), Some(3.0));
        assert_eq!(parse_vm_rss("Name:\tx\n"), None);
        assert_eq!(parse_vm_rss("VmRSS:\tlots kB\n"), None);
    }

    #[test]
    fn test_counts_every_decision() {
        let board = Board::new(9).unwrap();
        let mut agent = Metered::new(RandomAgent::new(Color::Black).with_seed(5));
        assert_eq!(agent.average_time(), Duration::ZERO);
        assert_eq!(agent.average_memory_mb(), 0.0);

        for _ in 0..3 {
            assert!(agent.select_move(&board).is_some());
        }
        assert_eq!(agent.moves(), 3);
        assert!(agent.total_memory_mb() >= 0.0);
        assert!(agent.average_time() <= agent.total_time());

        let report = agent.report();
        assert_eq!(report.name, "Random Agent");
        assert_eq!(report.color, Color::Black);

        agent.reset();
        assert_eq!(agent.moves(), 0);
        assert_eq!(agent.total_time(), Duration::ZERO);
        assert_eq!(agent.total_memory_mb(), 0.0);
    }

    #[test]
    fn test_wrong_turn_still_counted() {
        let board = Board::new(9).unwrap();
        let mut agent = Metered::new(RandomAgent::new(Color::White));
        assert_eq!(agent.select_move(&board), None);
        assert_eq!(agent.moves(), 1);
    }
}
