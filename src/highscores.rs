//! Session leaderboard
//!
//! Keeps the best finished runs for as long as the process lives. Nothing is
//! written to disk.

use crate::sim::World;

/// Runs kept on the board
pub const BOARD_SIZE: usize = 10;

/// How a finished run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunRecord {
    pub score: i32,
    /// Ticks played before the player was eaten
    pub ticks: u64,
    /// Player radius when eaten
    pub radius: i32,
    /// Index of the AI that ate the player, if any
    pub eaten_by: Option<usize>,
}

impl RunRecord {
    /// Snapshot a world whose run just ended
    pub fn from_world(world: &World, eaten_by: Option<usize>) -> Self {
        Self {
            score: world.score(),
            ticks: world.time_ticks,
            radius: world.player.radius,
            eaten_by,
        }
    }
}

/// Best runs, highest score first. Equal scores keep arrival order.
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    runs: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a run. Returns its 1-based rank, or `None` when it scored
    /// nothing or fell off the bottom of a full board.
    pub fn record(&mut self, run: RunRecord) -> Option<usize> {
        if run.score <= 0 {
            return None;
        }
        let pos = self.runs.partition_point(|r| r.score >= run.score);
        if pos >= BOARD_SIZE {
            return None;
        }
        self.runs.insert(pos, run);
        self.runs.truncate(BOARD_SIZE);
        Some(pos + 1)
    }

    pub fn runs(&self) -> &[RunRecord] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn top_score(&self) -> Option<i32> {
        self.runs.first().map(|r| r.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: i32) -> RunRecord {
        RunRecord {
            score,
            ticks: 0,
            radius: 10,
            eaten_by: None,
        }
    }

    #[test]
    fn zero_score_is_not_recorded() {
        let mut hs = HighScores::new();
        assert_eq!(hs.record(run(0)), None);
        assert!(hs.is_empty());
    }

    #[test]
    fn runs_sorted_descending() {
        let mut hs = HighScores::new();
        assert_eq!(hs.record(run(50)), Some(1));
        assert_eq!(hs.record(run(80)), Some(1));
        assert_eq!(hs.record(run(60)), Some(2));
        assert_eq!(hs.top_score(), Some(80));
        let scores: Vec<_> = hs.runs().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![80, 60, 50]);
    }

    #[test]
    fn tie_ranks_below_the_earlier_run() {
        let mut hs = HighScores::new();
        hs.record(RunRecord { ticks: 1, ..run(40) });
        assert_eq!(hs.record(RunRecord { ticks: 2, ..run(40) }), Some(2));
        assert_eq!(hs.runs()[0].ticks, 1);
    }

    #[test]
    fn full_board_drops_the_lowest() {
        let mut hs = HighScores::new();
        for s in 1..=BOARD_SIZE as i32 {
            hs.record(run(s * 10));
        }
        assert_eq!(hs.record(run(10)), None);
        assert_eq!(hs.record(run(15)), Some(10));
        assert_eq!(hs.runs().len(), BOARD_SIZE);
        assert_eq!(hs.runs().last().map(|r| r.score), Some(15));
    }
}
