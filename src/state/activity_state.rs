//! ActivityState - Outcomes Shown in the Status Strip
//!
//! Keeps the most recent user-visible outcomes (rows loaded, export written,
//! file picked) and a count of failures the user hasn't looked at yet.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::theme::colors::AppColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Skipped,
    Failed,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Done => "OK",
            Outcome::Skipped => "SKIP",
            Outcome::Failed => "FAIL",
        }
    }

    pub fn color(self) -> gpui::Rgba {
        match self {
            Outcome::Done => AppColors::success(),
            Outcome::Skipped => AppColors::warning(),
            Outcome::Failed => AppColors::danger(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Activity {
    pub outcome: Outcome,
    pub message: String,
    pub at: DateTime<Local>,
}

#[derive(Debug)]
pub struct ActivityState {
    recent: VecDeque<Activity>,
    keep: usize,
    unseen_failures: usize,
}

impl ActivityState {
    /// Remember at most `keep` activities
    pub fn new(keep: usize) -> Self {
        let keep = keep.max(1);
        Self {
            recent: VecDeque::with_capacity(keep),
            keep,
            unseen_failures: 0,
        }
    }

    pub fn record(&mut self, outcome: Outcome, message: impl Into<String>, at: DateTime<Local>) {
        if self.recent.len() == self.keep {
            self.recent.pop_front();
        }
        if outcome == Outcome::Failed {
            self.unseen_failures += 1;
        }
        self.recent.push_back(Activity {
            outcome,
            message: message.into(),
            at,
        });
    }

    pub fn record_now(&mut self, outcome: Outcome, message: impl Into<String>) {
        self.record(outcome, message, Local::now());
    }

    pub fn latest(&self) -> Option<&Activity> {
        self.recent.back()
    }

    /// Newest first
    pub fn recent(&self) -> impl Iterator<Item = &Activity> {
        self.recent.iter().rev()
    }

    pub fn unseen_failures(&self) -> usize {
        self.unseen_failures
    }

    pub fn acknowledge(&mut self) {
        self.unseen_failures = 0;
    }
}

impl Default for ActivityState {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_newest() {
        let mut activity = ActivityState::new(2);
        activity.record_now(Outcome::Done, "loaded");
        activity.record_now(Outcome::Skipped, "not json");
        activity.record_now(Outcome::Done, "exported");

        let messages: Vec<_> = activity.recent().map(|a| a.message.as_str()).collect();
        assert_eq!(messages, ["exported", "not json"]);
        assert_eq!(activity.latest().map(|a| a.outcome), Some(Outcome::Done));
    }

    #[test]
    fn failures_count_until_acknowledged() {
        let mut activity = ActivityState::default();
        activity.record_now(Outcome::Failed, "export failed");
        activity.record_now(Outcome::Done, "exported");
        activity.record_now(Outcome::Failed, "load failed");
        assert_eq!(activity.unseen_failures(), 2);

        activity.acknowledge();
        assert_eq!(activity.unseen_failures(), 0);
        assert_eq!(activity.latest().map(|a| a.message.as_str()), Some("load failed"));
    }
}
