//! Descriptive statistics over a task snapshot.
//!
//! Everything here is a pure function of the task list and the reference
//! time, so the same snapshot always produces the same numbers.
//!
//! ## Week-over-week windows
//!
//! ```text
//!   previous window            recent window
//! [now-14d ........ now-7d) [now-7d ........ now]
//! ```
//!
//! Tasks are assigned to a window by their due time. A percentage change
//! against an empty previous window is reported as `0`.

use crate::libs::messages::Message;
use crate::libs::task::{Priority, Task};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

const CRUSHING_THRESHOLD: f64 = 80.0;
const PROGRESSING_THRESHOLD: f64 = 50.0;
const WINDOW_DAYS: i64 = 7;

/// `part / whole * 100`, or `0` when `whole` is zero.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCompletion {
    pub category: String,
    pub total: usize,
    pub completed: usize,
    pub completion_rate: f64,
}

/// Task count and completion rate of one time window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WindowStats {
    pub count: usize,
    pub completed: usize,
    pub completion_rate: f64,
}

impl WindowStats {
    fn from_tasks<'a>(tasks: impl Iterator<Item = &'a Task>) -> Self {
        let (count, completed) = tasks.fold((0, 0), |(count, completed), task| {
            (count + 1, completed + usize::from(task.is_completed()))
        });
        WindowStats {
            count,
            completed,
            completion_rate: percentage(completed, count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekOverWeek {
    pub recent: WindowStats,
    pub previous: WindowStats,
    /// Change in task volume, in percent of the previous window.
    pub volume_change_pct: f64,
    /// Difference of the two completion rates, in percentage points.
    pub completion_rate_change: f64,
}

impl WeekOverWeek {
    pub fn compute(tasks: &[Task], now: NaiveDateTime) -> Self {
        let recent_start = now - Duration::days(WINDOW_DAYS);
        let previous_start = now - Duration::days(2 * WINDOW_DAYS);

        let recent = WindowStats::from_tasks(tasks.iter().filter(|t| t.due_at >= recent_start && t.due_at <= now));
        let previous =
            WindowStats::from_tasks(tasks.iter().filter(|t| t.due_at >= previous_start && t.due_at < recent_start));

        let volume_change_pct = if previous.count == 0 {
            0.0
        } else {
            (recent.count as f64 - previous.count as f64) / previous.count as f64 * 100.0
        };

        WeekOverWeek {
            recent,
            previous,
            volume_change_pct,
            completion_rate_change: recent.completion_rate - previous.completion_rate,
        }
    }
}

/// Banded summary of the overall completion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Crushing,
    Progressing,
    Slacking,
}

impl Verdict {
    pub fn from_rate(completion_rate: f64) -> Self {
        if completion_rate >= CRUSHING_THRESHOLD {
            Verdict::Crushing
        } else if completion_rate >= PROGRESSING_THRESHOLD {
            Verdict::Progressing
        } else {
            Verdict::Slacking
        }
    }

    pub fn message(&self) -> Message {
        match self {
            Verdict::Crushing => Message::VerdictCrushing,
            Verdict::Progressing => Message::VerdictProgressing,
            Verdict::Slacking => Message::VerdictSlacking,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskAnalytics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Not completed and due strictly before the reference time.
    pub overdue: usize,
    pub completion_rate: f64,
    /// Sorted by category name.
    pub completion_by_category: Vec<CategoryCompletion>,
    pub category_distribution: Vec<(String, usize)>,
    /// Highest priority first; priorities without tasks are omitted.
    pub priority_distribution: Vec<(Priority, usize)>,
    /// Tasks created per calendar day, oldest day first.
    pub daily_creation: Vec<(NaiveDate, usize)>,
    pub week_over_week: WeekOverWeek,
}

impl TaskAnalytics {
    pub fn compute(tasks: &[Task], now: NaiveDateTime) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();

        let mut by_category: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        let mut by_priority: BTreeMap<Priority, usize> = BTreeMap::new();
        let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();

        for task in tasks {
            let entry = by_category.entry(task.category.as_str()).or_default();
            entry.0 += 1;
            entry.1 += usize::from(task.is_completed());

            *by_priority.entry(task.priority).or_default() += 1;
            *by_day.entry(task.created_at.date()).or_default() += 1;
        }

        let completion_by_category = by_category
            .iter()
            .map(|(category, &(total, completed))| CategoryCompletion {
                category: category.to_string(),
                total,
                completed,
                completion_rate: percentage(completed, total),
            })
            .collect();
        let category_distribution = by_category.iter().map(|(category, &(total, _))| (category.to_string(), total)).collect();

        TaskAnalytics {
            total,
            completed,
            pending: total - completed,
            overdue,
            completion_rate: percentage(completed, total),
            completion_by_category,
            category_distribution,
            priority_distribution: by_priority.into_iter().rev().collect(),
            daily_creation: by_day.into_iter().collect(),
            week_over_week: WeekOverWeek::compute(tasks, now),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_rate(self.completion_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_of_nothing_is_zero() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn verdict_bands() {
        assert_eq!(Verdict::from_rate(80.0), Verdict::Crushing);
        assert_eq!(Verdict::from_rate(79.9), Verdict::Progressing);
        assert_eq!(Verdict::from_rate(50.0), Verdict::Progressing);
        assert_eq!(Verdict::from_rate(0.0), Verdict::Slacking);
    }
}
