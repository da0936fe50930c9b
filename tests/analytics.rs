#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use grind::libs::analytics::{TaskAnalytics, Verdict, WeekOverWeek};
    use grind::libs::task::{Priority, Task, TaskStatus};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn task(id: i64, category: &str, priority: Priority, due_at: NaiveDateTime, completed: bool) -> Task {
        Task {
            id,
            name: format!("task {}", id),
            due_at,
            status: if completed { TaskStatus::Completed } else { TaskStatus::Pending },
            priority,
            category: category.to_string(),
            notes: None,
            created_at: due_at - Duration::days(1),
        }
    }

    #[test]
    fn test_empty_snapshot_has_zero_rates() {
        let stats = TaskAnalytics::compute(&[], now());

        assert!(stats.is_empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0.0);
        assert!(stats.completion_by_category.is_empty());
        assert_eq!(stats.week_over_week.volume_change_pct, 0.0);
        assert_eq!(stats.week_over_week.completion_rate_change, 0.0);
        assert_eq!(stats.verdict(), Verdict::Slacking);
    }

    #[test]
    fn test_counts_and_overdue() {
        let tasks = vec![
            task(1, "Work", Priority::High, now() - Duration::hours(2), false),
            task(2, "Work", Priority::Low, now() - Duration::hours(1), true),
            task(3, "Home", Priority::Medium, now() + Duration::hours(1), false),
            task(4, "Home", Priority::High, now(), false),
        ];
        let stats = TaskAnalytics::compute(&tasks, now());

        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 3);
        // Completed tasks and tasks due exactly now are not overdue.
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_rate, 25.0);
    }

    #[test]
    fn test_breakdowns() {
        let day = now() - Duration::days(1);
        let tasks = vec![
            task(1, "Work", Priority::High, day, true),
            task(2, "Work", Priority::Low, day, false),
            task(3, "Fitness", Priority::High, day + Duration::days(1), true),
        ];
        let stats = TaskAnalytics::compute(&tasks, now());

        let categories: Vec<(&str, f64)> = stats
            .completion_by_category
            .iter()
            .map(|c| (c.category.as_str(), c.completion_rate))
            .collect();
        assert_eq!(categories, vec![("Fitness", 100.0), ("Work", 50.0)]);

        assert_eq!(stats.category_distribution, vec![("Fitness".to_string(), 1), ("Work".to_string(), 2)]);
        assert_eq!(stats.priority_distribution, vec![(Priority::High, 2), (Priority::Low, 1)]);

        let days: Vec<usize> = stats.daily_creation.iter().map(|(_, count)| *count).collect();
        assert_eq!(days, vec![2, 1]);
        assert!(stats.daily_creation[0].0 < stats.daily_creation[1].0);
    }

    #[test]
    fn test_week_over_week_without_previous_tasks() {
        let tasks = vec![
            task(1, "Work", Priority::High, now() - Duration::days(1), true),
            task(2, "Work", Priority::High, now() - Duration::days(2), false),
        ];
        let week = WeekOverWeek::compute(&tasks, now());

        assert_eq!(week.recent.count, 2);
        assert_eq!(week.previous.count, 0);
        assert_eq!(week.volume_change_pct, 0.0);
        assert!(!week.volume_change_pct.is_nan());
        assert_eq!(week.completion_rate_change, 50.0);
    }

    #[test]
    fn test_week_over_week_windows() {
        let tasks = vec![
            // recent: [now-7d, now]
            task(1, "Work", Priority::High, now() - Duration::days(7), true),
            task(2, "Work", Priority::High, now(), true),
            task(3, "Work", Priority::High, now() - Duration::days(3), false),
            task(4, "Work", Priority::High, now() - Duration::days(1), true),
            // previous: [now-14d, now-7d)
            task(5, "Work", Priority::High, now() - Duration::days(8), true),
            task(6, "Work", Priority::High, now() - Duration::days(14), false),
            // outside both windows
            task(7, "Work", Priority::High, now() - Duration::days(15), true),
            task(8, "Work", Priority::High, now() + Duration::minutes(1), true),
        ];
        let week = WeekOverWeek::compute(&tasks, now());

        assert_eq!(week.recent.count, 4);
        assert_eq!(week.recent.completed, 3);
        assert_eq!(week.previous.count, 2);
        assert_eq!(week.previous.completed, 1);
        assert_eq!(week.volume_change_pct, 100.0);
        assert_eq!(week.completion_rate_change, 25.0);
    }

    #[test]
    fn test_verdict_follows_completion_rate() {
        let due = now() - Duration::days(1);
        let mostly_done: Vec<Task> = (0..10).map(|i| task(i, "Work", Priority::Low, due, i != 0)).collect();
        assert_eq!(TaskAnalytics::compute(&mostly_done, now()).verdict(), Verdict::Crushing);

        let half_done: Vec<Task> = (0..4).map(|i| task(i, "Work", Priority::Low, due, i % 2 == 0)).collect();
        assert_eq!(TaskAnalytics::compute(&half_done, now()).verdict(), Verdict::Progressing);
    }
}
