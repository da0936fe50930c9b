use super::analytics::TaskAnalytics;
use super::formatter::{format_due, format_percent, format_signed_percent, format_timestamp};
use super::messages::Message;
use super::task::Task;
use crate::db::categories::Category;
use crate::db::chat::{ChatMessage, ChatRole};
use crate::msg_print;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], now: NaiveDateTime) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "DUE", "PRIORITY", "CATEGORY", "STATUS", "NOTES"]);
        for task in tasks {
            let name = match task.priority.indicator() {
                "" => task.name.clone(),
                indicator => format!("{} {}", indicator, task.name),
            };
            table.add_row(row![
                task.id,
                name,
                format_due(&task.due_at),
                task.priority,
                task.category,
                task.state(now),
                task.notes.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();
    }

    pub fn categories(categories: &[Category]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "CREATED"]);
        for category in categories {
            table.add_row(row![category.id, category.name, format_timestamp(&category.created_at)]);
        }
        table.printstd();
    }

    pub fn chat(messages: &[ChatMessage]) {
        let mut table = Table::new();

        table.add_row(row!["TIME", "WHO", "MESSAGE"]);
        for message in messages {
            let who = match message.role {
                ChatRole::User => Message::ChatYou,
                ChatRole::Assistant => Message::ChatCoach,
            };
            table.add_row(row![format_timestamp(&message.timestamp), who, message.content]);
        }
        table.printstd();
    }

    pub fn stats(stats: &TaskAnalytics) {
        msg_print!(Message::StatsOverviewHeader, true);
        let mut overview = Table::new();
        overview.add_row(row!["TOTAL", "COMPLETED", "PENDING", "OVERDUE", "COMPLETION"]);
        overview.add_row(row![
            stats.total,
            stats.completed,
            stats.pending,
            stats.overdue,
            format_percent(stats.completion_rate)
        ]);
        overview.printstd();

        msg_print!(Message::StatsCategoryHeader, true);
        let mut categories = Table::new();
        categories.add_row(row!["CATEGORY", "TASKS", "COMPLETED", "COMPLETION"]);
        for category in &stats.completion_by_category {
            categories.add_row(row![
                category.category,
                category.total,
                category.completed,
                format_percent(category.completion_rate)
            ]);
        }
        categories.printstd();

        msg_print!(Message::StatsPriorityHeader, true);
        let mut priorities = Table::new();
        priorities.add_row(row!["PRIORITY", "TASKS"]);
        for (priority, count) in &stats.priority_distribution {
            priorities.add_row(row![priority, count]);
        }
        priorities.printstd();

        msg_print!(Message::StatsDailyHeader, true);
        let mut daily = Table::new();
        daily.add_row(row!["DATE", "CREATED"]);
        for (date, count) in &stats.daily_creation {
            daily.add_row(row![date.format("%Y-%m-%d"), count]);
        }
        daily.printstd();

        let week = &stats.week_over_week;
        msg_print!(Message::StatsWeekHeader, true);
        let mut weeks = Table::new();
        weeks.add_row(row!["WINDOW", "TASKS", "COMPLETION"]);
        weeks.add_row(row!["Last 7 days", week.recent.count, format_percent(week.recent.completion_rate)]);
        weeks.add_row(row!["7-14 days ago", week.previous.count, format_percent(week.previous.completion_rate)]);
        weeks.add_row(row![
            "Change",
            format_signed_percent(week.volume_change_pct),
            format_signed_percent(week.completion_rate_change)
        ]);
        weeks.printstd();

        msg_print!(stats.verdict().message(), true);
    }
}
