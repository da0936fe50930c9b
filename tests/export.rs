#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use grind::db::categories::Categories;
    use grind::db::db::Db;
    use grind::db::tasks::Tasks;
    use grind::libs::export::{parse_json, ExportFormat, ExportTask, Exporter};
    use grind::libs::formatter::{format_due, parse_due};
    use grind::libs::task::{NewTask, Priority, Task, TaskStatus};
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        tasks: Vec<Task>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open_in_memory().unwrap();
            Categories::new(&db).create("Work").unwrap();
            Categories::new(&db).create("Home, sweet home").unwrap();

            let store = Tasks::new(&db);
            store
                .create(&NewTask::new("Quarterly report", at(3, 17, 30), Priority::High, "Work").with_notes("include \"churn\""))
                .unwrap();
            let done = store.create(&NewTask::new("Fix sink", at(2, 9, 0), Priority::Low, "Home, sweet home")).unwrap();
            store.create(&NewTask::new("Standup", at(2, 9, 0), Priority::Medium, "Work")).unwrap();
            store.update_status_at(done, TaskStatus::Completed, at(2, 8, 0)).unwrap();

            let tasks = store.all().unwrap();
            ExportTestContext { temp_dir, tasks }
        }
    }

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    type Tuple = (String, String, String, String, String, String);

    fn source_tuples(tasks: &[Task]) -> Vec<Tuple> {
        tasks
            .iter()
            .map(|t| {
                (
                    t.name.clone(),
                    format_due(&t.due_at),
                    t.status.to_string(),
                    t.priority.to_string(),
                    t.category.clone(),
                    t.notes.clone().unwrap_or_default(),
                )
            })
            .collect()
    }

    fn exported_tuples(rows: &[ExportTask]) -> Vec<Tuple> {
        rows.iter()
            .map(|r| {
                (
                    r.name.clone(),
                    r.due_at.clone(),
                    r.status.clone(),
                    r.priority.clone(),
                    r.category.clone(),
                    r.notes.clone(),
                )
            })
            .collect()
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_round_trip(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("tasks.json");
        let path = Exporter::new(ExportFormat::Json, Some(output.clone())).export(&ctx.tasks).unwrap();
        assert_eq!(path, output);

        let rows = parse_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(exported_tuples(&rows), source_tuples(&ctx.tasks));

        let due = parse_due(&rows[0].due_at).unwrap();
        assert_eq!(due, ctx.tasks[0].due_at);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_round_trip(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("tasks.csv");
        Exporter::new(ExportFormat::Csv, Some(output.clone())).export(&ctx.tasks).unwrap();

        let mut reader = csv::Reader::from_path(&output).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, vec!["id", "name", "due_at", "status", "priority", "category", "notes", "created_at"]);

        let rows: Vec<ExportTask> = reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(exported_tuples(&rows), source_tuples(&ctx.tasks));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_file_is_written(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("tasks.xlsx");
        Exporter::new(ExportFormat::Excel, Some(output.clone())).export(&ctx.tasks).unwrap();

        let metadata = fs::metadata(&output).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_empty_csv_still_has_header(ctx: &mut ExportTestContext) {
        let output = ctx.temp_dir.path().join("empty.csv");
        Exporter::new(ExportFormat::Csv, Some(output.clone())).export(&[]).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.trim(), "id,name,due_at,status,priority,category,notes,created_at");
    }

    #[test]
    fn test_default_file_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("grind_tasks_"));
        assert!(name.ends_with(".xlsx"));
    }
}
