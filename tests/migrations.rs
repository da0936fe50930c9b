#[cfg(test)]
mod tests {
    use grind::db::db::Db;
    use grind::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn raw_connection(&self) -> Connection {
            Connection::open(self.temp_dir.path().join("grind.db")).unwrap()
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_on_open(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.temp_dir.path().join("grind.db")).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert_eq!(version, MigrationManager::new().latest_version());
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.raw_connection();
        let manager = MigrationManager::new();
        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, (version, _, _)) in history.iter().enumerate() {
            assert_eq!(*version as usize, i + 1);
        }
        assert_eq!(history[0].1, "create_tables");
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = ctx.raw_connection();
        init_with_migrations(&mut conn).unwrap();
        let first = get_db_version(&conn).unwrap();

        init_with_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), first);

        let recorded: i64 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(recorded as u32, first);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_rejects_unknown_enum_values(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.temp_dir.path().join("grind.db")).unwrap();
        db.conn
            .execute("INSERT INTO categories (name, created_at) VALUES ('Work', '2024-01-01 00:00:00')", [])
            .unwrap();

        let bad_status = db.conn.execute(
            "INSERT INTO tasks (name, due_at, status, priority, category_id, created_at)
             VALUES ('x', '2024-01-01 10:00:00', 'overdue', 'High', 1, '2024-01-01 00:00:00')",
            [],
        );
        assert!(bad_status.is_err());

        let bad_role = db.conn.execute(
            "INSERT INTO chat_messages (role, content, timestamp) VALUES ('system', 'x', '2024-01-01 00:00:00')",
            [],
        );
        assert!(bad_role.is_err());
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Db::open_in_memory().unwrap();
        let enabled: i64 = db.conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0)).unwrap();
        assert_eq!(enabled, 1);

        let orphan = db.conn.execute(
            "INSERT INTO tasks (name, due_at, status, priority, category_id, created_at)
             VALUES ('x', '2024-01-01 10:00:00', 'pending', 'High', 77, '2024-01-01 00:00:00')",
            [],
        );
        assert!(orphan.is_err());
    }
}
