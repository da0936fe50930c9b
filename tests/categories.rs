#[cfg(test)]
mod tests {
    use grind::db::categories::{Categories, DEFAULT_CATEGORY};
    use grind::db::db::Db;
    use grind::libs::error::GrindError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CategoryTestContext {
        temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for CategoryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("grind.db")).unwrap();
            CategoryTestContext { temp_dir, db }
        }
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_create_is_idempotent(ctx: &mut CategoryTestContext) {
        let categories = Categories::new(&ctx.db);

        assert!(categories.create("Work").unwrap());
        assert!(!categories.create("Work").unwrap());
        assert!(!categories.create("Work").unwrap());

        assert_eq!(categories.count().unwrap(), 1);
        assert_eq!(categories.names().unwrap(), vec!["Work".to_string()]);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_insert_reports_duplicate(ctx: &mut CategoryTestContext) {
        let categories = Categories::new(&ctx.db);

        categories.insert("Fitness").unwrap();
        let result = categories.insert("Fitness");
        assert!(matches!(result, Err(GrindError::Duplicate(name)) if name == "Fitness"));
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_names_are_case_sensitive(ctx: &mut CategoryTestContext) {
        let categories = Categories::new(&ctx.db);

        assert!(categories.create("work").unwrap());
        assert!(categories.create("Work").unwrap());
        assert_eq!(categories.count().unwrap(), 2);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_empty_name_is_rejected(ctx: &mut CategoryTestContext) {
        let categories = Categories::new(&ctx.db);

        assert!(matches!(categories.create(""), Err(GrindError::Validation(_))));
        assert!(matches!(categories.create("   "), Err(GrindError::Validation(_))));
        assert_eq!(categories.count().unwrap(), 0);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_default_category_seeded_once(ctx: &mut CategoryTestContext) {
        let categories = Categories::new(&ctx.db);

        assert!(categories.ensure_default_category().unwrap());
        assert!(!categories.ensure_default_category().unwrap());
        assert_eq!(categories.names().unwrap(), vec![DEFAULT_CATEGORY.to_string()]);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_default_category_skipped_when_not_empty(ctx: &mut CategoryTestContext) {
        let categories = Categories::new(&ctx.db);

        categories.create("Study").unwrap();
        assert!(!categories.ensure_default_category().unwrap());
        assert!(categories.get_by_name(DEFAULT_CATEGORY).unwrap().is_none());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_list_in_insertion_order(ctx: &mut CategoryTestContext) {
        let categories = Categories::new(&ctx.db);

        for name in ["Work", "Fitness", "Admin"] {
            categories.create(name).unwrap();
        }

        let listed = categories.list().unwrap();
        let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Work", "Fitness", "Admin"]);
        assert!(listed.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_categories_survive_reopen(ctx: &mut CategoryTestContext) {
        Categories::new(&ctx.db).create("Work").unwrap();

        let reopened = Db::open(&ctx.temp_dir.path().join("grind.db")).unwrap();
        let category = Categories::new(&reopened).get_by_name("Work").unwrap().unwrap();
        assert_eq!(category.name, "Work");
    }
}
