#[cfg(test)]
mod tests {
    use grind::libs::config::{Config, LlmConfig, StorageConfig, CONFIG_FILE_NAME, DEFAULT_DB_FILE_NAME, DEFAULT_MODEL};
    use grind::libs::data_storage::DataStorage;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("grind"));
            ConfigTestContext {
                temp_dir,
                storage,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_defaults_without_file(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage).unwrap();

        assert!(config.llm.is_none());
        assert!(config.storage.is_none());

        let llm = config.llm_or_default();
        assert_eq!(llm.model, DEFAULT_MODEL);
        assert_eq!(llm.timeout_secs, 30);
        assert_eq!(llm.retries, 0);

        let database = config.database_path(&ctx.storage).unwrap();
        assert_eq!(database, ctx.storage.base_path().join(DEFAULT_DB_FILE_NAME));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(ctx: &mut ConfigTestContext) {
        let config = Config {
            llm: Some(LlmConfig {
                api_url: "http://localhost:8080/v1/chat/completions".to_string(),
                model: "tiny".to_string(),
                timeout_secs: 5,
                temperature: 0.2,
                retries: 1,
            }),
            storage: Some(StorageConfig {
                database: PathBuf::from("custom.db"),
            }),
        };

        config.save_to(&ctx.storage).unwrap();
        let loaded = Config::read_from(&ctx.storage).unwrap();

        assert_eq!(loaded.llm, config.llm);
        assert_eq!(loaded.storage, config.storage);
        assert_eq!(
            loaded.database_path(&ctx.storage).unwrap(),
            ctx.storage.base_path().join("custom.db")
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_older_file_gets_field_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(
            &path,
            r#"{"llm": {"api_url": "https://example.com", "model": "m", "timeout_secs": 10}}"#,
        )
        .unwrap();

        let llm = Config::read_from(&ctx.storage).unwrap().llm.unwrap();
        assert_eq!(llm.temperature, 0.7);
        assert_eq!(llm.retries, 0);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_api_key_is_never_saved(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.storage).unwrap();

        let raw = std::fs::read_to_string(ctx.storage.get_path(CONFIG_FILE_NAME).unwrap()).unwrap();
        assert!(!raw.to_lowercase().contains("key"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_absolute_database_path_is_kept(ctx: &mut ConfigTestContext) {
        let absolute = ctx.temp_dir.path().join("elsewhere.db");
        let config = Config {
            llm: None,
            storage: Some(StorageConfig {
                database: absolute.clone(),
            }),
        };
        assert_eq!(config.database_path(&ctx.storage).unwrap(), absolute);
    }
}
