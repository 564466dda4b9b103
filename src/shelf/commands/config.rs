use crate::commands::{CmdMessage, CmdResult, ShelfPaths};
use crate::config::{ShelfConfig, KEYS};
use crate::error::{Result, ShelfError};

/// What `shelf config` was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Every key with its current value.
    List,
    Get(String),
    Set { key: String, value: String },
}

/// Unknown keys and rejected values are errors, not messages, so the caller
/// can fail the command.
pub fn run(paths: &ShelfPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = paths.config()?;

    match action {
        ConfigAction::List => {
            let settings = config.entries();
            Ok(CmdResult::default()
                .with_settings(settings)
                .with_config(config))
        }
        ConfigAction::Get(key) => {
            let value = lookup(&config, &key)?;
            Ok(CmdResult::default().with_settings(vec![(key, value)]))
        }
        ConfigAction::Set { key, value } => {
            lookup(&config, &key)?;
            config.set(&key, &value).map_err(ShelfError::Config)?;
            config.save(&paths.data_dir)?;

            let stored = lookup(&config, &key)?;
            log::info!("Config {} changed to {}", key, stored);

            let mut result = CmdResult::default()
                .with_settings(vec![(key.clone(), stored.clone())])
                .with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
            Ok(result)
        }
    }
}

fn lookup(config: &ShelfConfig, key: &str) -> Result<String> {
    config.get(key).ok_or_else(|| {
        ShelfError::Config(format!(
            "Unknown config key: {} (expected one of {})",
            key,
            KEYS.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(key: &str, value: &str) -> ConfigAction {
        ConfigAction::Set {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn set_persists_and_get_reads_back() {
        let dir = TempDir::new().unwrap();
        let paths = ShelfPaths::new(dir.path());

        let result = run(&paths, set("chart-width", " 25")).unwrap();
        assert_eq!(result.messages[0].content, "chart-width set to 25");

        let result = run(&paths, ConfigAction::Get("chart-width".into())).unwrap();
        assert_eq!(
            result.settings,
            vec![("chart-width".to_string(), "25".to_string())]
        );
        assert_eq!(paths.config().unwrap().chart_width, 25);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let paths = ShelfPaths::new(dir.path());

        let err = run(&paths, set("colour", "red")).unwrap_err();
        assert!(matches!(err, ShelfError::Config(_)));
        assert!(!dir.path().join("config.json").exists());

        let err = run(&paths, ConfigAction::Get("colour".into())).unwrap_err();
        assert!(err.to_string().contains("expected one of data-file"));
    }

    #[test]
    fn rejected_value_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let paths = ShelfPaths::new(dir.path());
        run(&paths, set("data-file", "reading.json")).unwrap();

        let err = run(&paths, set("data-file", "config.json")).unwrap_err();
        assert!(matches!(err, ShelfError::Config(_)));
        assert_eq!(paths.config().unwrap().data_file, "reading.json");
    }

    #[test]
    fn list_covers_every_key_with_defaults() {
        let dir = TempDir::new().unwrap();
        let result = run(&ShelfPaths::new(dir.path()), ConfigAction::List).unwrap();

        let keys: Vec<&str> = result.settings.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, KEYS);
        assert_eq!(result.config.unwrap().data_file, "books.json");
    }
}
