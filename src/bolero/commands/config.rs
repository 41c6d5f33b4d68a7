use crate::commands::{CmdMessage, CmdResult};
use crate::config::{SearchConfig, CONFIG_KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// `config` is the effective configuration (file plus environment); `dir` is
/// where changes are written.
pub fn run(dir: &Path, config: &SearchConfig, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config.clone())),
        ConfigAction::ShowKey(key) => {
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {} (known: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                ))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            // Persist on top of the file contents, not the env-adjusted view.
            let mut stored = SearchConfig::load(dir)?;
            if let Err(e) = stored.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            stored.save(dir)?;
            let display_val = stored.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(stored);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    #[test]
    fn set_persists_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            &SearchConfig::default(),
            ConfigAction::Set("page-size".into(), "50".into()),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(SearchConfig::load(dir.path()).unwrap().page_size, 50);
    }

    #[test]
    fn invalid_set_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            &SearchConfig::default(),
            ConfigAction::Set("order".into(), "random".into()),
        )
        .unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_unknown_key_is_an_error_message() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(
            dir.path(),
            &SearchConfig::default(),
            ConfigAction::ShowKey("colour".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
