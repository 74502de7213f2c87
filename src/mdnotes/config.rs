use crate::error::{NotesError, Result};
use crate::model::{normalize_ext, DEFAULT_NOTE_EXT};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the platform config directory (mostly useful for tests).
pub const CONFIG_DIR_ENV: &str = "MDNOTES_CONFIG_DIR";

/// User configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Notes directory used when no `--path` is given
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Extension of note files (e.g. ".md", ".markdown")
    #[serde(default = "default_note_ext")]
    pub note_ext: String,

    /// Editor command, preferred over $EDITOR
    #[serde(default)]
    pub editor: Option<String>,
}

fn default_note_ext() -> String {
    DEFAULT_NOTE_EXT.to_string()
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            root: None,
            note_ext: default_note_ext(),
            editor: None,
        }
    }
}

impl NotesConfig {
    /// Directory holding the config file: `$MDNOTES_CONFIG_DIR`, else the
    /// platform config directory.
    pub fn default_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(PathBuf::from(dir));
            }
        }
        ProjectDirs::from("com", "mdnotes", "mdnotes")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| NotesError::Api("Could not determine config directory".to_string()))
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: NotesConfig = serde_json::from_str(&content)?;
        config.note_ext = normalize_ext(&config.note_ext);
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn set_note_ext(&mut self, ext: &str) {
        self.note_ext = normalize_ext(ext);
    }

    /// Sets a key by its command-line name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "root" => self.root = Some(PathBuf::from(value)),
            "note-ext" => self.set_note_ext(value),
            "editor" => self.editor = Some(value.to_string()),
            other => return Err(NotesError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    /// Reads a key by its command-line name. Unset keys read as empty.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "root" => Ok(self
                .root
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "note-ext" => Ok(self.note_ext.clone()),
            "editor" => Ok(self.editor.clone().unwrap_or_default()),
            other => Err(NotesError::Api(format!("Unknown config key: {}", other))),
        }
    }

    pub const KEYS: &'static [&'static str] = &["root", "note-ext", "editor"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotesConfig::default();
        assert_eq!(config.note_ext, ".md");
        assert!(config.root.is_none());
    }

    #[test]
    fn test_set_note_ext_without_dot() {
        let mut config = NotesConfig::default();
        config.set_note_ext("markdown");
        assert_eq!(config.note_ext, ".markdown");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = NotesConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, NotesConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = NotesConfig::default();
        config.set("root", "/srv/notes").unwrap();
        config.set("editor", "nano").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = NotesConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.root, Some(PathBuf::from("/srv/notes")));
        assert_eq!(loaded.editor.as_deref(), Some("nano"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"note_ext": "txt"}"#).unwrap();

        let loaded = NotesConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.note_ext, ".txt");
        assert!(loaded.root.is_none());
    }

    #[test]
    fn test_unknown_key() {
        let mut config = NotesConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.get("colour").is_err());
        assert_eq!(config.get("root").unwrap(), "");
    }
}
