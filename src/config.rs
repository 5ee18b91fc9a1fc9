use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::process::OperationMode;

/// Налаштування застосунку.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Код мови інтерфейсу (uk/en/auto).
    pub language: String,
    /// Каталог зовнішніх мовних пакетів, якщо задано.
    pub language_pack_dir: Option<String>,
    /// Режим роботи дифузійної установки за замовчуванням.
    pub default_mode: OperationMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_mode: OperationMode::WithoutReturn,
        }
    }
}

/// Помилки завантаження/збереження налаштувань.
#[derive(Debug)]
pub enum ConfigError {
    /// Помилка файлового вводу/виводу
    Io(std::io::Error),
    /// Помилка розбору TOML
    Serde(toml::de::Error),
    /// Помилка серіалізації TOML
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "помилка вводу/виводу: {e}"),
            ConfigError::Serde(e) => write!(f, "помилка розбору налаштувань: {e}"),
            ConfigError::Serialize(e) => write!(f, "помилка серіалізації налаштувань: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// Завантажує config.toml або створює файл з типовими значеннями.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// Зберігає налаштування у config.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
