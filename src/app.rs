use crate::calculator::ProcessInputs;
use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// Помилки, можливі під час роботи застосунку.
#[derive(Debug)]
pub enum AppError {
    /// Помилка файлового вводу/виводу
    Io(std::io::Error),
    /// Помилка збереження/завантаження налаштувань
    Config(crate::config::ConfigError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "помилка вводу/виводу: {e}"),
            AppError::Config(e) => write!(f, "помилка налаштувань: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

/// Головний цикл CLI-застосунку. Вхідні параметри живуть увесь сеанс і
/// редагуються на місці; результати перераховуються на вимогу.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut inputs = ProcessInputs {
        selected_mode: config.default_mode,
        ..ProcessInputs::default()
    };
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::EditInputs => ui_cli::handle_edit_inputs(tr, &mut inputs)?,
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, &inputs),
            MenuChoice::OptimizationCurve => ui_cli::handle_optimization_curve(tr, &inputs),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
