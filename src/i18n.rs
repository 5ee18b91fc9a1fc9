use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::process::{OperationMode, OptimizationEquation};

/// Простір імен рядкових ключів.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_EDIT_INPUTS: &str = "main_menu.edit_inputs";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_CURVE: &str = "main_menu.curve";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const INPUTS_HEADING: &str = "inputs.heading";
    pub const INPUTS_KEEP_HINT: &str = "inputs.keep_hint";
    pub const INPUT_SUGAR_IN_BEETS: &str = "inputs.sugar_in_beets";
    pub const INPUT_CELL_JUICE_PURITY: &str = "inputs.cell_juice_purity";
    pub const INPUT_CRYSTALLIZATION_EFFECT: &str = "inputs.crystallization_effect";
    pub const INPUT_LOSS_DECOMPOSITION: &str = "inputs.loss_decomposition";
    pub const INPUT_PULP_OUTPUT: &str = "inputs.pulp_output";
    pub const INPUT_DRY_MATTER_RAW: &str = "inputs.dry_matter_raw";
    pub const INPUT_PULP_MASS_PERCENT: &str = "inputs.pulp_mass_percent";
    pub const INPUT_NORM_LOSS_PRESS: &str = "inputs.norm_loss_press";
    pub const INPUT_DRY_MATTER_PRESSED: &str = "inputs.dry_matter_pressed";
    pub const INPUT_SUGAR_IN_PULP: &str = "inputs.sugar_in_pulp";
    pub const INPUT_MODE: &str = "inputs.mode";

    pub const MODE_OPTIONS: &str = "mode.options";
    pub const MODE_WITHOUT_RETURN: &str = "mode.without_return";
    pub const MODE_RETURN_UNCLEANED: &str = "mode.return_uncleaned";
    pub const MODE_RETURN_CLEANED: &str = "mode.return_cleaned";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const RESULT_DIFFUSION_JUICE_PURITY: &str = "results.diffusion_juice_purity";
    pub const RESULT_PRESSED_PULP_OUTPUT: &str = "results.pressed_pulp_output";
    pub const RESULT_PRESSED_PULP_WATER_OUTPUT: &str = "results.pressed_pulp_water_output";
    pub const RESULT_SUGAR_LOSS_WITH_PULP: &str = "results.sugar_loss_with_pulp";
    pub const RESULT_SUGAR_LOSS_IN_MOLASSES: &str = "results.sugar_loss_in_molasses";
    pub const RESULT_SUGAR_OUTPUT: &str = "results.sugar_output";
    pub const RESULT_OPTIMAL_SUGAR_CONTENT: &str = "results.optimal_sugar_content";

    pub const CURVE_HEADING: &str = "curve.heading";
    pub const CURVE_EQUATION: &str = "curve.equation";
    pub const CURVE_TABLE_HEADER: &str = "curve.table_header";
    pub const CURVE_OPTIMUM: &str = "curve.optimum";

    pub const EQ_RETURN_UNCLEANED_DEEP: &str = "equation.return_uncleaned_deep";
    pub const EQ_RETURN_CLEANED_DEEP: &str = "equation.return_cleaned_deep";
    pub const EQ_RETURN_UNCLEANED_MEDIUM: &str = "equation.return_uncleaned_medium";
    pub const EQ_RETURN_CLEANED_MEDIUM: &str = "equation.return_cleaned_medium";
    pub const EQ_BASELINE: &str = "equation.baseline";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_CURRENT_MODE: &str = "settings.current_mode";
    pub const SETTINGS_PROMPT_MODE: &str = "settings.prompt_mode";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_INVALID: &str = "settings.invalid";

    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
}

/// Ключ підпису режиму роботи для перекладача.
pub fn mode_label_key(mode: OperationMode) -> &'static str {
    match mode {
        OperationMode::WithoutReturn => keys::MODE_WITHOUT_RETURN,
        OperationMode::WithReturnWithoutCleaning => keys::MODE_RETURN_UNCLEANED,
        OperationMode::WithReturnWithCleaning => keys::MODE_RETURN_CLEANED,
    }
}

/// Ключ підпису оптимізаційного рівняння для перекладача.
pub fn equation_label_key(eq: OptimizationEquation) -> &'static str {
    match eq {
        OptimizationEquation::ReturnUncleanedDeepPressing => keys::EQ_RETURN_UNCLEANED_DEEP,
        OptimizationEquation::ReturnCleanedDeepPressing => keys::EQ_RETURN_CLEANED_DEEP,
        OptimizationEquation::ReturnUncleanedMediumPressing => keys::EQ_RETURN_UNCLEANED_MEDIUM,
        OptimizationEquation::ReturnCleanedMediumPressing => keys::EQ_RETURN_CLEANED_MEDIUM,
        OptimizationEquation::Baseline => keys::EQ_BASELINE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Uk,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Uk
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::En => "en",
        }
    }
}

/// Рантайм-словник інтерфейсних рядків.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// Створює перекладач за кодом мови (uk/en). Невідомий код — фолбек uk.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// Створює перекладач з мовним пакетом з каталогу (locales/ тощо).
    /// Якщо каталогу чи файлу немає, використовуються вбудовані рядки.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// Шукає рядок у мовному пакеті. Якщо ключа немає — None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// Повертає переклад. Якщо англійського рядка немає, фолбек на
    /// українську.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| uk(key)),
            Language::Uk => uk(key),
        }
    }
}

/// Визначає код мови у порядку: аргумент CLI → налаштування → система.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "uk-ua".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "uk" => Some("uk".into()),
        "uk-ua" => Some("uk-ua".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("uk") => Some("uk".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "uk" => Some("uk".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// Вгадує мову із системної локалі.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// Читає мовний пакет TOML: плоска мапа key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) повний код (напр. uk-ua)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) базовий код (напр. uk)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// Вбудовані мовні пакети (працюють і без файлів поряд з програмою).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "uk-ua" | "uk" => parse_toml_to_map(include_str!("../locales/uk-ua.toml")),
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        _ => None,
    }
}

fn uk(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Помилка",
        APP_EXIT => "Завершення роботи програми.",
        MAIN_MENU_TITLE => "\n=== Розрахунок вмісту цукрози у буряковій стружці ===",
        MAIN_MENU_EDIT_INPUTS => "1) Параметри процесу",
        MAIN_MENU_CALCULATE => "2) Розрахунок",
        MAIN_MENU_CURVE => "3) Оптимізаційна крива",
        MAIN_MENU_SETTINGS => "4) Налаштування",
        MAIN_MENU_EXIT => "0) Вихід",
        PROMPT_MENU_SELECT => "Вибір пункту меню: ",
        INVALID_SELECTION_RETRY => "Некоректний вибір. Спробуйте ще раз.",
        INPUTS_HEADING => "\n-- Параметри процесу --",
        INPUTS_KEEP_HINT => "Порожній рядок лишає поточне значення.",
        INPUT_SUGAR_IN_BEETS => "Масова частка цукрози в буряках, %",
        INPUT_CELL_JUICE_PURITY => "Чистота клітинного соку, %",
        INPUT_CRYSTALLIZATION_EFFECT => "Ефект кристалізації цукрози, %",
        INPUT_LOSS_DECOMPOSITION => "Втрати цукрози від розкладання, %",
        INPUT_PULP_OUTPUT => "Вихід жому з дифузійної установки, % до м.б.",
        INPUT_DRY_MATTER_RAW => "Масова частка сухих речовин у сирому жомі, %",
        INPUT_PULP_MASS_PERCENT => "Масова частка м'якоті у жомі, %",
        INPUT_NORM_LOSS_PRESS => "Нормативна втрата сухих речовин при пресуванні, %",
        INPUT_DRY_MATTER_PRESSED => "Масова частка сухих речовин у пресованому жомі, % (14–30)",
        INPUT_SUGAR_IN_PULP => "Масова частка цукрози в жомі, % (0.2–2.0)",
        INPUT_MODE => "Режим роботи дифузійної установки",
        MODE_OPTIONS => "1) Без повернення  2) З поверненням без очищення  3) З поверненням з очищенням",
        MODE_WITHOUT_RETURN => "Без повернення жомопресової води",
        MODE_RETURN_UNCLEANED => "З поверненням жомопресової води без хім. очищення",
        MODE_RETURN_CLEANED => "З поверненням жомопресової води з хім. очищенням",
        RESULTS_HEADING => "\n-- Результати розрахунку --",
        RESULT_DIFFUSION_JUICE_PURITY => "Чистота дифузійного соку, %:",
        RESULT_PRESSED_PULP_OUTPUT => "Вихід пресованого жому, % до м.б.:",
        RESULT_PRESSED_PULP_WATER_OUTPUT => "Вихід жомопресової води, % до м.б.:",
        RESULT_SUGAR_LOSS_WITH_PULP => "Втрати цукрози з жомом, % до м.б.:",
        RESULT_SUGAR_LOSS_IN_MOLASSES => "Втрати цукрози з мелясою, % до м.б.:",
        RESULT_SUGAR_OUTPUT => "Вихід цукру, % до м.б.:",
        RESULT_OPTIMAL_SUGAR_CONTENT => "Оптимальний вміст цукрози в жомі, %:",
        CURVE_HEADING => "\n-- Оптимізаційна крива --",
        CURVE_EQUATION => "Рівняння:",
        CURVE_TABLE_HEADER => "   x, %   f(x), %",
        CURVE_OPTIMUM => "Оптимум (перебір з кроком 0.1):",
        EQ_RETURN_UNCLEANED_DEEP => "Повернення неочищеної води, СР ≥ 24 %",
        EQ_RETURN_CLEANED_DEEP => "Повернення очищеної води, СР ≥ 24 %",
        EQ_RETURN_UNCLEANED_MEDIUM => "Повернення неочищеної води, СР ≥ 19 %",
        EQ_RETURN_CLEANED_MEDIUM => "Повернення очищеної води, СР ≥ 19 %",
        EQ_BASELINE => "Базова залежність (інші режими)",
        SETTINGS_HEADING => "\n-- Налаштування --",
        SETTINGS_CURRENT_LANGUAGE => "Поточна мова:",
        SETTINGS_PROMPT_LANGUAGE => "Нова мова (uk/en/auto, Enter — без змін): ",
        SETTINGS_CURRENT_MODE => "Режим за замовчуванням:",
        SETTINGS_PROMPT_MODE => "Новий режим (1/2/3, Enter — без змін): ",
        SETTINGS_SAVED => "Налаштування збережено.",
        SETTINGS_INVALID => "Некоректне значення, нічого не змінено.",
        ERROR_INVALID_NUMBER => "Введіть число.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Sugar Content in Beet Pulp Calculator ===",
        MAIN_MENU_EDIT_INPUTS => "1) Process parameters",
        MAIN_MENU_CALCULATE => "2) Calculate",
        MAIN_MENU_CURVE => "3) Optimization curve",
        MAIN_MENU_SETTINGS => "4) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu item: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        INPUTS_HEADING => "\n-- Process parameters --",
        INPUTS_KEEP_HINT => "Empty line keeps the current value.",
        INPUT_SUGAR_IN_BEETS => "Sugar content in beets, %",
        INPUT_CELL_JUICE_PURITY => "Cell juice purity, %",
        INPUT_CRYSTALLIZATION_EFFECT => "Sucrose crystallization effect, %",
        INPUT_LOSS_DECOMPOSITION => "Sugar loss from decomposition, %",
        INPUT_PULP_OUTPUT => "Pulp output from diffuser, % of beet mass",
        INPUT_DRY_MATTER_RAW => "Dry matter in raw pulp, %",
        INPUT_PULP_MASS_PERCENT => "Pulp soft-mass fraction, %",
        INPUT_NORM_LOSS_PRESS => "Normative dry-matter loss in press, %",
        INPUT_DRY_MATTER_PRESSED => "Dry matter in pressed pulp, % (14–30)",
        INPUT_SUGAR_IN_PULP => "Sugar content in pulp, % (0.2–2.0)",
        INPUT_MODE => "Diffuser operation mode",
        MODE_OPTIONS => "1) Without return  2) Return without cleaning  3) Return with cleaning",
        MODE_WITHOUT_RETURN => "Without pulp-press water return",
        MODE_RETURN_UNCLEANED => "With pulp-press water return, no chemical cleaning",
        MODE_RETURN_CLEANED => "With pulp-press water return, chemically cleaned",
        RESULTS_HEADING => "\n-- Calculation results --",
        RESULT_DIFFUSION_JUICE_PURITY => "Diffusion juice purity, %:",
        RESULT_PRESSED_PULP_OUTPUT => "Pressed pulp output, % of beet mass:",
        RESULT_PRESSED_PULP_WATER_OUTPUT => "Pulp-press water output, % of beet mass:",
        RESULT_SUGAR_LOSS_WITH_PULP => "Sugar loss with pulp, % of beet mass:",
        RESULT_SUGAR_LOSS_IN_MOLASSES => "Sugar loss in molasses, % of beet mass:",
        RESULT_SUGAR_OUTPUT => "Sugar output, % of beet mass:",
        RESULT_OPTIMAL_SUGAR_CONTENT => "Optimal sugar content in pulp, %:",
        CURVE_HEADING => "\n-- Optimization curve --",
        CURVE_EQUATION => "Equation:",
        CURVE_TABLE_HEADER => "   x, %   f(x), %",
        CURVE_OPTIMUM => "Optimum (grid search, step 0.1):",
        EQ_RETURN_UNCLEANED_DEEP => "Uncleaned water return, DM ≥ 24 %",
        EQ_RETURN_CLEANED_DEEP => "Cleaned water return, DM ≥ 24 %",
        EQ_RETURN_UNCLEANED_MEDIUM => "Uncleaned water return, DM ≥ 19 %",
        EQ_RETURN_CLEANED_MEDIUM => "Cleaned water return, DM ≥ 19 %",
        EQ_BASELINE => "Baseline relation (other modes)",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_PROMPT_LANGUAGE => "New language (uk/en/auto, Enter keeps current): ",
        SETTINGS_CURRENT_MODE => "Default operation mode:",
        SETTINGS_PROMPT_MODE => "New mode (1/2/3, Enter keeps current): ",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_INVALID => "Invalid value; nothing changed.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        _ => return None,
    })
}
