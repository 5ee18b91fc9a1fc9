use std::io::{self, Write};

use crate::app::AppError;
use crate::calculator::{self, ProcessInputs, DRY_MATTER_RANGE, SUGAR_CONTENT_RANGE};
use crate::config::Config;
use crate::i18n::{self, keys, Translator};
use crate::optimizer;
use crate::process::{OperationMode, OptimizationEquation};

/// Пункти головного меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditInputs,
    Calculate,
    OptimizationCurve,
    Settings,
    Exit,
}

/// Показує головне меню і повертає вибір користувача.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_EDIT_INPUTS));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_CURVE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditInputs),
            "2" => return Ok(MenuChoice::Calculate),
            "3" => return Ok(MenuChoice::OptimizationCurve),
            "4" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Редагування параметрів процесу. Текстові поля приймають будь-який
/// рядок: некоректне число при розрахунку стане нулем, тому тут немає
/// жодної додаткової перевірки.
pub fn handle_edit_inputs(tr: &Translator, inputs: &mut ProcessInputs) -> Result<(), AppError> {
    println!("{}", tr.t(keys::INPUTS_HEADING));
    println!("{}", tr.t(keys::INPUTS_KEEP_HINT));

    edit_text_field(tr, keys::INPUT_SUGAR_IN_BEETS, &mut inputs.sugar_content_in_beets)?;
    edit_text_field(tr, keys::INPUT_CELL_JUICE_PURITY, &mut inputs.cell_juice_purity)?;
    edit_text_field(
        tr,
        keys::INPUT_CRYSTALLIZATION_EFFECT,
        &mut inputs.crystallization_effect,
    )?;
    edit_text_field(
        tr,
        keys::INPUT_LOSS_DECOMPOSITION,
        &mut inputs.sugar_loss_from_decomposition,
    )?;
    edit_text_field(tr, keys::INPUT_PULP_OUTPUT, &mut inputs.pulp_output)?;
    edit_text_field(tr, keys::INPUT_DRY_MATTER_RAW, &mut inputs.dry_matter_in_raw_pulp)?;
    edit_text_field(tr, keys::INPUT_PULP_MASS_PERCENT, &mut inputs.pulp_mass_percent)?;
    edit_text_field(
        tr,
        keys::INPUT_NORM_LOSS_PRESS,
        &mut inputs.normal_dry_matter_loss_in_press,
    )?;

    inputs.dry_matter_in_pressed_pulp = edit_bounded_field(
        tr,
        keys::INPUT_DRY_MATTER_PRESSED,
        inputs.dry_matter_in_pressed_pulp,
        DRY_MATTER_RANGE,
    )?;
    inputs.sugar_content_in_pulp = edit_bounded_field(
        tr,
        keys::INPUT_SUGAR_IN_PULP,
        inputs.sugar_content_in_pulp,
        SUGAR_CONTENT_RANGE,
    )?;

    println!(
        "{} [{}]",
        tr.t(keys::INPUT_MODE),
        tr.t(i18n::mode_label_key(inputs.selected_mode))
    );
    println!("{}", tr.t(keys::MODE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
    match sel.trim() {
        "1" => inputs.selected_mode = OperationMode::WithoutReturn,
        "2" => inputs.selected_mode = OperationMode::WithReturnWithoutCleaning,
        "3" => inputs.selected_mode = OperationMode::WithReturnWithCleaning,
        "" => {}
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn edit_text_field(tr: &Translator, label_key: &str, field: &mut String) -> Result<(), AppError> {
    let entered = read_line(&format!("{} [{}]: ", tr.t(label_key), field))?;
    let entered = entered.trim();
    if !entered.is_empty() {
        *field = entered.to_string();
    }
    Ok(())
}

fn edit_bounded_field(
    tr: &Translator,
    label_key: &str,
    current: f32,
    range: std::ops::RangeInclusive<f32>,
) -> Result<f32, AppError> {
    loop {
        let entered = read_line(&format!("{} [{}]: ", tr.t(label_key), current))?;
        let entered = entered.trim();
        if entered.is_empty() {
            return Ok(current);
        }
        match entered.parse::<f32>() {
            Ok(v) => return Ok(v.clamp(*range.start(), *range.end())),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// Виконує розрахунок і друкує всі результати.
pub fn handle_calculate(tr: &Translator, inputs: &ProcessInputs) {
    let results = calculator::calculate(inputs);
    println!("{}", tr.t(keys::RESULTS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::RESULT_DIFFUSION_JUICE_PURITY),
        results.diffusion_juice_purity
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_PRESSED_PULP_OUTPUT),
        results.pressed_pulp_output
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_PRESSED_PULP_WATER_OUTPUT),
        results.pressed_pulp_water_output
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_SUGAR_LOSS_WITH_PULP),
        results.sugar_loss_with_pulp
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_SUGAR_LOSS_IN_MOLASSES),
        results.sugar_loss_in_molasses
    );
    println!("{} {}", tr.t(keys::RESULT_SUGAR_OUTPUT), results.sugar_output);
    println!(
        "{} {}",
        tr.t(keys::RESULT_OPTIMAL_SUGAR_CONTENT),
        results.optimal_sugar_content
    );
}

/// Друкує таблицю значень оптимізаційного рівняння для поточного режиму
/// та знайдений перебором оптимум.
pub fn handle_optimization_curve(tr: &Translator, inputs: &ProcessInputs) {
    let eq = OptimizationEquation::select(inputs.selected_mode, inputs.dry_matter_in_pressed_pulp);
    println!("{}", tr.t(keys::CURVE_HEADING));
    println!(
        "{} {}",
        tr.t(keys::CURVE_EQUATION),
        tr.t(i18n::equation_label_key(eq))
    );
    println!("{}", tr.t(keys::CURVE_TABLE_HEADER));
    let mut x = 0.4f32;
    while x <= 2.0 {
        println!("  {x:>5.1}  {:>8.3}", eq.eval(x));
        x += 0.1;
    }
    let optimal_x = optimizer::find_maximum(0.4, 2.0, 0.1, |x| eq.eval(x));
    println!(
        "{} x = {:.1}, f(x) = {:.3}",
        tr.t(keys::CURVE_OPTIMUM),
        optimal_x,
        eq.eval(optimal_x)
    );
}

/// Меню налаштувань: мова інтерфейсу та режим за замовчуванням.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let lang = lang.trim();
    if !lang.is_empty() {
        match lang.to_lowercase().as_str() {
            "uk" | "uk-ua" | "en" | "en-us" | "auto" => {
                cfg.language = lang.to_lowercase();
                println!("{}", tr.t(keys::SETTINGS_SAVED));
            }
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_MODE),
        tr.t(i18n::mode_label_key(cfg.default_mode))
    );
    println!("{}", tr.t(keys::MODE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_MODE))?;
    match sel.trim() {
        "1" => cfg.default_mode = OperationMode::WithoutReturn,
        "2" => cfg.default_mode = OperationMode::WithReturnWithoutCleaning,
        "3" => cfg.default_mode = OperationMode::WithReturnWithCleaning,
        "" => {}
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
