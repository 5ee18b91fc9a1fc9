//! Оркестратор розрахунку: тримає вхідні параметри, виконує формули у
//! фіксованому порядку та повертає набір відформатованих результатів.

use std::ops::RangeInclusive;

use crate::process::{self, OperationMode};

/// Допустимий діапазон масової частки сухих речовин у пресованому жомі, %.
pub const DRY_MATTER_RANGE: RangeInclusive<f32> = 14.0..=30.0;
/// Допустимий діапазон масової частки цукрози в жомі, %.
pub const SUGAR_CONTENT_RANGE: RangeInclusive<f32> = 0.2..=2.0;

/// Вхідні параметри процесу. Текстові поля зберігаються так, як їх ввів
/// користувач; некоректне число при розрахунку тихо трактується як 0.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInputs {
    /// Масова частка цукрози в буряках, %
    pub sugar_content_in_beets: String,
    /// Чистота клітинного соку, %
    pub cell_juice_purity: String,
    /// Ефект кристалізації цукрози, %
    pub crystallization_effect: String,
    /// Втрати цукрози від розкладання, %
    pub sugar_loss_from_decomposition: String,
    /// Вихід жому з дифузійної установки, % до маси буряків
    pub pulp_output: String,
    /// Масова частка сухих речовин у сирому жомі, %
    pub dry_matter_in_raw_pulp: String,
    /// Масова частка м'якоті у жомі, %
    pub pulp_mass_percent: String,
    /// Нормативна втрата сухих речовин при пресуванні, %
    pub normal_dry_matter_loss_in_press: String,
    /// Масова частка сухих речовин у пресованому жомі, % (повзунок 14–30)
    pub dry_matter_in_pressed_pulp: f32,
    /// Масова частка цукрози в жомі, % (повзунок 0.2–2.0)
    pub sugar_content_in_pulp: f32,
    /// Режим роботи дифузійної установки
    pub selected_mode: OperationMode,
}

impl Default for ProcessInputs {
    fn default() -> Self {
        Self {
            sugar_content_in_beets: "16.0".into(),
            cell_juice_purity: "84.2".into(),
            crystallization_effect: "32.5".into(),
            sugar_loss_from_decomposition: "0.4".into(),
            pulp_output: "80.0".into(),
            dry_matter_in_raw_pulp: "6.0".into(),
            pulp_mass_percent: "5.0".into(),
            normal_dry_matter_loss_in_press: "10.0".into(),
            dry_matter_in_pressed_pulp: 18.0,
            sugar_content_in_pulp: 1.0,
            selected_mode: OperationMode::WithoutReturn,
        }
    }
}

/// Результати розрахунку. Кожне поле — вже відформатований рядок з
/// фіксованою кількістю знаків після коми.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResults {
    /// Чистота дифузійного соку, %
    pub diffusion_juice_purity: String,
    /// Вихід пресованого жому, % до маси буряків
    pub pressed_pulp_output: String,
    /// Вихід жомопресової води, % до маси буряків
    pub pressed_pulp_water_output: String,
    /// Втрати цукрози з жомом, % до маси буряків
    pub sugar_loss_with_pulp: String,
    /// Втрати цукрози з мелясою, % до маси буряків
    pub sugar_loss_in_molasses: String,
    /// Вихід цукру, % до маси буряків
    pub sugar_output: String,
    /// Оптимальний вміст цукрози в жомі, %
    pub optimal_sugar_content: String,
}

/// Розбирає текстове поле; некоректне число стає 0 без повідомлення про
/// помилку. Це єдиний канал обробки хибного вводу в усьому ядрі.
pub fn parse_or_zero(s: &str) -> f32 {
    s.trim().parse::<f32>().unwrap_or(0.0)
}

fn fmt1(v: f32) -> String {
    format!("{v:.1}")
}

fn fmt2(v: f32) -> String {
    format!("{v:.2}")
}

fn fmt3(v: f32) -> String {
    format!("{v:.3}")
}

/// Виконує всі формули у фіксованому порядку залежностей.
///
/// Кожен проміжний результат спершу форматується до свого числа знаків,
/// а далі по ланцюжку споживається вже перерозібране округлене значення.
/// Підсумкові цифри залежать саме від такого порядку, тому повторний
/// розбір проміжних значень зберігається свідомо.
pub fn calculate(inputs: &ProcessInputs) -> ProcessResults {
    // 1. Чистота дифузійного соку
    let cell_juice_purity = parse_or_zero(&inputs.cell_juice_purity);
    let effect = process::purification_effect(inputs.selected_mode, inputs.sugar_content_in_pulp);
    let diffusion_juice_purity = fmt2(process::diffusion_juice_purity(cell_juice_purity, effect));

    // 2. Вихід пресованого жому
    let pulp_output = parse_or_zero(&inputs.pulp_output);
    let pressed_pulp_output = fmt2(process::pressed_pulp_output(
        pulp_output,
        parse_or_zero(&inputs.dry_matter_in_raw_pulp),
        parse_or_zero(&inputs.normal_dry_matter_loss_in_press),
        inputs.dry_matter_in_pressed_pulp,
    ));

    // 3. Вихід жомопресової води
    let pressed_pulp_water_output = fmt2(process::pressed_pulp_water_output(
        pulp_output,
        parse_or_zero(&pressed_pulp_output),
    ));

    // 4. Втрати цукрози з жомом
    let sugar_loss_with_pulp = fmt3(process::sugar_loss_with_pulp(
        parse_or_zero(&pressed_pulp_output),
        inputs.sugar_content_in_pulp,
        parse_or_zero(&inputs.pulp_mass_percent),
    ));

    // 5. Втрати цукрози з мелясою
    let sugar_content_in_beets = parse_or_zero(&inputs.sugar_content_in_beets);
    let sugar_loss_in_molasses = fmt3(process::sugar_loss_in_molasses(
        sugar_content_in_beets,
        parse_or_zero(&sugar_loss_with_pulp),
        parse_or_zero(&inputs.crystallization_effect),
        parse_or_zero(&diffusion_juice_purity),
    ));

    // 6. Вихід цукру
    let sugar_output = fmt3(process::sugar_output(
        sugar_content_in_beets,
        parse_or_zero(&sugar_loss_with_pulp),
        parse_or_zero(&sugar_loss_in_molasses),
        parse_or_zero(&inputs.sugar_loss_from_decomposition),
    ));

    // 7. Оптимальний вміст цукрози
    let optimal_sugar_content = fmt1(process::optimal_sugar_content(
        inputs.selected_mode,
        inputs.dry_matter_in_pressed_pulp,
    ));

    ProcessResults {
        diffusion_juice_purity,
        pressed_pulp_output,
        pressed_pulp_water_output,
        sugar_loss_with_pulp,
        sugar_loss_in_molasses,
        sugar_output,
        optimal_sugar_content,
    }
}
