/// Вихід пресованого жому, % до маси буряків:
/// В.пр.ж. = В.с.ж. · (СРс.ж. · (100 − Нпр.) / 100) / СРпр.ж.
///
/// Знаменник не перевіряється на нуль: за нульового вмісту сухих речовин
/// результат — нескінченність, яка відображається як є.
pub fn pressed_pulp_output(
    pulp_output: f32,
    dry_matter_in_raw_pulp: f32,
    normal_dry_matter_loss_in_press: f32,
    dry_matter_in_pressed_pulp: f32,
) -> f32 {
    pulp_output * (dry_matter_in_raw_pulp * (100.0 - normal_dry_matter_loss_in_press) / 100.0)
        / dry_matter_in_pressed_pulp
}

/// Вихід жомопресової води, % до маси буряків: В.ж.п.в. = В.с.ж. − В.пр.ж.
pub fn pressed_pulp_water_output(pulp_output: f32, pressed_pulp_output: f32) -> f32 {
    pulp_output - pressed_pulp_output
}
