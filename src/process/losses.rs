/// Втрати цукрози з жомом, % до маси буряків:
/// Втр.ц.ж. = В.пр.ж. · Цк.ж. · (100 − М) / 100.
pub fn sugar_loss_with_pulp(
    pressed_pulp_output: f32,
    sugar_content_in_pulp: f32,
    pulp_mass_percent: f32,
) -> f32 {
    pressed_pulp_output * sugar_content_in_pulp * (100.0 - pulp_mass_percent) / 100.0
}

/// Втрати цукрози з мелясою, % до маси буряків:
/// Втр.ц.м. = Ц.стр. − Втр.ц.ж. − Еф.кр. · К / 100, де К = 100 / (100 − Ч диф.соку).
pub fn sugar_loss_in_molasses(
    sugar_content_in_beets: f32,
    sugar_loss_with_pulp: f32,
    crystallization_effect: f32,
    diffusion_juice_purity: f32,
) -> f32 {
    let k = 100.0 / (100.0 - diffusion_juice_purity);
    sugar_content_in_beets - sugar_loss_with_pulp - crystallization_effect * k / 100.0
}

/// Вихід цукру, % до маси буряків:
/// В.ц. = Ц.стр. − Втр.ц.ж. − Втр.ц.м. − Втр.розкл.
pub fn sugar_output(
    sugar_content_in_beets: f32,
    sugar_loss_with_pulp: f32,
    sugar_loss_in_molasses: f32,
    sugar_loss_from_decomposition: f32,
) -> f32 {
    sugar_content_in_beets - sugar_loss_with_pulp - sugar_loss_in_molasses
        - sugar_loss_from_decomposition
}
