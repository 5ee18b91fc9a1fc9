use crate::process::OperationMode;

/// Емпіричні коефіцієнти лінійної залежності ефекту очищення
/// Еф.оч. = α₀ + α₁·x, де x — масова частка цукрози в жомі.
#[derive(Debug, Clone, Copy)]
pub struct PurificationCoefficients {
    pub alpha0: f32,
    pub alpha1: f32,
}

/// Коефіцієнти ефекту очищення для заданого режиму роботи.
pub fn purification_coefficients(mode: OperationMode) -> PurificationCoefficients {
    match mode {
        OperationMode::WithoutReturn => PurificationCoefficients {
            alpha0: 28.653,
            alpha1: -0.372,
        },
        OperationMode::WithReturnWithoutCleaning => PurificationCoefficients {
            alpha0: 22.253,
            alpha1: -0.533,
        },
        OperationMode::WithReturnWithCleaning => PurificationCoefficients {
            alpha0: 24.941,
            alpha1: -0.348,
        },
    }
}

/// Ефект очищення соку: Еф.оч. = α₀ + α₁·x, %.
pub fn purification_effect(mode: OperationMode, sugar_content_in_pulp: f32) -> f32 {
    let c = purification_coefficients(mode);
    c.alpha0 + c.alpha1 * sugar_content_in_pulp
}

/// Чистота дифузійного соку: Ч диф.соку = Ч кл.соку − Еф.оч., %.
pub fn diffusion_juice_purity(cell_juice_purity: f32, purification_effect: f32) -> f32 {
    cell_juice_purity - purification_effect
}
