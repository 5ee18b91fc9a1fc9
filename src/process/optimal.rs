use crate::process::OperationMode;

/// Кубічний поліном f(x) = a·x³ + b·x² + c·x + d.
#[derive(Debug, Clone, Copy)]
pub struct Cubic {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

impl Cubic {
    pub fn eval(&self, x: f32) -> f32 {
        self.a * x.powi(3) + self.b * x.powi(2) + self.c * x + self.d
    }
}

/// Оптимізаційне рівняння виходу цукру як функції вмісту цукрози в жомі.
/// Вибір рівняння залежить від режиму роботи та ступеня пресування.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationEquation {
    /// Повернення неочищеної води, пресування до СР ≥ 24 %
    ReturnUncleanedDeepPressing,
    /// Повернення очищеної води, пресування до СР ≥ 24 %
    ReturnCleanedDeepPressing,
    /// Повернення неочищеної води, пресування до СР ≥ 19 %
    ReturnUncleanedMediumPressing,
    /// Повернення очищеної води, пресування до СР ≥ 19 %
    ReturnCleanedMediumPressing,
    /// Усі інші комбінації режиму та ступеня пресування
    Baseline,
}

impl OptimizationEquation {
    /// Підбирає рівняння за режимом роботи та ступенем пресування.
    /// Гілки глибокого пресування перевіряються першими.
    pub fn select(mode: OperationMode, dry_matter_in_pressed_pulp: f32) -> Self {
        let dm = dry_matter_in_pressed_pulp;
        match mode {
            OperationMode::WithReturnWithoutCleaning if dm >= 24.0 => {
                OptimizationEquation::ReturnUncleanedDeepPressing
            }
            OperationMode::WithReturnWithCleaning if dm >= 24.0 => {
                OptimizationEquation::ReturnCleanedDeepPressing
            }
            OperationMode::WithReturnWithoutCleaning if dm >= 19.0 => {
                OptimizationEquation::ReturnUncleanedMediumPressing
            }
            OperationMode::WithReturnWithCleaning if dm >= 19.0 => {
                OptimizationEquation::ReturnCleanedMediumPressing
            }
            _ => OptimizationEquation::Baseline,
        }
    }

    /// Коефіцієнти кубічного полінома; `None` для базової параболи.
    pub fn cubic(&self) -> Option<Cubic> {
        match self {
            OptimizationEquation::ReturnUncleanedDeepPressing => Some(Cubic {
                a: -0.083,
                b: -0.159,
                c: 0.583,
                d: 12.729,
            }),
            OptimizationEquation::ReturnCleanedDeepPressing => Some(Cubic {
                a: -0.147,
                b: -0.094,
                c: 0.749,
                d: 13.056,
            }),
            OptimizationEquation::ReturnUncleanedMediumPressing => Some(Cubic {
                a: -0.081,
                b: -0.124,
                c: 0.483,
                d: 12.699,
            }),
            OptimizationEquation::ReturnCleanedMediumPressing => Some(Cubic {
                a: -0.1,
                b: -0.15,
                c: 0.606,
                d: 13.026,
            }),
            OptimizationEquation::Baseline => None,
        }
    }

    /// Обчислює значення рівняння у точці x.
    pub fn eval(&self, x: f32) -> f32 {
        match self.cubic() {
            Some(c) => c.eval(x),
            None => 12.5 + 0.3 * (x - 1.0) * (x - 1.0),
        }
    }
}

/// Оптимальний вміст цукрози в жомі, %. Табличний підбір за режимом
/// роботи та ступенем пресування; гілки режимів з поверненням води мають
/// пріоритет, решта ступенів пресування обробляється спільними діапазонами.
pub fn optimal_sugar_content(mode: OperationMode, dry_matter_in_pressed_pulp: f32) -> f32 {
    let dm = dry_matter_in_pressed_pulp;
    if mode == OperationMode::WithReturnWithoutCleaning && dm >= 24.0 {
        // Оптимум з діапазону 1.2–1.5
        1.2
    } else if mode == OperationMode::WithReturnWithCleaning && dm >= 24.0 {
        1.3
    } else if mode == OperationMode::WithReturnWithoutCleaning && (19.0..24.0).contains(&dm) {
        // Оптимум з діапазону 1.0–1.3
        1.0
    } else if mode == OperationMode::WithReturnWithCleaning && (19.0..24.0).contains(&dm) {
        1.2
    } else if dm < 17.0 {
        // Низький ступінь пресування (14–16 %)
        0.7
    } else if dm < 19.0 {
        0.9
    } else {
        1.1
    }
}
