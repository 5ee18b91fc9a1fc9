//! Технологічні розрахунки жомопресового відділення.

pub mod losses;
pub mod optimal;
pub mod pressing;
pub mod purification;

pub use losses::*;
pub use optimal::*;
pub use pressing::*;
pub use purification::*;

use serde::{Deserialize, Serialize};

/// Режим роботи дифузійної установки. Визначає набір коефіцієнтів
/// ефекту очищення та оптимізаційне рівняння.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationMode {
    /// Без повернення жомопресової води
    WithoutReturn,
    /// З поверненням жомопресової води без хімічного очищення
    WithReturnWithoutCleaning,
    /// З поверненням жомопресової води з хімічним очищенням
    WithReturnWithCleaning,
}

impl OperationMode {
    pub const ALL: [OperationMode; 3] = [
        OperationMode::WithoutReturn,
        OperationMode::WithReturnWithoutCleaning,
        OperationMode::WithReturnWithCleaning,
    ];
}

impl Default for OperationMode {
    fn default() -> Self {
        OperationMode::WithoutReturn
    }
}
