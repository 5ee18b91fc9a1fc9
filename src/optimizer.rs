//! Пошук максимуму функції однієї змінної перебором на сітці.

/// Проходить сітку x = start, start+step, … поки x ≤ end і повертає x,
/// у якому значення f найбільше. За рівних значень лишається перша
/// знайдена точка. Точність обмежена кроком; інтерполяції немає.
///
/// NaN ніколи не перемагає в порівнянні `>`, тож точки з NaN просто
/// пропускаються; якщо функція всюди NaN, повертається початок діапазону.
pub fn find_maximum<F>(range_start: f32, range_end: f32, step: f32, f: F) -> f32
where
    F: Fn(f32) -> f32,
{
    let mut max_value = f32::NEG_INFINITY;
    let mut optimal_x = range_start;

    let mut x = range_start;
    while x <= range_end {
        let value = f(x);
        if value > max_value {
            max_value = value;
            optimal_x = x;
        }
        x += step;
    }

    optimal_x
}
