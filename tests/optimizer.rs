use pulp_pressing_calculator::optimizer::find_maximum;
use pulp_pressing_calculator::process::OptimizationEquation;

#[test]
fn grid_search_matches_brute_force_argmax() {
    let eq = OptimizationEquation::ReturnUncleanedDeepPressing;
    let found = find_maximum(0.4, 2.0, 0.1, |x| eq.eval(x));

    // Незалежний перебір тієї самої сітки
    let mut best_x = 0.4f32;
    let mut best_value = f32::NEG_INFINITY;
    let mut x = 0.4f32;
    while x <= 2.0 {
        let value = eq.eval(x);
        if value > best_value {
            best_value = value;
            best_x = x;
        }
        x += 0.1;
    }
    assert_eq!(found, best_x);
    // Кубічне рівняння має один внутрішній максимум поблизу x = 1.0
    assert!((found - 1.0).abs() < 1e-3, "found={found}");
}

#[test]
fn ties_keep_the_earliest_point() {
    let found = find_maximum(0.0, 1.0, 0.25, |_| 42.0);
    assert_eq!(found, 0.0);
}

#[test]
fn nan_values_never_win() {
    let found = find_maximum(0.0, 2.0, 0.5, |x| if x < 1.0 { f32::NAN } else { -x });
    assert_eq!(found, 1.0);
}

#[test]
fn all_nan_function_returns_range_start() {
    let found = find_maximum(0.4, 2.0, 0.1, |_| f32::NAN);
    assert_eq!(found, 0.4);
}

#[test]
fn accuracy_is_bounded_by_step() {
    // Парабола з вершиною у 1.03: грубша сітка дає 1.0, дрібніша — 1.03
    let f = |x: f32| -(x - 1.03) * (x - 1.03);
    let coarse = find_maximum(0.0, 2.0, 0.5, f);
    assert_eq!(coarse, 1.0);
    let fine = find_maximum(0.0, 2.0, 0.01, f);
    assert!((fine - 1.03).abs() < 5e-3, "fine={fine}");
}
