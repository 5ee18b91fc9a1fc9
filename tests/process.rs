use pulp_pressing_calculator::process::{
    diffusion_juice_purity, optimal_sugar_content, pressed_pulp_output,
    pressed_pulp_water_output, purification_coefficients, purification_effect,
    sugar_loss_in_molasses, sugar_loss_with_pulp, sugar_output, OperationMode,
    OptimizationEquation,
};

#[test]
fn purification_effect_at_unit_sugar_content_is_coefficient_sum() {
    for mode in OperationMode::ALL {
        let c = purification_coefficients(mode);
        let effect = purification_effect(mode, 1.0);
        assert!(
            (effect - (c.alpha0 + c.alpha1)).abs() < 1e-6,
            "mode={mode:?} effect={effect}"
        );
    }
    assert!((purification_effect(OperationMode::WithoutReturn, 1.0) - 28.281).abs() < 1e-4);
    assert!(
        (purification_effect(OperationMode::WithReturnWithoutCleaning, 1.0) - 21.72).abs() < 1e-4
    );
    assert!((purification_effect(OperationMode::WithReturnWithCleaning, 1.0) - 24.593).abs() < 1e-4);
}

#[test]
fn diffusion_purity_subtracts_purification_effect() {
    assert!((diffusion_juice_purity(84.2, 28.281) - 55.919).abs() < 1e-3);
}

#[test]
fn pressing_formulas() {
    let pressed = pressed_pulp_output(80.0, 6.0, 10.0, 18.0);
    assert!((pressed - 24.0).abs() < 1e-4);
    assert!((pressed_pulp_water_output(80.0, pressed) - 56.0).abs() < 1e-4);
}

#[test]
fn loss_formulas() {
    let loss_pulp = sugar_loss_with_pulp(24.0, 1.0, 5.0);
    assert!((loss_pulp - 22.8).abs() < 1e-4);

    // К = 100 / (100 − 55.92) ≈ 2.2686
    let loss_molasses = sugar_loss_in_molasses(16.0, 22.8, 32.5, 55.92);
    assert!((loss_molasses - (16.0 - 22.8 - 0.737296)).abs() < 1e-4);

    let output = sugar_output(16.0, 22.8, loss_molasses, 0.4);
    assert!((output - 0.337296).abs() < 1e-4);
}

#[test]
fn molasses_division_is_unguarded_at_full_purity() {
    // Чистота дифузійного соку 100 % дає ділення на нуль; результат —
    // нескінченність, і це очікувана поведінка.
    let loss = sugar_loss_in_molasses(16.0, 2.0, 32.5, 100.0);
    assert!(loss.is_infinite());
}

#[test]
fn optimal_sugar_content_lookup_table() {
    use OperationMode::*;
    assert_eq!(optimal_sugar_content(WithReturnWithCleaning, 25.0), 1.3);
    assert_eq!(optimal_sugar_content(WithReturnWithoutCleaning, 25.0), 1.2);
    assert_eq!(optimal_sugar_content(WithReturnWithoutCleaning, 20.0), 1.0);
    assert_eq!(optimal_sugar_content(WithReturnWithCleaning, 20.0), 1.2);
    assert_eq!(optimal_sugar_content(WithoutReturn, 16.0), 0.7);
    assert_eq!(optimal_sugar_content(WithoutReturn, 18.0), 0.9);
    // Режим без повернення за СР = 20 потрапляє у спільну гілку 1.1,
    // тоді як режими з поверненням — у власні діапазони.
    assert_eq!(optimal_sugar_content(WithoutReturn, 20.0), 1.1);
    // Межі діапазонів
    assert_eq!(optimal_sugar_content(WithReturnWithoutCleaning, 24.0), 1.2);
    assert_eq!(optimal_sugar_content(WithReturnWithoutCleaning, 19.0), 1.0);
    assert_eq!(optimal_sugar_content(WithoutReturn, 17.0), 0.9);
    assert_eq!(optimal_sugar_content(WithoutReturn, 19.0), 1.1);
}

#[test]
fn equation_selection_follows_mode_and_pressing_degree() {
    use OperationMode::*;
    use OptimizationEquation::*;
    assert_eq!(
        OptimizationEquation::select(WithReturnWithoutCleaning, 25.0),
        ReturnUncleanedDeepPressing
    );
    assert_eq!(
        OptimizationEquation::select(WithReturnWithCleaning, 24.0),
        ReturnCleanedDeepPressing
    );
    assert_eq!(
        OptimizationEquation::select(WithReturnWithoutCleaning, 20.0),
        ReturnUncleanedMediumPressing
    );
    assert_eq!(
        OptimizationEquation::select(WithReturnWithCleaning, 19.0),
        ReturnCleanedMediumPressing
    );
    assert_eq!(OptimizationEquation::select(WithoutReturn, 25.0), Baseline);
    assert_eq!(
        OptimizationEquation::select(WithReturnWithCleaning, 18.0),
        Baseline
    );
}

#[test]
fn equation_values_match_coefficients() {
    // f(1) = a + b + c + d для кожного кубічного рівняння
    let cases = [
        (OptimizationEquation::ReturnUncleanedDeepPressing, 13.07),
        (OptimizationEquation::ReturnCleanedDeepPressing, 13.564),
        (OptimizationEquation::ReturnUncleanedMediumPressing, 12.977),
        (OptimizationEquation::ReturnCleanedMediumPressing, 13.382),
    ];
    for (eq, expected) in cases {
        assert!((eq.eval(1.0) - expected).abs() < 1e-4, "eq={eq:?}");
    }
    // Базова парабола: мінімум 12.5 у точці x = 1
    assert!((OptimizationEquation::Baseline.eval(1.0) - 12.5).abs() < 1e-6);
    assert!((OptimizationEquation::Baseline.eval(2.0) - 12.8).abs() < 1e-6);
    assert!(OptimizationEquation::Baseline.cubic().is_none());
}
