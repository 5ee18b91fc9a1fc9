use pulp_pressing_calculator::calculator::{self, parse_or_zero, ProcessInputs};
use pulp_pressing_calculator::process::OperationMode;

#[test]
fn default_inputs_without_return_full_chain() {
    let inputs = ProcessInputs::default();
    let results = calculator::calculate(&inputs);

    // Ланцюжок з округленням проміжних значень: кожне наступне число
    // рахується з уже відформатованого попереднього.
    assert_eq!(results.diffusion_juice_purity, "55.92");
    assert_eq!(results.pressed_pulp_output, "24.00");
    assert_eq!(results.pressed_pulp_water_output, "56.00");
    assert_eq!(results.sugar_loss_with_pulp, "22.800");
    assert_eq!(results.sugar_loss_in_molasses, "-7.537");
    assert_eq!(results.sugar_output, "0.337");
    assert_eq!(results.optimal_sugar_content, "0.9");
}

#[test]
fn water_output_identity_holds_for_rounded_values() {
    let inputs = ProcessInputs {
        pulp_output: "73.5".into(),
        dry_matter_in_pressed_pulp: 22.0,
        ..ProcessInputs::default()
    };
    let results = calculator::calculate(&inputs);
    let pulp_output = parse_or_zero(&inputs.pulp_output);
    let pressed = parse_or_zero(&results.pressed_pulp_output);
    let water = parse_or_zero(&results.pressed_pulp_water_output);
    assert_eq!(water, {
        // той самий формат, що й у ланцюжку розрахунку
        format!("{:.2}", pulp_output - pressed).parse::<f32>().unwrap()
    });
}

#[test]
fn malformed_field_behaves_as_zero() {
    let malformed = ProcessInputs {
        sugar_content_in_beets: "не число".into(),
        ..ProcessInputs::default()
    };
    let zeroed = ProcessInputs {
        sugar_content_in_beets: "0".into(),
        ..ProcessInputs::default()
    };
    assert_eq!(
        calculator::calculate(&malformed),
        calculator::calculate(&zeroed)
    );
}

#[test]
fn empty_field_behaves_as_zero() {
    let empty = ProcessInputs {
        crystallization_effect: "".into(),
        ..ProcessInputs::default()
    };
    let zeroed = ProcessInputs {
        crystallization_effect: "0".into(),
        ..ProcessInputs::default()
    };
    assert_eq!(calculator::calculate(&empty), calculator::calculate(&zeroed));
}

#[test]
fn results_are_pure_function_of_inputs() {
    let inputs = ProcessInputs {
        selected_mode: OperationMode::WithReturnWithCleaning,
        dry_matter_in_pressed_pulp: 25.0,
        sugar_content_in_pulp: 1.3,
        ..ProcessInputs::default()
    };
    let first = calculator::calculate(&inputs);
    let second = calculator::calculate(&inputs);
    assert_eq!(first, second);
    assert_eq!(first.optimal_sugar_content, "1.3");
}

#[test]
fn zero_dry_matter_division_is_not_guarded() {
    // СР = 0 неможливий через повзунок, але формула не перевіряє
    // знаменник: нескінченність форматується як є.
    let inputs = ProcessInputs {
        dry_matter_in_pressed_pulp: 0.0,
        ..ProcessInputs::default()
    };
    let results = calculator::calculate(&inputs);
    assert_eq!(results.pressed_pulp_output, "inf");
}

#[test]
fn parse_or_zero_accepts_plain_and_rejects_garbage() {
    assert_eq!(parse_or_zero("16.0"), 16.0);
    assert_eq!(parse_or_zero("  7.25 "), 7.25);
    assert_eq!(parse_or_zero("16,0"), 0.0);
    assert_eq!(parse_or_zero("abc"), 0.0);
    assert_eq!(parse_or_zero(""), 0.0);
}
