use super::*;

fn reduce(state: FormState, action: FormAction) -> FormState {
    (*Rc::new(state).reduce(action)).clone()
}

fn password_form() -> FormState {
    let state = reduce(
        FormState::default(),
        FormAction::Register {
            field: "password".to_string(),
            rules: vec![
                ValidationRule::required("password required"),
                ValidationRule::satisfies(
                    |value, _| password_complexity(value),
                    "password too weak",
                ),
            ],
            dependencies: vec![],
        },
    );
    reduce(
        state,
        FormAction::Register {
            field: "confirm".to_string(),
            rules: vec![
                ValidationRule::required("confirm required"),
                ValidationRule::satisfies(confirm_matches_password, "passwords differ"),
            ],
            dependencies: vec!["password".to_string()],
        },
    )
}

#[test]
fn required_rule_rejects_blank_values() {
    let rule = ValidationRule::required("needed");
    let form = FormState::default();

    assert!(!rule_passes(&rule, "", &form));
    assert!(!rule_passes(&rule, "   ", &form));
    assert!(rule_passes(&rule, "x", &form));
}

#[test]
fn email_rule_skips_empty_and_checks_shape() {
    let rule = ValidationRule::email("bad email");
    let form = FormState::default();

    assert!(rule_passes(&rule, "", &form));
    assert!(rule_passes(&rule, "user@example.com", &form));
    assert!(!rule_passes(&rule, "not-an-email", &form));
    assert!(!rule_passes(&rule, "user@host", &form));
    assert!(!rule_passes(&rule, "user @example.com", &form));
}

#[test]
fn phone_pattern_requires_hyphen_grouping() {
    let rule = ValidationRule::pattern(PHONE_PATTERN, "bad phone");
    let form = FormState::default();

    assert!(rule_passes(&rule, "", &form));
    assert!(rule_passes(&rule, "010-1234-5678", &form));
    assert!(rule_passes(&rule, "02-123-4567", &form));
    assert!(!rule_passes(&rule, "01012345678", &form));
    assert!(!rule_passes(&rule, "010-12345-678", &form));
    assert!(!rule_passes(&rule, "010-1234-567", &form));
}

#[test]
fn password_complexity_needs_every_class() {
    assert!(password_complexity("abcde12!"));
    assert!(password_complexity("P4ssword?"));

    // too short
    assert!(!password_complexity("ab1!"));
    // missing a special
    assert!(!password_complexity("abcdefg1"));
    // missing a digit
    assert!(!password_complexity("abcdefg!"));
    // missing a letter
    assert!(!password_complexity("1234567!"));
    // character outside the fixed alphabet
    assert!(!password_complexity("abc 123!"));
    assert!(!password_complexity("abcde12^"));
}

#[test]
fn confirmation_passes_when_empty_or_equal() {
    let form = reduce(
        password_form(),
        FormAction::Input {
            field: "password".to_string(),
            value: "abcde12!".to_string(),
        },
    );

    assert!(confirm_matches_password("", &form));
    assert!(confirm_matches_password("abcde12!", &form));
    assert!(!confirm_matches_password("abcde12?", &form));
}

#[test]
fn blur_marks_touched_and_validates() {
    let form = reduce(
        password_form(),
        FormAction::Blur {
            field: "password".to_string(),
        },
    );

    assert!(form.is_touched("password"));
    assert_eq!(form.error("password"), Some("password required"));
    // untouched sibling stays silent
    assert_eq!(form.error("confirm"), None);
}

#[test]
fn first_failing_rule_wins_in_declared_order() {
    let mut form = reduce(
        password_form(),
        FormAction::Input {
            field: "password".to_string(),
            value: "short".to_string(),
        },
    );
    form = reduce(
        form,
        FormAction::Blur {
            field: "password".to_string(),
        },
    );

    assert_eq!(form.error("password"), Some("password too weak"));
}

#[test]
fn editing_the_password_revalidates_a_touched_confirmation() {
    let mut form = password_form();
    form = reduce(
        form,
        FormAction::Input {
            field: "password".to_string(),
            value: "abcde12!".to_string(),
        },
    );
    form = reduce(
        form,
        FormAction::Input {
            field: "confirm".to_string(),
            value: "abcde12!".to_string(),
        },
    );
    form = reduce(
        form,
        FormAction::Blur {
            field: "confirm".to_string(),
        },
    );
    assert_eq!(form.error("confirm"), None);

    // changing the primary value invalidates the confirmation without
    // the confirmation itself being edited
    form = reduce(
        form,
        FormAction::Input {
            field: "password".to_string(),
            value: "abcde12?".to_string(),
        },
    );
    assert_eq!(form.error("confirm"), Some("passwords differ"));

    // and aligning it again clears the error the same way
    form = reduce(
        form,
        FormAction::Input {
            field: "password".to_string(),
            value: "abcde12!".to_string(),
        },
    );
    assert_eq!(form.error("confirm"), None);
}

#[test]
fn validated_copy_flags_every_registered_field() {
    let form = password_form();
    let validated = form.validated();

    assert!(validated.has_errors());
    assert_eq!(validated.error("password"), Some("password required"));
    assert_eq!(validated.error("confirm"), Some("confirm required"));
    // the original is untouched; submit handlers dispatch ValidateAll to
    // display the result
    assert!(!form.has_errors());
}

#[test]
fn validate_all_action_matches_validated_copy() {
    let form = password_form();
    let expected = form.validated();
    let reduced = reduce(form, FormAction::ValidateAll);

    assert_eq!(reduced, expected);
}

#[test]
fn reset_clears_state_but_keeps_registrations() {
    let mut form = reduce(
        password_form(),
        FormAction::Input {
            field: "password".to_string(),
            value: "abcde12!".to_string(),
        },
    );
    form = reduce(form, FormAction::ValidateAll);
    form = reduce(form, FormAction::Reset);

    assert_eq!(form.value("password"), "");
    assert!(!form.has_errors());
    assert!(!form.is_touched("password"));

    // rules survive the reset: a fresh submit still blocks
    let revalidated = form.validated();
    assert_eq!(revalidated.error("password"), Some("password required"));
}

#[test]
fn registering_twice_replaces_the_rule_list() {
    let mut form = reduce(
        FormState::default(),
        FormAction::Register {
            field: "email".to_string(),
            rules: vec![ValidationRule::required("first message")],
            dependencies: vec![],
        },
    );
    form = reduce(
        form,
        FormAction::Register {
            field: "email".to_string(),
            rules: vec![ValidationRule::required("second message")],
            dependencies: vec![],
        },
    );

    let validated = form.validated();
    assert_eq!(validated.error("email"), Some("second message"));
}

fn rule_passes(rule: &ValidationRule, value: &str, form: &FormState) -> bool {
    let state = reduce(
        form.clone(),
        FormAction::Register {
            field: "probe".to_string(),
            rules: vec![rule.clone()],
            dependencies: vec![],
        },
    );
    let state = reduce(
        state,
        FormAction::Input {
            field: "probe".to_string(),
            value: value.to_string(),
        },
    );
    let state = reduce(
        state,
        FormAction::Blur {
            field: "probe".to_string(),
        },
    );
    state.error("probe").is_none()
}
