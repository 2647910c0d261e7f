use greengrow_passgen::strength::LOOKS_GOOD;
use greengrow_passgen::{check_password_strength, StrengthColor, StrengthTier};
use rstest::rstest;

#[rstest]
#[case("Tr0ub4dor&3XQ", 8, StrengthTier::Strong, StrengthColor::Green)]
#[case("Gr3en!Lf", 7, StrengthTier::Strong, StrengthColor::Green)]
#[case("soilph74", 5, StrengthTier::Medium, StrengthColor::Yellow)]
#[case("harvests", 4, StrengthTier::Medium, StrengthColor::Yellow)]
#[case("aaaBBB111", 5, StrengthTier::Medium, StrengthColor::Yellow)]
#[case("MyPASSWORD123", 6, StrengthTier::Strong, StrengthColor::Green)]
#[case("a", 3, StrengthTier::Weak, StrengthColor::Red)]
#[case("", 2, StrengthTier::Weak, StrengthColor::Red)]
fn scores_and_tiers(
    #[case] password: &str,
    #[case] score: u8,
    #[case] tier: StrengthTier,
    #[case] color: StrengthColor,
) {
    let report = check_password_strength(password);

    assert_eq!(report.score, score, "score for {password:?}");
    assert_eq!(report.strength, tier);
    assert_eq!(report.color, color);
}

#[rstest]
#[case("aaaBBB111", "Avoid repeated characters")]
#[case("MyPASSWORD123", "Avoid common patterns")]
#[case("qwerty", "Avoid common patterns")]
#[case("ADMINISTRATOR", "Lowercase letters")]
#[case("short", "At least 8 characters")]
#[case("nocapitals1!", "Uppercase letters")]
#[case("NoDigitsHere!", "Numbers")]
#[case("NoSymbols42x", "Special characters")]
fn failed_checks_produce_feedback(#[case] password: &str, #[case] message: &str) {
    let report = check_password_strength(password);
    assert!(
        report.feedback.iter().any(|item| item == message),
        "{message:?} missing from {:?}",
        report.feedback
    );
}

#[test]
fn feedback_follows_rubric_order() {
    let report = check_password_strength("AAA");

    assert_eq!(
        report.feedback,
        vec![
            "At least 8 characters",
            "Lowercase letters",
            "Numbers",
            "Special characters",
            "Avoid repeated characters",
        ]
    );
}

#[test]
fn clean_password_gets_sentinel_only() {
    let report = check_password_strength("Field#Plot7Kale");
    assert_eq!(report.feedback, vec![LOOKS_GOOD]);
}
