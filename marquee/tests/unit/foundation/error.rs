use super::*;

#[test]
fn display_includes_category() {
    assert_eq!(
        MarqueeError::validation("x").to_string(),
        "validation error: x"
    );
    assert_eq!(
        MarqueeError::scheduling("x").to_string(),
        "scheduling error: x"
    );
    assert_eq!(
        MarqueeError::evaluation("x").to_string(),
        "evaluation error: x"
    );
    assert_eq!(MarqueeError::serde("x").to_string(), "serialization error: x");
}

#[test]
fn anyhow_errors_pass_through() {
    let err: MarqueeError = anyhow::anyhow!("boom").into();
    assert_eq!(err.to_string(), "boom");
}
