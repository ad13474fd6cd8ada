use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FadeError::dimension_mismatch(Size::new(10, 10), Size::new(20, 20))
            .to_string()
            .contains("dimension mismatch:")
    );
    assert!(
        FadeError::invalid_parameter("x")
            .to_string()
            .contains("invalid parameter:")
    );
    assert!(FadeError::config("x").to_string().contains("config error:"));
}

#[test]
fn dimension_mismatch_names_both_sizes() {
    let msg = FadeError::dimension_mismatch(Size::new(10, 10), Size::new(20, 30)).to_string();
    assert!(msg.contains("10x10"));
    assert!(msg.contains("20x30"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FadeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
