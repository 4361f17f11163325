use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(FingersumError::config("x").to_string().contains("config error:"));
    assert!(FingersumError::asset("x").to_string().contains("asset error:"));
    assert!(FingersumError::render("x").to_string().contains("render error:"));
    assert!(FingersumError::input("x").to_string().contains("input error:"));
    assert!(
        FingersumError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FingersumError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
