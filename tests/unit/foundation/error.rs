use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VantageError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(VantageError::lookup("x").to_string().contains("lookup error:"));
    assert!(
        VantageError::timeline("x")
            .to_string()
            .contains("timeline error:")
    );
    assert!(
        VantageError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VantageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: VantageError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, VantageError::Serde(_)));
    assert!(!err.is_lookup());
    assert!(VantageError::lookup("hitbox 'a'").is_lookup());
}
