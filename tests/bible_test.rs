use proyektor::ProyektorError;
use proyektor::bible::PassageRequest;

#[test]
fn test_parse_point_and_range_requests() {
    let point = PassageRequest::parse("rv1960", "genesis", "1", "1").unwrap();
    assert_eq!(point.range, None);
    assert_eq!(point.last_verse(), 1);

    let range = PassageRequest::parse("rv1960", "juan", "3", "16-18").unwrap();
    assert_eq!(range.verse, 16);
    assert_eq!(range.range.as_deref(), Some("18"));
    assert_eq!(range.last_verse(), 18);

    let wide = PassageRequest::parse("rv1960", "genesis", "1", "1-4294967295").unwrap();
    assert_eq!(wide.last_verse(), u32::MAX);
}

#[test]
fn test_parse_rejects_malformed_segments() {
    for (chapter, verse) in [
        ("uno", "1"),
        ("0", "1"),
        ("1", "x"),
        ("1", "5-2"),
        ("1", "5-"),
        ("1", "1-4294967296"),
    ] {
        assert!(
            matches!(
                PassageRequest::parse("rv1960", "genesis", chapter, verse),
                Err(ProyektorError::Validation(_))
            ),
            "{}/{} should be rejected",
            chapter,
            verse
        );
    }
    assert!(matches!(
        PassageRequest::parse("..", "genesis", "1", "1"),
        Err(ProyektorError::Validation(_))
    ));
}
