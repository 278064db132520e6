use proyektor::ProyektorError;

#[test]
fn test_variants_map_to_status_codes() {
    assert_eq!(ProyektorError::validation("bad").status_code(), 400);
    assert_eq!(ProyektorError::not_found("missing").status_code(), 404);
    assert_eq!(ProyektorError::config("broken").status_code(), 500);
    assert_eq!(
        ProyektorError::Upstream {
            status: 503,
            message: "down".to_string()
        }
        .status_code(),
        500
    );
    assert_eq!(
        ProyektorError::UnexpectedFormat("shape".to_string()).status_code(),
        500
    );
}

#[test]
fn test_validation_and_not_found_display_their_message_verbatim() {
    assert_eq!(
        ProyektorError::validation("Categoría no válida.").to_string(),
        "Categoría no válida."
    );
    assert_eq!(
        ProyektorError::not_found("Canción no encontrada.").to_string(),
        "Canción no encontrada."
    );
}
