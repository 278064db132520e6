use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{ProyektorError, Result};

/// Rejects path segments that could escape the data directories.
///
/// `field` names the segment in the error message.
pub fn validate_segment<'a>(segment: &'a str, field: &str) -> Result<&'a str> {
    let invalid = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains(['/', '\\', '\0']);
    if invalid {
        return Err(ProyektorError::validation(format!(
            "Nombre de {} no válido: '{}'.",
            field, segment
        )));
    }
    Ok(segment)
}

/// Parses a chapter or verse number. Zero is not a valid position.
pub fn parse_positive(value: &str, field: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ProyektorError::validation(format!(
            "El formato del {} es incorrecto: '{}'.",
            field, value
        ))),
    }
}

/// Parses an LRCLIB track id. Zero is not a valid id.
pub fn parse_track_id(value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ProyektorError::validation(format!(
            "El formato del id es incorrecto: '{}'.",
            value
        ))),
    }
}

/// Parses the last path segment of a verse lookup, `"5"` or `"5-10"`.
///
/// Returns the start verse and the optional end verse as given. The end must
/// not come before the start.
pub fn parse_verse_spec(spec: &str) -> Result<(u32, Option<String>)> {
    match spec.split_once('-') {
        None => Ok((parse_positive(spec, "verso")?, None)),
        Some((start, end)) => {
            let start = parse_positive(start, "verso")?;
            let end_number = parse_positive(end, "rango")?;
            if end_number < start {
                return Err(ProyektorError::validation(format!(
                    "El rango {}-{} es incorrecto.",
                    start, end_number
                )));
            }
            Ok((start, Some(end.trim().to_string())))
        }
    }
}

/// Slug of an upstream version name: lowercased, spaces removed.
pub fn version_slug(name: &str) -> String {
    name.replace(' ', "").to_lowercase()
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
