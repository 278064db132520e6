use std::{collections::BTreeMap, io::ErrorKind, path::Path};

use serde_json::Value;

use crate::error::{ProyektorError, Result};

pub const MAPPING_FILE: &str = "bibles.json";

/// Contents of the optional `bibles/bibles.json` mapping file.
pub type BookMapping = BTreeMap<String, Value>;

/// Loads the mapping file from `bibles_dir`.
///
/// Read on demand, never at start-up. A missing file or malformed JSON fails
/// only the call that asked for it, as a [`ProyektorError::Config`].
pub async fn load_book_mapping(bibles_dir: &Path) -> Result<BookMapping> {
    let path = bibles_dir.join(MAPPING_FILE);
    let content = async_fs::read_to_string(&path)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProyektorError::config(format!(
                "El archivo {} no existe. Por favor, verifica el path.",
                path.display()
            )),
            _ => ProyektorError::config(format!("No se pudo leer {}: {}", path.display(), e)),
        })?;

    serde_json::from_str(&content).map_err(|e| {
        ProyektorError::config(format!(
            "Error al decodificar el archivo JSON. Verifica su formato: {}",
            e
        ))
    })
}
