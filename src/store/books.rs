use std::collections::HashMap;

use crate::{
    error::{ProyektorError, Result},
    types::BookEntry,
};

/// Canonical book names in Bible order. Position + 1 is the book number.
pub const CANONICAL_BOOKS: [&str; 66] = [
    "genesis",
    "exodo",
    "levitico",
    "numeros",
    "deuteronomio",
    "josue",
    "jueces",
    "rut",
    "1-samuel",
    "2-samuel",
    "1-reyes",
    "2-reyes",
    "1-cronicas",
    "2-cronicas",
    "esdras",
    "nehemias",
    "ester",
    "job",
    "salmos",
    "proverbios",
    "eclesiastes",
    "cantares",
    "isaias",
    "jeremias",
    "lamentaciones",
    "ezequiel",
    "daniel",
    "oseas",
    "joel",
    "amos",
    "abdias",
    "jonas",
    "miqueas",
    "nahum",
    "habacuc",
    "sofonias",
    "hageo",
    "zacarias",
    "malaquias",
    "mateo",
    "marcos",
    "lucas",
    "juan",
    "hechos",
    "romanos",
    "1-corintios",
    "2-corintios",
    "galatas",
    "efesios",
    "filipenses",
    "colosenses",
    "1-tesalonicenses",
    "2-tesalonicenses",
    "1-timoteo",
    "2-timoteo",
    "tito",
    "filemon",
    "hebreos",
    "santiago",
    "1-pedro",
    "2-pedro",
    "1-juan",
    "2-juan",
    "3-juan",
    "judas",
    "apocalipsis",
];

/// Fixed name to number directory for the 66 canonical books.
///
/// Built once at start-up and shared read-only.
#[derive(Debug, Clone)]
pub struct BookDirectory {
    by_name: HashMap<&'static str, u8>,
}

impl Default for BookDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl BookDirectory {
    pub fn new() -> Self {
        let by_name = CANONICAL_BOOKS
            .iter()
            .enumerate()
            .map(|(idx, name)| (*name, idx as u8 + 1))
            .collect();
        Self { by_name }
    }

    /// Looks up a book number by name, ignoring case.
    ///
    /// No trimming and no partial matching: `" genesis"` and `"gen"` are both
    /// unknown.
    pub fn resolve(&self, name: &str) -> Result<u8> {
        self.by_name
            .get(name.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| ProyektorError::not_found("Libro no válido."))
    }

    pub fn name_of(&self, number: u8) -> Option<&'static str> {
        CANONICAL_BOOKS.get(usize::from(number).checked_sub(1)?).copied()
    }

    pub fn entries(&self) -> Vec<BookEntry> {
        CANONICAL_BOOKS
            .iter()
            .enumerate()
            .map(|(idx, name)| BookEntry {
                number: idx as u8 + 1,
                name: name.to_string(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
