//! Type-name normalization applied to every type field before lookup.
//!
//! Source sheets are not always consistent about type names (the creature
//! sheet spells "Fighting" as "Fight"), so every type string read from either
//! table passes through a [TypeNormalizer] first. Corrections are data: the
//! built-in table can be extended from `type_aliases.csv` without code changes.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::data::column_index;
use crate::error::{Result, TeamError};

pub const DEFAULT_TYPE_ALIASES_PATH: &str = "type_aliases.csv";

const BUILTIN_ALIASES: &[(&str, &str)] = &[("Fight", "Fighting")];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNormalizer {
    aliases: HashMap<String, String>,
}

impl Default for TypeNormalizer {
    fn default() -> Self {
        Self::from_pairs(BUILTIN_ALIASES.iter().copied())
    }
}

impl TypeNormalizer {
    /// A normalizer that only trims whitespace.
    pub fn identity() -> Self {
        Self {
            aliases: HashMap::new(),
        }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let aliases = pairs
            .into_iter()
            .map(|(alias, canonical)| (alias.trim().to_string(), canonical.trim().to_string()))
            .collect();
        Self { aliases }
    }

    pub fn with_alias(mut self, alias: &str, canonical: &str) -> Self {
        self.aliases
            .insert(alias.trim().to_string(), canonical.trim().to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        match self.aliases.get(trimmed) {
            Some(canonical) => canonical.clone(),
            None => trimmed.to_string(),
        }
    }

    /// Merge `alias,canonical` rows into this normalizer. Later rows win.
    pub fn extend_from_reader<R: Read>(&mut self, reader: R, source_name: &str) -> Result<()> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader
            .headers()
            .map_err(|e| TeamError::csv(source_name, e))?
            .clone();
        let alias_col = column_index(&headers, "alias", source_name)?;
        let canonical_col = column_index(&headers, "canonical", source_name)?;

        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(|e| TeamError::csv(source_name, e))?;
            let alias = record.get(alias_col).unwrap_or("").trim();
            let canonical = record.get(canonical_col).unwrap_or("").trim();
            if alias.is_empty() || canonical.is_empty() {
                return Err(TeamError::InvalidRow {
                    source_name: source_name.to_string(),
                    row: i + 1,
                    message: "alias and canonical must both be non-empty".to_string(),
                });
            }
            self.aliases.insert(alias.to_string(), canonical.to_string());
        }
        Ok(())
    }
}

/// Built-in aliases plus any found in `path`. A missing file is not an error.
pub fn load_type_normalizer(path: impl AsRef<Path>) -> Result<TypeNormalizer> {
    let path = path.as_ref();
    let mut normalizer = TypeNormalizer::default();
    if !path.exists() {
        return Ok(normalizer);
    }
    let source_name = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| TeamError::io(&source_name, e))?;
    normalizer.extend_from_reader(file, &source_name)?;
    tracing::debug!(path = %source_name, aliases = normalizer.len(), "loaded type aliases");
    Ok(normalizer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_corrects_fight() {
        let normalizer = TypeNormalizer::default();
        assert_eq!(normalizer.normalize("Fight"), "Fighting");
        assert_eq!(normalizer.normalize(" Fight "), "Fighting");
        assert_eq!(normalizer.normalize("Fighting"), "Fighting");
        assert_eq!(normalizer.normalize("Water"), "Water");
    }

    #[test]
    fn identity_only_trims() {
        let normalizer = TypeNormalizer::identity();
        assert!(normalizer.is_empty());
        assert_eq!(normalizer.normalize(" Fight"), "Fight");
        let normalizer = normalizer.with_alias("Psy", "Psychic");
        assert_eq!(normalizer.len(), 1);
        assert_eq!(normalizer.normalize("Psy"), "Psychic");
    }

    #[test]
    fn aliases_extend_from_csv() {
        let mut normalizer = TypeNormalizer::default();
        normalizer
            .extend_from_reader("alias,canonical\nElec,Electric\n".as_bytes(), "aliases")
            .expect("aliases should parse");
        assert_eq!(normalizer.normalize("Elec"), "Electric");
        assert_eq!(normalizer.normalize("Fight"), "Fighting");
    }

    #[test]
    fn alias_csv_requires_both_columns() {
        let err = TypeNormalizer::default()
            .extend_from_reader("alias\nElec\n".as_bytes(), "aliases")
            .unwrap_err();
        assert!(matches!(err, TeamError::MissingColumn { ref column, .. } if column == "canonical"));
    }

    #[test]
    fn missing_alias_file_falls_back_to_builtins() {
        let dir = tempfile::tempdir().expect("tempdir");
        let normalizer =
            load_type_normalizer(dir.path().join("absent.csv")).expect("missing file is fine");
        assert_eq!(normalizer, TypeNormalizer::default());
    }

    #[test]
    fn alias_file_on_disk_is_merged() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_TYPE_ALIASES_PATH);
        std::fs::write(&path, "alias,canonical\nPsy,Psychic\n").expect("write aliases");
        let normalizer = load_type_normalizer(&path).expect("aliases should load");
        assert_eq!(normalizer.len(), 2);
        assert_eq!(normalizer.normalize("Psy"), "Psychic");
        assert_eq!(normalizer.normalize("Fight"), "Fighting");
    }
}
