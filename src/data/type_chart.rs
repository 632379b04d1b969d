//! Type advantage index: each type and the types it is strong against.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::column_index;
use crate::data::normalize::TypeNormalizer;
use crate::error::{Result, TeamError};

pub const DEFAULT_TYPES_PATH: &str = "types.csv";
/// Placeholder the type sheet uses in an empty `super_k` slot.
pub const NO_ADVANTAGE_MARKER: &str = "--";
pub const ADVANTAGE_SLOTS: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct TypeAdvantageIndex {
    /// Type names in source order.
    types: Vec<String>,
    strong_against: HashMap<String, BTreeSet<String>>,
}

impl TypeAdvantageIndex {
    /// Build from `(type, slots)` pairs. Blank and `--` slots are dropped.
    pub fn from_entries<'a, I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, S)>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut index = Self::default();
        for (type_name, slots) in entries {
            index.insert("type chart", type_name.trim().to_string(), slots)?;
        }
        Ok(index)
    }

    /// Parse a type sheet with `type,super_1..super_5` columns.
    pub fn from_reader<R: Read>(
        reader: R,
        source_name: &str,
        normalizer: &TypeNormalizer,
    ) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader
            .headers()
            .map_err(|e| TeamError::csv(source_name, e))?
            .clone();
        let type_col = column_index(&headers, "type", source_name)?;
        let slot_cols = (1..=ADVANTAGE_SLOTS)
            .map(|slot| column_index(&headers, &format!("super_{slot}"), source_name))
            .collect::<Result<Vec<_>>>()?;

        let mut index = Self::default();
        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(|e| TeamError::csv(source_name, e))?;
            let type_name = normalizer.normalize(record.get(type_col).unwrap_or(""));
            if type_name.is_empty() {
                return Err(TeamError::InvalidRow {
                    source_name: source_name.to_string(),
                    row: i + 1,
                    message: "type is blank".to_string(),
                });
            }
            let slots: Vec<String> = slot_cols
                .iter()
                .map(|&col| normalizer.normalize(record.get(col).unwrap_or("")))
                .collect();
            index.insert(source_name, type_name, slots.iter().map(String::as_str))?;
        }
        Ok(index)
    }

    fn insert<'a>(
        &mut self,
        source_name: &str,
        type_name: String,
        slots: impl IntoIterator<Item = &'a str>,
    ) -> Result<()> {
        if self.strong_against.contains_key(&type_name) {
            return Err(TeamError::DuplicateKey {
                source_name: source_name.to_string(),
                key: type_name,
            });
        }
        let advantages = slots
            .into_iter()
            .map(str::trim)
            .filter(|slot| is_advantage(slot))
            .map(str::to_string)
            .collect();
        self.types.push(type_name.clone());
        self.strong_against.insert(type_name, advantages);
        Ok(())
    }

    /// Types `type_name` is strong against. Unknown types are a data error.
    pub fn advantages_of(&self, type_name: &str) -> Result<&BTreeSet<String>> {
        self.strong_against
            .get(type_name)
            .ok_or_else(|| TeamError::UnknownType {
                type_name: type_name.to_string(),
            })
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.strong_against.contains_key(type_name)
    }

    pub fn type_names(&self) -> &[String] {
        &self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn is_advantage(slot: &str) -> bool {
    !slot.is_empty() && slot != NO_ADVANTAGE_MARKER
}

pub fn load_type_chart(path: impl AsRef<Path>, normalizer: &TypeNormalizer) -> Result<TypeAdvantageIndex> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| TeamError::io(&source_name, e))?;
    let index = TypeAdvantageIndex::from_reader(file, &source_name, normalizer)?;
    tracing::debug!(path = %source_name, types = index.len(), "loaded type chart");
    Ok(index)
}
