use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::column_index;
use crate::data::normalize::TypeNormalizer;
use crate::error::{Result, TeamError};

pub const DEFAULT_CREATURES_PATH: &str = "pokemon.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    pub name: String,
    pub type_1: String,
    pub type_2: Option<String>,
}

impl Creature {
    pub fn new(name: &str, type_1: &str, type_2: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            type_1: type_1.to_string(),
            type_2: type_2.map(str::to_string),
        }
    }

    /// `type_1`, then `type_2` when present.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.type_1.as_str()).chain(self.type_2.as_deref())
    }
}

/// Creatures available for team building, in source order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    creatures: Vec<Creature>,
    by_name: HashMap<String, usize>,
}

impl Roster {
    pub fn from_creatures(creatures: Vec<Creature>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(creatures.len());
        for (index, creature) in creatures.iter().enumerate() {
            if by_name.insert(creature.name.clone(), index).is_some() {
                return Err(TeamError::DuplicateKey {
                    source_name: "roster".to_string(),
                    key: creature.name.clone(),
                });
            }
        }
        Ok(Self { creatures, by_name })
    }

    /// Parse a creature sheet with at least `name,type_1,type_2` columns.
    /// Other columns are ignored; a blank `type_2` means single-typed.
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
        let name_col = column_index(&headers, "name", source_name)?;
        let type_1_col = column_index(&headers, "type_1", source_name)?;
        let type_2_col = column_index(&headers, "type_2", source_name)?;

        let mut creatures = Vec::new();
        let mut by_name = HashMap::new();
        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(|e| TeamError::csv(source_name, e))?;
            let row = i + 1;
            let name = record.get(name_col).unwrap_or("").trim();
            if name.is_empty() {
                return Err(TeamError::InvalidRow {
                    source_name: source_name.to_string(),
                    row,
                    message: "name is blank".to_string(),
                });
            }
            let type_1 = normalizer.normalize(record.get(type_1_col).unwrap_or(""));
            if type_1.is_empty() {
                return Err(TeamError::InvalidRow {
                    source_name: source_name.to_string(),
                    row,
                    message: format!("'{name}' has a blank type_1"),
                });
            }
            let type_2 = Some(normalizer.normalize(record.get(type_2_col).unwrap_or("")))
                .filter(|value| !value.is_empty());

            if by_name.insert(name.to_string(), creatures.len()).is_some() {
                return Err(TeamError::DuplicateKey {
                    source_name: source_name.to_string(),
                    key: name.to_string(),
                });
            }
            creatures.push(Creature {
                name: name.to_string(),
                type_1,
                type_2,
            });
        }

        Ok(Self { creatures, by_name })
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    pub fn get(&self, index: usize) -> Option<&Creature> {
        self.creatures.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&Creature> {
        self.by_name.get(name).map(|&index| &self.creatures[index])
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn names(&self, team: &[usize]) -> Vec<String> {
        team.iter()
            .filter_map(|&index| self.creatures.get(index))
            .map(|creature| creature.name.clone())
            .collect()
    }
}

pub fn load_roster(path: impl AsRef<Path>, normalizer: &TypeNormalizer) -> Result<Roster> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| TeamError::io(&source_name, e))?;
    let roster = Roster::from_reader(file, &source_name, normalizer)?;
    tracing::debug!(path = %source_name, creatures = roster.len(), "loaded roster");
    Ok(roster)
}
