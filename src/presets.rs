use std::{collections::HashMap, fs, path::Path};

use tracing::debug;

use crate::{cutoff::Cutoff, Error, Result};

pub const HEADER: &str = "name,ymax,ymin,K,n,equation";

/// Named response curves, read from a CSV table with the columns in [HEADER].
/// The `equation` column is informative only.
#[derive(Clone, Debug, Default)]
pub struct PresetTable {
    presets: HashMap<String, Cutoff>,
}

impl PresetTable {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&contents)?;
        debug!(path = %path.display(), presets = table.len(), "loaded presets");
        Ok(table)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let mut lines = contents.lines().enumerate();
        match lines.next() {
            Some((_, header)) if header.trim_end() == HEADER => (),
            Some((_, header)) => return Err(Error::PresetHeader(header.to_string())),
            None => return Err(Error::PresetHeader(String::new())),
        }

        let mut table = Self::default();
        for (index, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let line_number = index + 1;
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 6 {
                return Err(Error::PresetRow {
                    line: line_number,
                    reason: format!("expected 6 fields, found {}", fields.len()),
                });
            }
            let number = |column: usize| -> Result<f64> {
                let field = fields[column].trim();
                field.parse().map_err(|_| Error::PresetRow {
                    line: line_number,
                    reason: format!("'{field}' is not a number"),
                })
            };
            let cutoff = Cutoff::new(number(1)?, number(2)?, number(3)?, number(4)?);
            table.insert(fields[0].trim(), cutoff);
        }
        Ok(table)
    }

    pub fn insert(&mut self, name: impl Into<String>, cutoff: Cutoff) {
        self.presets.insert(name.into(), cutoff);
    }

    pub fn get(&self, name: &str) -> Result<Cutoff> {
        self.presets
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownPreset(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
