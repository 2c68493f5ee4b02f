//! Species lifespan table loaded from configuration.

use std::collections::HashMap;

/// Species name to lifespan in in-game years.
///
/// Lookups ignore case and surrounding whitespace so that `/calculate-age` accepts
/// whatever capitalisation the member typed.
#[derive(Debug, Clone, Default)]
pub struct Lifespans {
    by_species: HashMap<String, (String, u32)>,
}

impl Lifespans {
    /// Parses the JSON object `{ "<species>": <years>, ... }`.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let table: HashMap<String, u32> = serde_json::from_str(raw)?;
        Ok(Self::from_iter(table))
    }

    /// Looks up a species, returning its canonical name and lifespan.
    pub fn get(&self, species: &str) -> Option<(&str, u32)> {
        self.by_species
            .get(&species.trim().to_lowercase())
            .map(|(name, years)| (name.as_str(), *years))
    }

    pub fn len(&self) -> usize {
        self.by_species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_species.is_empty()
    }

    /// Canonical species names starting with `prefix` (case-insensitive), sorted.
    pub fn species_starting_with(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.trim().to_lowercase();
        let mut names: Vec<&str> = self
            .by_species
            .iter()
            .filter(|(key, _)| key.starts_with(&prefix))
            .map(|(_, (name, _))| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<(String, u32)> for Lifespans {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let by_species = iter
            .into_iter()
            .map(|(name, years)| (name.trim().to_lowercase(), (name, years)))
            .collect();
        Self { by_species }
    }
}
