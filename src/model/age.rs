//! Result types for the age calculator.

use chrono::NaiveDate;

/// Real-world weeks in one in-game year.
pub const WEEKS_PER_IN_GAME_YEAR: i64 = 4;

/// Server season a dinosaur was born in, as announced in chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }

    /// Discord emoji shortcode shown next to the season name.
    pub fn emoji(&self) -> &'static str {
        match self {
            Season::Spring => ":cherry_blossom:",
            Season::Summer => ":sun:",
            Season::Autumn => ":maple_leaf:",
            Season::Winter => ":snowflake:",
        }
    }
}

/// Lifespan of the species the member asked about.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeciesLifespan {
    Known { species: String, years: u32 },
    Unknown { species: String },
}

/// Outcome of an age calculation, ready for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeReport {
    pub age_in_weeks: i64,
    pub age_in_years: i64,
    /// `None` when no season could be inferred.
    pub birth_season: Option<Season>,
    pub shutdown_offset_days: i64,
    pub today: NaiveDate,
    pub birthdate: NaiveDate,
    pub lifespan: Option<SpeciesLifespan>,
}

impl AgeReport {
    pub fn season_label(&self) -> String {
        match self.birth_season {
            Some(season) => format!("`{}` {}", season.name(), season.emoji()),
            None => "`Unknown`".to_string(),
        }
    }
}
