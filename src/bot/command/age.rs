//! `/calculate-age`: in-game age of a dinosaur from its real-world birth date.

use chrono::Utc;
use serenity::all::{
    AutocompleteChoice, CommandInteraction, CommandOptionType, Context, CreateAutocompleteResponse,
    CreateCommand, CreateCommandOption, CreateEmbed, EditInteractionResponse,
};

use crate::bot::command::{choice_name, options, EMBED_COLOUR, MAX_AUTOCOMPLETE_CHOICES};
use crate::bot::gateway::SerenityGateway;
use crate::bot::state::BotState;
use crate::error::AppError;
use crate::model::age::{AgeReport, SpeciesLifespan};
use crate::service::age::AgeService;
use crate::util::parse::{parse_date_parts, DATE_FORMAT};

pub const NAME: &str = "calculate-age";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Calculate your dinosaur's in-game age from its birth date")
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "day", "Day of birth")
                .required(true)
                .min_int_value(1)
                .max_int_value(31),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "month", "Month of birth")
                .required(true)
                .min_int_value(1)
                .max_int_value(12),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::Integer, "year", "Year of birth")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "species",
                "Species, to show how long it lives",
            )
            .set_autocomplete(true),
        )
}

pub async fn run(
    state: &BotState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<EditInteractionResponse, AppError> {
    let options = command.data.options();
    let birthdate = parse_date_parts(
        options::required_integer(&options, "day")?,
        options::required_integer(&options, "month")?,
        options::required_integer(&options, "year")?,
    )?;
    let species = options::string(&options, "species");

    let gateway = SerenityGateway::new(ctx.http.clone());
    let report = AgeService::new(
        &state.cache,
        &gateway,
        &state.lifespans,
        state.season_channel_id,
    )
    .calculate(birthdate, Utc::now().date_naive(), species)
    .await?;

    Ok(EditInteractionResponse::new().embed(age_embed(&report)))
}

/// Species names matching what the member typed so far.
pub fn autocomplete(state: &BotState, input: &str) -> CreateAutocompleteResponse {
    let choices = state
        .lifespans
        .species_starting_with(input)
        .into_iter()
        .take(MAX_AUTOCOMPLETE_CHOICES)
        .map(|species| AutocompleteChoice::new(choice_name(species), species))
        .collect();

    CreateAutocompleteResponse::new().set_choices(choices)
}

fn age_embed(report: &AgeReport) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Dino Age Calculator")
        .colour(EMBED_COLOUR)
        .field("Birth date", report.birthdate.format(DATE_FORMAT).to_string(), true)
        .field("Today", report.today.format(DATE_FORMAT).to_string(), true)
        .field("Birth season", report.season_label(), true)
        .field("Age", age_line(report), false)
        .field(
            "Shutdown days excluded",
            report.shutdown_offset_days.to_string(),
            true,
        );

    if let Some(line) = lifespan_line(report) {
        embed = embed.field("Lifespan", line, false);
    }

    embed
}

fn age_line(report: &AgeReport) -> String {
    format!(
        "**{}** week(s), which is **{}** in-game year(s)",
        report.age_in_weeks, report.age_in_years
    )
}

fn lifespan_line(report: &AgeReport) -> Option<String> {
    let line = match report.lifespan.as_ref()? {
        SpeciesLifespan::Known { species, years } => {
            let remaining = i64::from(*years) - report.age_in_years;
            if remaining > 0 {
                format!(
                    "{} lives {} in-game year(s), about {} left",
                    species, years, remaining
                )
            } else {
                format!(
                    "{} lives {} in-game year(s); this one has reached the end of its lifespan",
                    species, years
                )
            }
        }
        SpeciesLifespan::Unknown { species } => {
            format!("No lifespan data for `{}`", species)
        }
    };

    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report(age_in_years: i64, lifespan: Option<SpeciesLifespan>) -> AgeReport {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        AgeReport {
            age_in_weeks: age_in_years * 4,
            age_in_years,
            birth_season: None,
            shutdown_offset_days: 0,
            today: date,
            birthdate: date,
            lifespan,
        }
    }

    #[test]
    fn no_species_means_no_lifespan_line() {
        assert_eq!(lifespan_line(&report(3, None)), None);
    }

    #[test]
    fn known_species_reports_years_left() {
        let lifespan = SpeciesLifespan::Known {
            species: "Pteranodon".to_string(),
            years: 8,
        };

        assert_eq!(
            lifespan_line(&report(3, Some(lifespan))).unwrap(),
            "Pteranodon lives 8 in-game year(s), about 5 left"
        );
    }

    #[test]
    fn old_dinosaur_reached_end_of_lifespan() {
        let lifespan = SpeciesLifespan::Known {
            species: "Pteranodon".to_string(),
            years: 8,
        };

        assert!(lifespan_line(&report(9, Some(lifespan)))
            .unwrap()
            .contains("end of its lifespan"));
    }

    #[test]
    fn unknown_species_is_reported() {
        let lifespan = SpeciesLifespan::Unknown {
            species: "Dragon".to_string(),
        };

        assert_eq!(
            lifespan_line(&report(1, Some(lifespan))).unwrap(),
            "No lifespan data for `Dragon`"
        );
    }

    #[test]
    fn age_line_shows_weeks_and_years() {
        assert_eq!(
            age_line(&report(2, None)),
            "**8** week(s), which is **2** in-game year(s)"
        );
    }
}
