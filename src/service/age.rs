//! In-game age calculation.
//!
//! A dinosaur ages one in-game year every four real-world weeks, except while the server
//! is shut down. The pure functions here do the date arithmetic; `AgeService` adds the
//! cached shutdown windows, the best-effort birth season lookup and the species lifespan.

use chrono::{Days, NaiveDate};

use crate::bot::gateway::{ChatGateway, HistoryMessage};
use crate::error::AppError;
use crate::model::age::{AgeReport, Season, SpeciesLifespan, WEEKS_PER_IN_GAME_YEAR};
use crate::model::lifespan::Lifespans;
use crate::model::shutdown::ShutdownWindow;
use crate::service::cache::SnapshotCache;

/// Messages fetched around the birth date when looking for a season announcement.
const SEASON_HISTORY_LIMIT: u8 = 20;

/// Content after this marker is ignored; the server name contains "gondwa(na)" and
/// announcements often mention it next to unrelated words.
const SEASON_CUTOFF_MARKER: &str = "gondwa";

/// Checked in order; the first keyword found in a message decides its season.
const SEASON_KEYWORDS: [(&str, Season); 5] = [
    ("spring", Season::Spring),
    ("summer", Season::Summer),
    ("autumn", Season::Autumn),
    ("fall", Season::Autumn),
    ("winter", Season::Winter),
];

/// Days of shutdown that happened after the birthdate.
///
/// Only windows starting strictly after the birthdate count, and they count in full.
/// A window already running on the birthdate contributes nothing.
pub fn shutdown_offset_days(birthdate: NaiveDate, shutdowns: &[ShutdownWindow]) -> i64 {
    shutdowns
        .iter()
        .filter(|s| s.start_date > birthdate)
        .map(ShutdownWindow::duration_days)
        .sum()
}

/// Age in weeks and in-game years, net of shutdowns.
///
/// # Returns
/// - `Ok((weeks, years, offset_days))`
/// - `Err(AppError::BadRequest)` - Birthdate after today
pub fn calculate_age(
    birthdate: NaiveDate,
    today: NaiveDate,
    shutdowns: &[ShutdownWindow],
) -> Result<(i64, i64, i64), AppError> {
    if birthdate > today {
        return Err(AppError::BadRequest(
            "Birth date cannot be in the future!".to_string(),
        ));
    }

    let offset = shutdown_offset_days(birthdate, shutdowns);
    let adjusted = (today - birthdate).num_days() - offset;
    let weeks = adjusted.div_euclid(7);
    let years = weeks.div_euclid(WEEKS_PER_IN_GAME_YEAR);

    Ok((weeks, years, offset))
}

/// Season announced closest to (and not after) the birthdate.
///
/// Ties on distance keep the message seen first.
pub fn infer_season(birthdate: NaiveDate, history: &[HistoryMessage]) -> Option<Season> {
    let mut best: Option<(i64, Season)> = None;

    for message in history {
        let created = message.created_at.date_naive();
        if created > birthdate {
            continue;
        }

        let Some(season) = season_in(&message.content) else {
            continue;
        };

        let distance = (birthdate - created).num_days();
        if best.map_or(true, |(closest, _)| distance < closest) {
            best = Some((distance, season));
        }
    }

    best.map(|(_, season)| season)
}

fn season_in(content: &str) -> Option<Season> {
    let lowered = content.to_lowercase();
    let searched = match lowered.find(SEASON_CUTOFF_MARKER) {
        Some(cut) => &lowered[..cut],
        None => lowered.as_str(),
    };

    SEASON_KEYWORDS
        .iter()
        .find(|(keyword, _)| searched.contains(keyword))
        .map(|(_, season)| *season)
}

pub struct AgeService<'a> {
    cache: &'a SnapshotCache,
    gateway: &'a dyn ChatGateway,
    lifespans: &'a Lifespans,
    season_channel_id: u64,
}

impl<'a> AgeService<'a> {
    /// Creates a new AgeService instance.
    ///
    /// # Arguments
    /// - `cache` - Source of shutdown windows
    /// - `gateway` - Used to read the season announcement channel
    /// - `lifespans` - Species lifespan table
    /// - `season_channel_id` - Channel the season announcements are posted in
    pub fn new(
        cache: &'a SnapshotCache,
        gateway: &'a dyn ChatGateway,
        lifespans: &'a Lifespans,
        season_channel_id: u64,
    ) -> Self {
        Self {
            cache,
            gateway,
            lifespans,
            season_channel_id,
        }
    }

    /// Builds the full age report for a birthdate.
    ///
    /// The season lookup never fails the calculation; an unreachable channel or an empty
    /// history yields an unknown season.
    ///
    /// # Arguments
    /// - `birthdate` - Date the dinosaur was born
    /// - `today` - Current date (UTC)
    /// - `species` - Optional species to report the lifespan of
    ///
    /// # Returns
    /// - `Ok(AgeReport)` - Calculated report
    /// - `Err(AppError::BadRequest)` - Birthdate in the future
    pub async fn calculate(
        &self,
        birthdate: NaiveDate,
        today: NaiveDate,
        species: Option<&str>,
    ) -> Result<AgeReport, AppError> {
        let snapshot = self.cache.snapshot().await;
        let (age_in_weeks, age_in_years, shutdown_offset_days) =
            calculate_age(birthdate, today, &snapshot.shutdowns)?;

        let birth_season = self.birth_season(birthdate).await;

        let lifespan = species
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|species| match self.lifespans.get(species) {
                Some((name, years)) => SpeciesLifespan::Known {
                    species: name.to_string(),
                    years,
                },
                None => SpeciesLifespan::Unknown {
                    species: species.to_string(),
                },
            });

        Ok(AgeReport {
            age_in_weeks,
            age_in_years,
            birth_season,
            shutdown_offset_days,
            today,
            birthdate,
            lifespan,
        })
    }

    async fn birth_season(&self, birthdate: NaiveDate) -> Option<Season> {
        let end_of_day = birthdate
            .checked_add_days(Days::new(1))?
            .and_hms_opt(0, 0, 0)?
            .and_utc();

        match self
            .gateway
            .messages_around(self.season_channel_id, end_of_day, SEASON_HISTORY_LIMIT)
            .await
        {
            Ok(history) => infer_season(birthdate, &history),
            Err(e) => {
                tracing::warn!("Could not read season history for {}: {}", birthdate, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::gateway::fake::FakeGateway;
    use chrono::{TimeZone, Utc};
    use test_utils::{builder::TestBuilder, factory::shutdown::ShutdownFactory};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn window(id: i32, start: NaiveDate, end: NaiveDate) -> ShutdownWindow {
        ShutdownWindow {
            id,
            start_date: start,
            end_date: end,
            description: "Maintenance".to_string(),
        }
    }

    fn announcement(year: i32, month: u32, day: u32, content: &str) -> HistoryMessage {
        HistoryMessage {
            content: content.to_string(),
            created_at: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn subtracts_shutdowns_after_birth() {
        let shutdowns = [window(1, date(2024, 1, 10), date(2024, 1, 20))];

        let result = calculate_age(date(2024, 1, 1), date(2024, 2, 1), &shutdowns).unwrap();

        assert_eq!(result, (3, 0, 10));
    }

    #[test]
    fn ignores_windows_on_or_before_birth() {
        let shutdowns = [
            window(1, date(2023, 12, 1), date(2023, 12, 5)),
            window(2, date(2024, 1, 1), date(2024, 1, 8)),
            window(3, date(2023, 12, 28), date(2024, 1, 4)),
        ];

        assert_eq!(shutdown_offset_days(date(2024, 1, 1), &shutdowns), 0);
    }

    #[test]
    fn sums_every_later_window() {
        let shutdowns = [
            window(1, date(2024, 2, 1), date(2024, 2, 3)),
            window(2, date(2024, 3, 1), date(2024, 3, 8)),
        ];

        assert_eq!(shutdown_offset_days(date(2024, 1, 1), &shutdowns), 9);
    }

    #[test]
    fn counts_in_game_years() {
        let (weeks, years, _) = calculate_age(date(2024, 1, 1), date(2024, 3, 1), &[]).unwrap();

        assert_eq!(weeks, 8);
        assert_eq!(years, 2);
    }

    #[test]
    fn born_today_is_zero() {
        let today = date(2024, 5, 5);

        assert_eq!(calculate_age(today, today, &[]).unwrap(), (0, 0, 0));
    }

    #[test]
    fn rejects_future_birthdate() {
        let result = calculate_age(date(2024, 2, 2), date(2024, 2, 1), &[]);

        assert!(
            matches!(result, Err(AppError::BadRequest(msg)) if msg == "Birth date cannot be in the future!")
        );
    }

    #[test]
    fn floors_negative_adjusted_age() {
        // Offset larger than elapsed time when a future window was entered early.
        let shutdowns = [window(1, date(2024, 1, 2), date(2024, 1, 20))];

        let (weeks, years, offset) =
            calculate_age(date(2024, 1, 1), date(2024, 1, 5), &shutdowns).unwrap();

        assert_eq!(offset, 18);
        assert_eq!(weeks, -2);
        assert_eq!(years, -1);
    }

    #[test]
    fn infers_closest_season_before_birth() {
        let history = [
            announcement(2024, 1, 1, "Winter has arrived"),
            announcement(2024, 1, 8, "Spring is here!"),
            announcement(2024, 1, 12, "Summer begins"),
        ];

        assert_eq!(infer_season(date(2024, 1, 10), &history), Some(Season::Spring));
    }

    #[test]
    fn birth_day_announcement_counts() {
        let history = [announcement(2024, 1, 10, "Autumn starts now")];

        assert_eq!(infer_season(date(2024, 1, 10), &history), Some(Season::Autumn));
    }

    #[test]
    fn fall_maps_to_autumn() {
        let history = [announcement(2024, 1, 9, "Leaves fall, season change")];

        assert_eq!(infer_season(date(2024, 1, 10), &history), Some(Season::Autumn));
    }

    #[test]
    fn text_after_server_name_is_ignored() {
        let history = [announcement(2024, 1, 9, "Welcome to Gondwa Summer event")];

        assert_eq!(infer_season(date(2024, 1, 10), &history), None);
    }

    #[test]
    fn first_keyword_in_table_order_wins() {
        let history = [announcement(2024, 1, 9, "Winter ends, spring begins")];

        assert_eq!(infer_season(date(2024, 1, 10), &history), Some(Season::Spring));
    }

    #[test]
    fn ties_keep_first_message() {
        let history = [
            announcement(2024, 1, 9, "summer"),
            announcement(2024, 1, 9, "winter"),
        ];

        assert_eq!(infer_season(date(2024, 1, 10), &history), Some(Season::Summer));
    }

    #[tokio::test]
    async fn report_combines_cache_history_and_species() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        ShutdownFactory::new(db)
            .start_date(date(2024, 1, 10))
            .end_date(date(2024, 1, 20))
            .build()
            .await?;
        let cache = SnapshotCache::new(db.clone());
        cache.refresh().await?;
        let gateway = FakeGateway::new().with_history(vec![announcement(2023, 12, 30, "Winter")]);
        let lifespans = Lifespans::from_iter([("Tyrannosaurus".to_string(), 12)]);

        let report = AgeService::new(&cache, &gateway, &lifespans, 1)
            .calculate(date(2024, 1, 1), date(2024, 2, 1), Some("tyrannosaurus"))
            .await?;

        assert_eq!(report.age_in_weeks, 3);
        assert_eq!(report.age_in_years, 0);
        assert_eq!(report.shutdown_offset_days, 10);
        assert_eq!(report.birth_season, Some(Season::Winter));
        assert_eq!(
            report.lifespan,
            Some(SpeciesLifespan::Known {
                species: "Tyrannosaurus".to_string(),
                years: 12
            })
        );

        Ok(())
    }

    #[tokio::test]
    async fn unreadable_history_gives_unknown_season() -> Result<(), AppError> {
        let test = TestBuilder::new().with_cache_tables().build().await.unwrap();
        let cache = SnapshotCache::new(test.db.clone().unwrap());
        let gateway = FakeGateway::new().failing_history();
        let lifespans = Lifespans::default();

        let report = AgeService::new(&cache, &gateway, &lifespans, 1)
            .calculate(date(2024, 1, 1), date(2024, 1, 15), Some("Raptor"))
            .await?;

        assert_eq!(report.age_in_weeks, 2);
        assert_eq!(report.birth_season, None);
        assert_eq!(report.season_label(), "`Unknown`");
        assert_eq!(
            report.lifespan,
            Some(SpeciesLifespan::Unknown {
                species: "Raptor".to_string()
            })
        );

        Ok(())
    }
}
