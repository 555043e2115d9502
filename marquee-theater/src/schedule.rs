use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use std::time::Duration;

use marquee_catalog::Movie;
use marquee_domain::Showing;

use crate::{DateProvider, TheaterError};

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

fn slot(date: NaiveDate, hour: u32, minute: u32) -> Result<DateTime<Utc>, TheaterError> {
    date.and_hms_opt(hour, minute, 0)
        .map(|dt| dt.and_utc())
        .ok_or_else(|| TheaterError::Schedule(format!("invalid slot time {hour}:{minute:02}")))
}

/// Build the fixed daily schedule for the provider's current date: three
/// movies rotating across nine slots, sequences 1 through 9 in ascending
/// start-time order.
pub fn build_daily_schedule(
    provider: &dyn DateProvider,
) -> Result<Vec<Showing>, TheaterError> {
    let today = provider.current_date();

    let spider_man = Arc::new(Movie::new(
        "Spider-Man: No Way Home",
        minutes(90),
        12.5,
        1,
    )?);
    let turning_red = Arc::new(Movie::new("Turning Red", minutes(85), 11.0, 0)?);
    let the_batman = Arc::new(Movie::new("The Batman", minutes(95), 9.0, 0)?);

    let slots: [(Arc<Movie>, u32, u32); 9] = [
        (Arc::clone(&turning_red), 9, 0),
        (Arc::clone(&spider_man), 11, 0),
        (Arc::clone(&the_batman), 12, 50),
        (Arc::clone(&turning_red), 14, 30),
        (Arc::clone(&spider_man), 16, 10),
        (Arc::clone(&the_batman), 17, 50),
        (Arc::clone(&turning_red), 19, 30),
        (Arc::clone(&spider_man), 21, 10),
        (Arc::clone(&the_batman), 23, 0),
    ];

    let mut schedule = Vec::with_capacity(slots.len());
    for (sequence, (movie, hour, minute)) in slots.into_iter().enumerate() {
        let start_time = slot(today, hour, minute)?;
        schedule.push(Showing::new(movie, sequence as u32 + 1, start_time)?);
    }

    tracing::debug!(date = %today, showings = schedule.len(), "built daily schedule");
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedDateProvider;
    use chrono::Timelike;

    fn provider() -> FixedDateProvider {
        FixedDateProvider::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
    }

    #[test]
    fn test_schedule_has_nine_showings() {
        let schedule = build_daily_schedule(&provider()).unwrap();
        assert_eq!(schedule.len(), 9);
    }

    #[test]
    fn test_sequences_dense_and_ascending() {
        let schedule = build_daily_schedule(&provider()).unwrap();
        for (index, showing) in schedule.iter().enumerate() {
            assert_eq!(showing.sequence_of_day(), index as u32 + 1);
        }
        for pair in schedule.windows(2) {
            assert!(pair[0].start_time() < pair[1].start_time());
        }
    }

    #[test]
    fn test_showings_on_provider_date() {
        let schedule = build_daily_schedule(&provider()).unwrap();
        for showing in &schedule {
            assert_eq!(
                showing.start_time().date_naive(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
            );
        }
    }

    #[test]
    fn test_movie_rotation() {
        let schedule = build_daily_schedule(&provider()).unwrap();
        let titles: Vec<&str> = schedule.iter().map(|s| s.movie().title()).collect();
        assert_eq!(
            titles,
            vec![
                "Turning Red",
                "Spider-Man: No Way Home",
                "The Batman",
                "Turning Red",
                "Spider-Man: No Way Home",
                "The Batman",
                "Turning Red",
                "Spider-Man: No Way Home",
                "The Batman",
            ]
        );
        // Only the Spider-Man showings are special
        for showing in &schedule {
            let expect_special = showing.movie().title().starts_with("Spider-Man");
            assert_eq!(showing.movie().is_special(), expect_special);
        }
    }

    #[test]
    fn test_first_and_last_slot_times() {
        let schedule = build_daily_schedule(&provider()).unwrap();
        let first = schedule[0].start_time();
        assert_eq!((first.hour(), first.minute()), (9, 0));
        let last = schedule[8].start_time();
        assert_eq!((last.hour(), last.minute()), (23, 0));
    }
}
