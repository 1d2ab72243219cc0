use chrono::{Datelike, Days, Locale, NaiveDate};

/// Column headers for [`month_grid`], which starts its weeks on sunday
pub const WEEKDAY_LABELS: [&str; 7] = ["zo", "ma", "di", "wo", "do", "vr", "za"];

/// The highlighted day on the calendar card pulses once, this long after it shows up
pub const CALENDAR_PULSE_DELAY_MS: u32 = 500;
pub const CALENDAR_PULSE_MS: u32 = 400;

/// `12 · 06 · 2026`, as shown in the hero
#[must_use]
pub fn hero_date_stamp(date: NaiveDate) -> String {
	date.format("%d · %m · %Y").to_string()
}

/// `12 juni 2026`
#[must_use]
pub fn dutch_long_date(date: NaiveDate) -> String {
	date.format_localized("%-d %B %Y", Locale::nl_NL).to_string()
}

/// `JUNI 2026`
#[must_use]
pub fn month_header(date: NaiveDate) -> String {
	date.format_localized("%B %Y", Locale::nl_NL)
		.to_string()
		.to_uppercase()
}

/// The cells of the month `date` falls in, laid out in sunday-first weeks: a `None` for every
/// weekday before the 1st, then each day of the month in order.
#[must_use]
pub fn month_grid(date: NaiveDate) -> Vec<Option<u32>> {
	let first = date - Days::new(u64::from(date.day0()));
	let leading = first.weekday().num_days_from_sunday() as usize;

	std::iter::repeat(None)
		.take(leading)
		.chain(first.iter_days()
			.take_while(|day| day.month() == first.month())
			.map(|day| Some(day.day()))
		)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::calendar::SAVE_THE_DATE;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap()
	}

	#[test]
	fn hero_stamp() {
		assert_eq!(hero_date_stamp(SAVE_THE_DATE), "12 · 06 · 2026");
		assert_eq!(hero_date_stamp(date(2027, 1, 3)), "03 · 01 · 2027");
	}

	#[test]
	fn long_date() {
		assert_eq!(dutch_long_date(SAVE_THE_DATE), "12 juni 2026");
		assert_eq!(dutch_long_date(date(2026, 12, 1)), "1 december 2026");
		assert_eq!(dutch_long_date(date(2026, 3, 9)), "9 maart 2026");
	}

	#[test]
	fn header_is_shouted() {
		assert_eq!(month_header(SAVE_THE_DATE), "JUNI 2026");
		assert_eq!(month_header(date(2027, 10, 31)), "OKTOBER 2027");
	}

	#[test]
	fn june_starts_on_a_monday() {
		let grid = month_grid(SAVE_THE_DATE);

		assert_eq!(grid[0], None);
		assert_eq!(grid[1], Some(1));
		assert_eq!(grid.len(), 1 + 30);
		assert_eq!(grid.iter().flatten().count(), 30);
		// under "vr"
		let twelfth = grid.iter().position(|&d| d == Some(12)).unwrap();
		assert_eq!(twelfth, 12);
		assert_eq!(WEEKDAY_LABELS[twelfth % 7], "vr");
	}

	#[test]
	fn grid_doesnt_care_which_day_it_gets() {
		assert_eq!(month_grid(date(2026, 6, 1)), month_grid(date(2026, 6, 30)));
	}

	#[test]
	fn no_padding_when_the_month_starts_on_sunday() {
		let grid = month_grid(date(2026, 2, 14));
		assert_eq!(grid.first(), Some(&Some(1)));
		assert_eq!(grid.last(), Some(&Some(28)));
		assert_eq!(grid.len(), 28);
	}

	#[test]
	fn full_padding_when_the_month_starts_on_saturday() {
		let grid = month_grid(date(2026, 8, 20));
		assert!(grid[..6].iter().all(Option::is_none));
		assert_eq!(grid[6], Some(1));
		assert_eq!(grid.last(), Some(&Some(31)));
	}

	#[test]
	fn leap_february() {
		assert_eq!(month_grid(date(2028, 2, 1)).iter().flatten().count(), 29);
	}
}
