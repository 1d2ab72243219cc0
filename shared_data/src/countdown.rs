/// Wall-clock instant the countdown runs to. Intentionally has no offset, so the browser reads it
/// as the visitor's local time.
pub const COUNTDOWN_TARGET: &str = "2026-06-12T12:00:00";
/// How often the countdown re-samples the clock
pub const COUNTDOWN_TICK_MS: u32 = 60_000;

const MS_PER_MINUTE: i64 = 60_000;
const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
	pub days: u32,
	pub hours: u8,
	pub minutes: u8,
}

impl Countdown {
	/// Whole days/hours/minutes left until `target_ms`. Both arguments are unix millis; once
	/// the target has passed, everything stays at zero.
	#[must_use]
	pub fn remaining(target_ms: i64, now_ms: i64) -> Self {
		let total_minutes = target_ms.saturating_sub(now_ms).max(0) / MS_PER_MINUTE;

		Self {
			days: u32::try_from(total_minutes / MINUTES_PER_DAY).unwrap_or(u32::MAX),
			// both of these are bounded by the modulo, so the casts can't truncate
			hours: ((total_minutes % MINUTES_PER_DAY) / 60) as u8,
			minutes: (total_minutes % 60) as u8,
		}
	}

	#[must_use]
	pub fn is_over(&self) -> bool {
		*self == Self::default()
	}

	/// `(value, label)` for each card, in display order. Only days go unpadded.
	#[must_use]
	pub fn cards(&self) -> [(String, &'static str); 3] {
		[
			(self.days.to_string(), "Dagen"),
			(format!("{:02}", self.hours), "Uren"),
			(format!("{:02}", self.minutes), "Minuten"),
		]
	}
}
