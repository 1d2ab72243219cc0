use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use icalendar::{Calendar, Component, EventLike};

use crate::platform::CalendarKind;

pub const SAVE_THE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 6, 12) {
	Some(date) => date,
	None => panic!("SAVE_THE_DATE isn't a real date"),
};
pub const EVENT_START_UTC: NaiveTime = match NaiveTime::from_hms_opt(10, 0, 0) {
	Some(time) => time,
	None => panic!("EVENT_START_UTC isn't a real time"),
};
pub const EVENT_END_UTC: NaiveTime = match NaiveTime::from_hms_opt(22, 0, 0) {
	Some(time) => time,
	None => panic!("EVENT_END_UTC isn't a real time"),
};

pub const EVENT_TITLE: &str = "Leonard & Thirza trouwen";
pub const EVENT_DESCRIPTION: &str = "We kunnen niet wachten om dit met jullie te vieren.";
pub const EVENT_LOCATION: &str = "Achterland 1a, 2964 LA Groot-Ammers, Nederland";

pub const ICS_FILE_NAME: &str = "leonard-thirza-wedding.ics";
pub const ICS_MIME: &str = "text/calendar";
const ICS_PRODUCT_ID: &str = "-//Save the Date//Wedding//EN";
const ICS_UID: &str = "wedding-leonard-thirza@domain.com";

const GOOGLE_TEMPLATE_URL: &str = "https://calendar.google.com/calendar/render";
const OUTLOOK_COMPOSE_URL: &str = "https://outlook.live.com/calendar/0/deeplink/compose";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarEvent {
	pub title: String,
	// both in UTC
	pub starts: NaiveDateTime,
	pub ends: NaiveDateTime,
	pub description: String,
	pub location: String,
}

/// What the browser should do to get the event into the visitor's calendar
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Export {
	OpenUrl(String),
	Download(CalendarFile),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarFile {
	pub file_name: &'static str,
	pub mime: &'static str,
	pub contents: String,
}

impl CalendarEvent {
	#[must_use]
	pub fn save_the_date() -> Self {
		Self {
			title: EVENT_TITLE.into(),
			starts: SAVE_THE_DATE.and_time(EVENT_START_UTC),
			ends: SAVE_THE_DATE.and_time(EVENT_END_UTC),
			description: EVENT_DESCRIPTION.into(),
			location: EVENT_LOCATION.into(),
		}
	}

	#[must_use]
	pub fn start_stamp(&self) -> String {
		utc_stamp(self.starts)
	}

	#[must_use]
	pub fn end_stamp(&self) -> String {
		utc_stamp(self.ends)
	}

	/// `generated_at` only ends up in the calendar file's DTSTAMP; the links don't need it.
	#[must_use]
	pub fn export(&self, kind: CalendarKind, generated_at: DateTime<Utc>) -> Export {
		match kind {
			CalendarKind::Google => Export::OpenUrl(self.google_url()),
			CalendarKind::Outlook => Export::OpenUrl(self.outlook_url()),
			CalendarKind::Ics => Export::Download(self.calendar_file(generated_at)),
		}
	}

	#[must_use]
	pub fn google_url(&self) -> String {
		format!(
			"{GOOGLE_TEMPLATE_URL}?action=TEMPLATE&text={}&dates={}/{}&details={}&location={}",
			urlencoding::encode(&self.title),
			self.start_stamp(),
			self.end_stamp(),
			urlencoding::encode(&self.description),
			urlencoding::encode(&self.location),
		)
	}

	/// Outlook wants ISO 8601 with separators, unlike google and the calendar file
	#[must_use]
	pub fn outlook_url(&self) -> String {
		const OUTLOOK_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

		format!(
			"{OUTLOOK_COMPOSE_URL}?subject={}&startdt={}&enddt={}&body={}&location={}",
			urlencoding::encode(&self.title),
			self.starts.format(OUTLOOK_FORMAT),
			self.ends.format(OUTLOOK_FORMAT),
			urlencoding::encode(&self.description),
			urlencoding::encode(&self.location),
		)
	}

	#[must_use]
	pub fn calendar_file(&self, generated_at: DateTime<Utc>) -> CalendarFile {
		CalendarFile {
			file_name: ICS_FILE_NAME,
			mime: ICS_MIME,
			contents: self.to_ics(generated_at),
		}
	}

	#[must_use]
	pub fn to_ics(&self, generated_at: DateTime<Utc>) -> String {
		let mut ics_event = icalendar::Event::new();
		ics_event.uid(ICS_UID);
		ics_event.add_property("DTSTAMP", utc_stamp(generated_at.naive_utc()));
		ics_event.add_property("DTSTART", self.start_stamp());
		ics_event.add_property("DTEND", self.end_stamp());
		ics_event.summary(&self.title);
		ics_event.description(&self.description);
		ics_event.location(&self.location);
		let ics_event = ics_event.done();

		let mut cal = Calendar::new();
		cal.push(ics_event);
		let cal = cal.done();

		tidy_ics(&cal.to_string())
	}
}

fn utc_stamp(time: NaiveDateTime) -> String {
	time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Swaps in our own PRODID, drops the CALSCALE line (GREGORIAN is the default anyway), and makes
/// sure every line ends in CRLF, the last one included.
fn tidy_ics(ics: &str) -> String {
	let mut out = String::with_capacity(ics.len());

	for line in ics.lines() {
		if line.starts_with("PRODID:") {
			out.push_str("PRODID:");
			out.push_str(ICS_PRODUCT_ID);
		} else if line == "CALSCALE:GREGORIAN" {
			continue;
		} else {
			out.push_str(line);
		}
		out.push_str("\r\n");
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn generated_at() -> DateTime<Utc> {
		DateTime::from_timestamp(1_760_000_000, 0).unwrap()
	}

	fn query_param(url: &str, key: &str) -> String {
		let query = url.split_once('?').unwrap().1;
		let raw = query.split('&')
			.find_map(|pair| pair.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
			.unwrap_or_else(|| panic!("{key} missing from {url}"));
		urlencoding::decode(raw).unwrap().into_owned()
	}

	#[test]
	fn stamps_are_exact() {
		let event = CalendarEvent::save_the_date();
		assert_eq!(event.start_stamp(), "20260612T100000Z");
		assert_eq!(event.end_stamp(), "20260612T220000Z");
	}

	#[test]
	fn google_link_round_trips_the_text() {
		let event = CalendarEvent::save_the_date();
		let Export::OpenUrl(url) = event.export(CalendarKind::Google, generated_at()) else {
			panic!("google should open a link");
		};

		assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE&"));
		assert_eq!(query_param(&url, "text"), EVENT_TITLE);
		assert_eq!(query_param(&url, "details"), EVENT_DESCRIPTION);
		assert_eq!(query_param(&url, "location"), EVENT_LOCATION);
		assert_eq!(query_param(&url, "dates"), "20260612T100000Z/20260612T220000Z");
		// an unencoded '&' in the title would have split the query
		assert!(!url.contains("Leonard & Thirza"));
	}

	#[test]
	fn outlook_link() {
		let event = CalendarEvent::save_the_date();
		let Export::OpenUrl(url) = event.export(CalendarKind::Outlook, generated_at()) else {
			panic!("outlook should open a link");
		};

		assert!(url.starts_with(OUTLOOK_COMPOSE_URL));
		assert_eq!(query_param(&url, "subject"), EVENT_TITLE);
		assert_eq!(query_param(&url, "body"), EVENT_DESCRIPTION);
		assert_eq!(query_param(&url, "location"), EVENT_LOCATION);
		assert_eq!(query_param(&url, "startdt"), "2026-06-12T10:00:00Z");
		assert_eq!(query_param(&url, "enddt"), "2026-06-12T22:00:00Z");
	}

	#[test]
	fn ics_has_one_event_with_everything_in_it() {
		let event = CalendarEvent::save_the_date();
		let Export::Download(file) = event.export(CalendarKind::Ics, generated_at()) else {
			panic!("ics should download a file");
		};

		assert_eq!(file.file_name, "leonard-thirza-wedding.ics");
		assert_eq!(file.mime, "text/calendar");

		let ics = &file.contents;
		assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
		assert!(ics.ends_with("END:VEVENT\r\nEND:VCALENDAR\r\n"));
		assert_eq!(ics.matches("BEGIN:VEVENT").count(), 1);
		assert_eq!(ics.matches("END:VEVENT").count(), 1);

		let lines = ics.split("\r\n").collect::<Vec<_>>();
		assert!(lines.contains(&"VERSION:2.0"));
		assert!(lines.contains(&"PRODID:-//Save the Date//Wedding//EN"));
		assert!(!lines.contains(&"CALSCALE:GREGORIAN"));
		for field in ["PRODID:", "UID:", "DTSTAMP:", "DTSTART:", "DTEND:", "SUMMARY:", "DESCRIPTION:", "LOCATION:"] {
			assert_eq!(lines.iter().filter(|l| l.starts_with(field)).count(), 1, "{field}");
		}

		assert!(lines.contains(&"DTSTART:20260612T100000Z"));
		assert!(lines.contains(&"DTEND:20260612T220000Z"));
		assert!(lines.contains(&"DTSTAMP:20251009T085320Z"));
		assert!(lines.contains(&"UID:wedding-leonard-thirza@domain.com"));
		assert!(lines.contains(&"SUMMARY:Leonard & Thirza trouwen"));
		assert!(lines.contains(&"LOCATION:Achterland 1a\\, 2964 LA Groot-Ammers\\, Nederland"));
		// no bare LF anywhere
		assert_eq!(ics.matches('\n').count(), ics.matches("\r\n").count());
	}

	#[test]
	fn ics_is_deterministic_for_a_given_instant() {
		let event = CalendarEvent::save_the_date();
		assert_eq!(event.to_ics(generated_at()), event.to_ics(generated_at()));
	}

	// a physical line is at most 75 octets, not counting the space that marks a continuation
	fn within_line_limit(line: &str) -> bool {
		line.strip_prefix(' ').unwrap_or(line).len() <= 75
	}

	#[test]
	fn long_lines_get_folded() {
		let event = CalendarEvent {
			description: "heel ".repeat(40),
			..CalendarEvent::save_the_date()
		};
		let ics = event.to_ics(generated_at());

		assert!(ics.contains("\r\n "));
		assert!(ics.split("\r\n").all(within_line_limit));

		let unfolded = ics.replace("\r\n ", "");
		assert!(unfolded.contains(&format!("DESCRIPTION:{}\r\n", "heel ".repeat(40))));
	}

	#[test]
	fn folding_never_splits_a_char() {
		let event = CalendarEvent {
			title: "é".repeat(60),
			..CalendarEvent::save_the_date()
		};
		let ics = event.to_ics(generated_at());

		assert!(ics.split("\r\n").all(within_line_limit));
		let unfolded = ics.replace("\r\n ", "");
		assert!(unfolded.contains(&format!("SUMMARY:{}\r\n", "é".repeat(60))));
	}

	#[test]
	fn text_gets_escaped() {
		let event = CalendarEvent {
			description: "koffie, taart; en\ndan feest".into(),
			..CalendarEvent::save_the_date()
		};
		let ics = event.to_ics(generated_at());

		let lines = ics.split("\r\n").collect::<Vec<_>>();
		assert!(lines.contains(&"DESCRIPTION:koffie\\, taart\\; en\\ndan feest"));
		assert_eq!(ics.matches('\n').count(), ics.matches("\r\n").count());
	}
}
