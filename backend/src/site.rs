use std::path::Path;
use axum::{
	http::{HeaderName, HeaderValue, header},
	response::IntoResponse,
	routing::get,
	Router,
};
use const_format::concatcp;
use chrono::Utc;
use shared_data::{CalendarEvent, ICS_FILE_NAME, ICS_MIME};
use tower_http::{
	services::{ServeDir, ServeFile},
	set_header::SetResponseHeaderLayer,
	trace::TraceLayer,
};

pub const ICS_ROUTE: &str = concatcp!("/", ICS_FILE_NAME);

// the whole site is for invited guests only
const ROBOTS_TAG: &str = "x-robots-tag";
const ROBOTS_POLICY: &str = "noindex, nofollow";

pub fn router(static_dir: &Path) -> Router {
	// anything that isn't a real file is the single page, so unknown paths still get the site
	let assets = ServeDir::new(static_dir)
		.fallback(ServeFile::new(static_dir.join("index.html")));

	Router::new()
		.route(ICS_ROUTE, get(calendar_file))
		.fallback_service(assets)
		.layer(SetResponseHeaderLayer::overriding(
			HeaderName::from_static(ROBOTS_TAG),
			HeaderValue::from_static(ROBOTS_POLICY),
		))
		.layer(TraceLayer::new_for_http())
}

/// Same file the "add to calendar" button builds in the browser, for visitors without javascript
async fn calendar_file() -> impl IntoResponse {
	let file = CalendarEvent::save_the_date().calendar_file(Utc::now());

	tracing::debug!("Handing out {} ({} bytes)", file.file_name, file.contents.len());

	(
		[
			(header::CONTENT_TYPE, concatcp!(ICS_MIME, "; charset=utf-8")),
			(header::CONTENT_DISPOSITION, concatcp!("attachment; filename=\"", ICS_FILE_NAME, "\"")),
		],
		file.contents,
	)
}
