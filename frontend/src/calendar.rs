use gloo_console::log;
use shared_data::{CalendarEvent, CalendarFile, CalendarKind, Capabilities, Export, chrono::DateTime};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn capabilities() -> Capabilities {
	let Some(window) = web_sys::window() else {
		return Capabilities::default();
	};

	let navigator = window.navigator();
	let touch = window.document()
		.is_some_and(|doc| js_sys::Reflect::has(&doc, &JsValue::from_str("ontouchend")).unwrap_or(false));

	Capabilities {
		user_agent: navigator.user_agent().unwrap_or_default(),
		platform: navigator.platform().unwrap_or_default(),
		touch,
	}
}

fn open_in_new_tab(url: &str) -> Result<(), JsValue> {
	let window = web_sys::window().ok_or("No window to open the calendar from")?;

	// a `None` here means a popup blocker ate it, and there's nothing to be done about that
	if window.open_with_url_and_target(url, "_blank")?.is_none() {
		log!("Calendar link was blocked from opening");
	}

	Ok(())
}

fn download(file: &CalendarFile) -> Result<(), JsValue> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or("No document to download the calendar file with")?;
	let body = document.body().ok_or("Document has no body")?;

	let options = BlobPropertyBag::new();
	options.set_type(file.mime);
	let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let anchor = document.create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
	anchor.set_href(&url);
	anchor.set_download(file.file_name);
	body.append_child(&anchor)?;
	anchor.click();
	anchor.remove();

	Url::revoke_object_url(&url)
}

/// Gets the save-the-date into whatever calendar this device most likely uses. Failures are only
/// logged, since the visitor can always try again.
pub fn add_to_calendar() {
	let kind = CalendarKind::detect(&capabilities());
	let now = DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default();

	let res = match CalendarEvent::save_the_date().export(kind, now) {
		Export::OpenUrl(url) => open_in_new_tab(&url),
		Export::Download(file) => download(&file),
	};

	if let Err(err) = res {
		log!(format!("Couldn't add to calendar ({kind:?}):"), err);
	}
}
