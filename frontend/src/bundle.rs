use std::{fmt, rc::Rc};
use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use shared_data::{BundleLoad, CONTENT_BUNDLE_URL, CONTENT_PREFETCH_DELAY_MS, PageContent};
use yew::prelude::*;

#[derive(Debug)]
pub enum ContentLoadErr {
	Network(String),
	Status(u16),
	Decode(String),
}

impl fmt::Display for ContentLoadErr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(err) => write!(f, "couldn't reach the server: {err}"),
			Self::Status(code) => write!(f, "server responded with {code}"),
			Self::Decode(err) => write!(f, "couldn't decode the bundle: {err}"),
		}
	}
}

async fn fetch_content() -> Result<PageContent, ContentLoadErr> {
	let res = Request::get(CONTENT_BUNDLE_URL).send().await
		.map_err(|e| ContentLoadErr::Network(e.to_string()))?;

	if !res.ok() {
		return Err(ContentLoadErr::Status(res.status()));
	}

	res.json::<PageContent>().await
		.map_err(|e| ContentLoadErr::Decode(e.to_string()))
}

/// Returns the page content and a callback that asks for the real bundle to be loaded. Until that
/// finishes (or if it never does) the copy compiled into the binary is shown instead.
///
/// Asking while a request is in flight, or after one succeeded, does nothing. If nobody asks within
/// [`CONTENT_PREFETCH_DELAY_MS`] it's requested anyway.
#[hook]
pub fn use_content_bundle() -> (Rc<PageContent>, Callback<()>) {
	let content = use_state(|| Rc::new(PageContent::bundled().clone()));
	let load = use_mut_ref(BundleLoad::default);

	let request = {
		let content = content.setter();
		Callback::from(move |()| {
			if !load.borrow_mut().begin() {
				return;
			}

			let load = load.clone();
			let content = content.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let result = fetch_content().await;
				load.borrow_mut().finish(&result);

				match result {
					Ok(loaded) => content.set(Rc::new(loaded)),
					Err(err) => {
						log!(format!("Couldn't load content bundle, will retry on the next trigger: {err}"));
					},
				}
			});
		})
	};

	{
		let request = request.clone();
		use_effect_with((), move |()| {
			let prefetch = Timeout::new(CONTENT_PREFETCH_DELAY_MS, move || request.emit(()));
			move || drop(prefetch)
		});
	}

	((*content).clone(), request)
}
