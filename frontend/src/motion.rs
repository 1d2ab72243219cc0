use gloo_console::log;
use shared_data::REDUCED_MOTION_QUERY;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::MediaQueryList;
use yew::prelude::*;

fn reduced_motion_query() -> Option<MediaQueryList> {
	web_sys::window()?
		.match_media(REDUCED_MOTION_QUERY)
		.ok()
		.flatten()
}

/// Whether the visitor has asked for reduced motion. Follows the setting live if it changes while
/// the page is open.
#[hook]
pub fn use_reduced_motion() -> bool {
	let reduce = use_state_eq(|| reduced_motion_query().is_some_and(|q| q.matches()));

	{
		let setter = reduce.setter();
		use_effect_with((), move |()| {
			let listener = reduced_motion_query().map(|query| {
				let current = query.clone();
				let on_change = Closure::<dyn Fn()>::new(move || setter.set(current.matches()));

				if let Err(err) = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref()) {
					log!("Couldn't listen for reduced motion changes:", err);
				}

				(query, on_change)
			});

			move || {
				if let Some((query, on_change)) = listener {
					_ = query.remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
				}
			}
		});
	}

	*reduce
}
