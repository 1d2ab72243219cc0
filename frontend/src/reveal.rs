use const_format::concatcp;
use gloo_console::log;
use js_sys::Array;
use shared_data::{REVEAL_ATTR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, REVEALED_CLASS};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const UNREVEALED: &str = concatcp!("[", REVEAL_ATTR, "]:not(.", REVEALED_CLASS, ")");

type RevealCallback = Closure<dyn Fn(Array, IntersectionObserver)>;

fn unrevealed_sections() -> Result<Vec<Element>, JsValue> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or("No document to reveal sections in")?;

	let nodes = document.query_selector_all(UNREVEALED)?;
	Ok((0..nodes.length())
		.filter_map(|i| nodes.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

fn reveal(el: &Element) {
	if let Err(err) = el.class_list().add_1(REVEALED_CLASS) {
		log!("Couldn't reveal section:", err);
	}
}

fn observe_sections(sections: &[Element]) -> Result<(IntersectionObserver, RevealCallback), JsValue> {
	let on_intersect = RevealCallback::new(|entries: Array, observer: IntersectionObserver| {
		for entry in entries.iter() {
			let entry = entry.unchecked_into::<IntersectionObserverEntry>();
			if entry.is_intersecting() {
				let target = entry.target();
				reveal(&target);
				// once it's in, it stays in
				observer.unobserve(&target);
			}
		}
	});

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
	options.set_root_margin(REVEAL_ROOT_MARGIN);

	let observer = IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
	for section in sections {
		observer.observe(section);
	}

	Ok((observer, on_intersect))
}

/// Fades in every `data-reveal` section as it scrolls into view. Does nothing until `active`;
/// with reduced motion everything is revealed straight away.
#[hook]
pub fn use_reveal_on_scroll(active: bool, reduce_motion: bool) {
	use_effect_with((active, reduce_motion), move |&(active, reduce_motion)| {
		let observer = if active {
			match unrevealed_sections() {
				Ok(sections) if reduce_motion => {
					sections.iter().for_each(reveal);
					None
				},
				Ok(sections) => observe_sections(&sections)
					.map_err(|err| {
						log!("Couldn't observe sections, revealing them all:", err);
					})
					.ok()
					.or_else(|| {
						sections.iter().for_each(reveal);
						None
					}),
				Err(err) => {
					log!("Couldn't find sections to reveal:", err);
					None
				},
			}
		} else {
			None
		};

		move || {
			if let Some((observer, on_intersect)) = observer {
				observer.disconnect();
				drop(on_intersect);
			}
		}
	});
}
