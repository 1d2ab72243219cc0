use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlMediaElement;
use gloo_console::log;
use yew::prelude::*;

/// Starts playback and hands any rejection to `on_reject`. Browsers refuse to play whenever their
/// autoplay policy says no, so this failing is normal and never something to show the visitor.
pub fn play_or_else(media: &HtmlMediaElement, on_reject: impl FnOnce(JsValue) + 'static) {
	match media.play() {
		Ok(promise) => spawn_local(async move {
			if let Err(err) = JsFuture::from(promise).await {
				on_reject(err);
			}
		}),
		Err(err) => on_reject(err),
	}
}

/// Keeps a muted, looping background video playing, unless the visitor asked for less motion, in
/// which case it just sits on its first frame.
#[hook]
pub fn use_ambient_playback(video: NodeRef, reduce_motion: bool) {
	use_effect_with(reduce_motion, move |&reduce| {
		if let Some(media) = video.cast::<HtmlMediaElement>() {
			if reduce {
				if let Err(err) = media.pause() {
					log!("Couldn't pause video:", err);
				}
			} else {
				media.set_muted(true);
				play_or_else(&media, |err| {
					log!("Background video wouldn't autoplay:", err);
				});
			}
		}

		|| ()
	});
}
