use gloo_console::log;
use shared_data::{SAVE_THE_DATE, STORY_VIDEO_SRC, VIDEO_POSTER, hero_date_stamp};
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use crate::{
	countdown::CountdownCards,
	media::{play_or_else, use_ambient_playback},
};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
	pub reduce_motion: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
	let video = use_node_ref();
	let muted = use_state_eq(|| true);

	use_ambient_playback(video.clone(), props.reduce_motion);

	// ambient playback always restarts muted, so keep the button in line with that
	{
		let muted = muted.setter();
		use_effect_with(props.reduce_motion, move |_| {
			muted.set(true);
			|| ()
		});
	}

	let toggle_sound = {
		let video = video.clone();
		let muted = muted.clone();
		Callback::from(move |_: MouseEvent| {
			let Some(el) = video.cast::<HtmlVideoElement>() else {
				return;
			};

			let now_muted = !*muted;
			el.set_muted(now_muted);
			muted.set(now_muted);

			if !now_muted && el.paused() {
				let revert = el.clone();
				let muted = muted.setter();
				play_or_else(&el, move |err| {
					log!("Hero video wouldn't play with sound, muting again:", err);
					revert.set_muted(true);
					muted.set(true);
				});
			}
		})
	};

	html! {
		<header class="hero-section">
			<video
				ref={ video }
				class="hero-video"
				src={ STORY_VIDEO_SRC }
				poster={ VIDEO_POSTER }
				autoplay={ !props.reduce_motion }
				loop={ true }
				muted={ true }
				playsinline={ true }
				preload="metadata"
			/>
			<div class="hero-overlay" />
			<div class="hero-content">
				<span class="eyebrow">{ "Save the date" }</span>
				<h1 class="hero-title font-serif">
					{ "Leonard " }<span class="ampersand">{ "&" }</span>{ " Thirza" }
				</h1>
				<p class="hero-date">{ hero_date_stamp(SAVE_THE_DATE) }</p>
				<p class="hero-tagline">{ "Wij gaan trouwen" }</p>
				<CountdownCards />
			</div>
			<button
				class="hero-sound"
				type="button"
				aria-pressed={ (!*muted).to_string() }
				onclick={ toggle_sound }
			>
				{ if *muted { "Geluid aan" } else { "Geluid uit" } }
			</button>
		</header>
	}
}
