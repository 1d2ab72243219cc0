use std::rc::Rc;
use shared_data::BASE_STYLE;
use yew::prelude::*;
use crate::{
	bundle::use_content_bundle,
	hero::Hero,
	intro::{IntroLayer, use_intro_sequence},
	invite::CallToAction,
	motion::use_reduced_motion,
	reveal::use_reveal_on_scroll,
	sections::{Footer, KissSection, LocationSection, Timeline},
};

#[function_component(SaveTheDatePage)]
pub fn save_the_date_page() -> Html {
	let (content, request_content) = use_content_bundle();
	let intro_video = use_node_ref();
	let (intro, activate) = use_intro_sequence(intro_video.clone(), request_content.clone());
	let reduce_motion = use_reduced_motion();
	let visible = intro.content_visible();

	use_reveal_on_scroll(visible, reduce_motion);

	// last chance to pick up the bundle if the earlier attempts failed
	use_effect_with(visible, move |&visible| {
		if visible {
			request_content.emit(());
		}
		|| ()
	});

	html! {
		<>
			<style>{ BASE_STYLE }</style>
			<IntroLayer state={ intro } video={ intro_video } on_activate={ activate } />
			<div
				class={ classes!("content-layer", visible.then_some("is-visible")) }
				aria-hidden={ (!visible).to_string() }
			>
				<main class="page-shell">
					<Hero { reduce_motion } />
					<KissSection { reduce_motion } />
					<Timeline items={ Rc::from(content.timeline.clone()) } />
					<LocationSection location={ content.location.clone() } />
					<CallToAction
						town={ content.location.town.clone() }
						contact={ content.contact.clone() }
						gift={ content.gift.clone() }
						{ reduce_motion }
					/>
				</main>
				<Footer />
			</div>
		</>
	}
}
