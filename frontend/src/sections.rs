use std::rc::Rc;
use shared_data::{
	KISS_VIDEO_SRC, Location, SAVE_THE_DATE, TimelineIcon, TimelineItem,
	chrono::Datelike,
};
use yew::prelude::*;
use crate::media::use_ambient_playback;

fn glyph(icon: TimelineIcon) -> &'static str {
	match icon {
		TimelineIcon::DoorOpen => "🚪",
		TimelineIcon::Users => "👥",
		TimelineIcon::Scroll => "📜",
		TimelineIcon::CakeSlice => "🍰",
		TimelineIcon::Camera => "📷",
		TimelineIcon::Clock => "🕑",
		TimelineIcon::Car => "🚗",
		TimelineIcon::Church => "⛪",
		TimelineIcon::Sparkles => "✨",
		TimelineIcon::Utensils => "🍽",
		TimelineIcon::Moon => "🌙",
		TimelineIcon::PartyPopper => "🎉",
		TimelineIcon::Hand => "👋",
	}
}

#[derive(Properties, PartialEq)]
pub struct KissProps {
	pub reduce_motion: bool,
}

#[function_component(KissSection)]
pub fn kiss_section(props: &KissProps) -> Html {
	let video = use_node_ref();
	use_ambient_playback(video.clone(), props.reduce_motion);

	html! {
		<section class="section" data-reveal="">
			<div class="container split">
				<div>
					<span class="eyebrow text-accent">{ "Ons verhaal" }</span>
					<h2 class="section-title font-serif">{ "Van eerste ontmoeting tot ja-woord" }</h2>
					<p class="section-subtitle text-muted">
						{ "Na jaren van samen lachen, reizen en dromen, zeggen we volgend jaar ja tegen elkaar. We hopen dat jij erbij bent." }
					</p>
				</div>
				<div class="kiss-card">
					<video
						ref={ video }
						class="kiss-video"
						src={ KISS_VIDEO_SRC }
						autoplay={ !props.reduce_motion }
						loop={ true }
						muted={ true }
						playsinline={ true }
						preload="metadata"
					/>
				</div>
			</div>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
	pub items: Rc<[TimelineItem]>,
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
	html! {
		<section class="section" data-reveal="">
			<div class="container">
				<span class="eyebrow text-accent">{ "Dagprogramma" }</span>
				<h2 class="section-title font-serif">{ "Zo ziet onze dag eruit" }</h2>
				<ol class="timeline">
					{ for props.items.iter().map(|item| html! {
						<li class="timeline-item">
							<span class="timeline-time">{ &item.time }</span>
							<span class="timeline-icon" aria-hidden="true">{ glyph(item.icon) }</span>
							<h3 class="timeline-title">{ &item.title }</h3>
						</li>
					}) }
				</ol>
			</div>
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct LocationProps {
	pub location: Location,
}

#[function_component(LocationSection)]
pub fn location_section(props: &LocationProps) -> Html {
	let loc = &props.location;

	html! {
		<section class="section" data-reveal="">
			<div class="container split">
				<div>
					<span class="eyebrow text-accent">{ "Locatie" }</span>
					<h2 class="section-title font-serif">{ &loc.name }</h2>
					<p class="section-subtitle text-muted">{ &loc.address }</p>
					<p class="text-muted">{ &loc.parking_note }</p>
					<div class="button-row">
						<a class="btn-ghost" href={ loc.directions_url.clone() } target="_blank" rel="noopener noreferrer">
							{ "Route plannen" }
						</a>
						<a class="btn-ghost" href={ loc.place_url.clone() } target="_blank" rel="noopener noreferrer">
							{ "Open in Google Maps" }
						</a>
					</div>
				</div>
				<div class="map-card">
					<iframe
						class="map-frame"
						title={ loc.map_title.clone() }
						src={ loc.embed_url.clone() }
						loading="lazy"
						referrerpolicy="no-referrer-when-downgrade"
					/>
				</div>
			</div>
		</section>
	}
}

#[function_component(Footer)]
pub fn footer() -> Html {
	html! {
		<footer class="footer">
			{ format!("© {} Leonard & Thirza - Made with love", SAVE_THE_DATE.year()) }
		</footer>
	}
}
