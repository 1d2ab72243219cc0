use std::rc::Rc;
use gloo_console::log;
use gloo_timers::callback::Timeout;
use shared_data::{INTRO_VIDEO_SRC, IntroSequencer, IntroState, Scheduler, presses_button};
use web_sys::HtmlVideoElement;
use yew::prelude::*;
use crate::media::play_or_else;

/// Backs the intro's timers with `setTimeout`. Every timer that fires reports its target state
/// through `on_elapsed`.
pub struct TimeoutScheduler {
	on_elapsed: Callback<IntroState>,
}

impl Scheduler for TimeoutScheduler {
	type Handle = Timeout;

	fn schedule(&mut self, delay_ms: u32, target: IntroState) -> Timeout {
		let on_elapsed = self.on_elapsed.clone();
		Timeout::new(delay_ms, move || on_elapsed.emit(target))
	}

	fn cancel(&mut self, handle: Timeout) {
		drop(handle.cancel());
	}
}

fn play_intro(video: &NodeRef) {
	if let Some(video) = video.cast::<HtmlVideoElement>() {
		video.set_current_time(0.0);
		play_or_else(&video, |err| {
			log!("Intro video wouldn't play, carrying on without it:", err);
		});
	}
}

/// Returns the current intro state and the callback that kicks it off. The first activation that
/// actually starts the sequence plays `video` from the top and emits `on_start`; any later one is
/// ignored, even if it comes in before the page re-renders.
#[hook]
pub fn use_intro_sequence(video: NodeRef, on_start: Callback<()>) -> (IntroState, Callback<()>) {
	let state = use_state_eq(IntroState::default);
	let sequencer = use_mut_ref(|| Option::<IntroSequencer<TimeoutScheduler>>::None);

	{
		let sequencer = sequencer.clone();
		let setter = state.setter();
		use_effect_with((), move |()| {
			// weak so the timers (owned by the sequencer) don't keep the sequencer alive
			let weak = Rc::downgrade(&sequencer);
			let on_elapsed = Callback::from(move |target: IntroState| {
				let Some(cell) = weak.upgrade() else {
					return;
				};

				let moved = cell.borrow_mut()
					.as_mut()
					.and_then(|seq| seq.elapsed(target));

				if let Some(next) = moved {
					setter.set(next);
				}
			});

			*sequencer.borrow_mut() = Some(IntroSequencer::new(TimeoutScheduler { on_elapsed }));

			move || {
				// dropping it cancels whatever is still pending
				let seq = sequencer.borrow_mut().take();
				drop(seq);
			}
		});
	}

	let activate = {
		let setter = state.setter();
		Callback::from(move |()| {
			let started = sequencer.borrow_mut()
				.as_mut()
				.and_then(IntroSequencer::activate);

			if let Some(next) = started {
				setter.set(next);
				play_intro(&video);
				on_start.emit(());
			}
		})
	};

	(*state, activate)
}

#[derive(Properties, PartialEq)]
pub struct IntroLayerProps {
	pub state: IntroState,
	pub video: NodeRef,
	pub on_activate: Callback<()>,
}

#[function_component(IntroLayer)]
pub fn intro_layer(props: &IntroLayerProps) -> Html {
	{
		let video = props.video.clone();
		use_effect_with((), move |()| {
			// the `muted` attribute alone doesn't mute an element created from script
			if let Some(video) = video.cast::<HtmlVideoElement>() {
				video.set_muted(true);
			}
			|| ()
		});
	}

	let onclick = props.on_activate.reform(|_: MouseEvent| ());
	let onkeydown = {
		let on_activate = props.on_activate.clone();
		Callback::from(move |e: KeyboardEvent| {
			if presses_button(&e.key()) {
				e.prevent_default();
				on_activate.emit(());
			}
		})
	};

	if !props.state.intro_mounted() {
		return html! {};
	}

	let idle = props.state == IntroState::Idle;

	html! {
		<div
			class={ classes!(
				"intro-layer",
				(!idle).then_some("is-passive"),
				props.state.content_visible().then_some("is-exiting"),
			) }
			aria-hidden={ (!idle).to_string() }
		>
			<video
				ref={ props.video.clone() }
				class={ classes!("intro-video", props.state.video_fading().then_some("is-fading")) }
				src={ INTRO_VIDEO_SRC }
				muted={ true }
				playsinline={ true }
				preload="auto"
			/>
			<div
				class={ classes!("intro-hit", (!idle).then_some("is-hidden")) }
				role="button"
				tabindex="0"
				aria-label="Open de uitnodiging"
				{ onclick }
				{ onkeydown }
			/>
		</div>
	}
}
