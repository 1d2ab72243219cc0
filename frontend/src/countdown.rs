use gloo_timers::callback::Interval;
use shared_data::{COUNTDOWN_TARGET, COUNTDOWN_TICK_MS, Countdown};
use wasm_bindgen::JsValue;
use yew::prelude::*;

fn sample() -> Countdown {
	// an unparseable target comes back as NaN, which casts to 0 and just reads as 'already over'
	let target = js_sys::Date::new(&JsValue::from_str(COUNTDOWN_TARGET)).get_time() as i64;
	Countdown::remaining(target, js_sys::Date::now() as i64)
}

#[hook]
pub fn use_countdown() -> Countdown {
	let countdown = use_state_eq(sample);

	{
		let setter = countdown.setter();
		use_effect_with((), move |()| {
			let ticker = Interval::new(COUNTDOWN_TICK_MS, move || setter.set(sample()));
			move || drop(ticker)
		});
	}

	*countdown
}

#[function_component(CountdownCards)]
pub fn countdown_cards() -> Html {
	let countdown = use_countdown();

	html! {
		<div class="countdown-grid" aria-label="Aftellen tot de bruiloft">
			{ for countdown.cards().into_iter().map(|(value, label)| html! {
				<div class="countdown-card">
					<span class="countdown-value">{ value }</span>
					<span class="countdown-label">{ label }</span>
				</div>
			}) }
		</div>
	}
}
