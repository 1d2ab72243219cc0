use gloo_console::log;
use gloo_timers::callback::Timeout;
use shared_data::{
	CALENDAR_PULSE_DELAY_MS, CALENDAR_PULSE_MS, Contact, GiftSuggestion, SAVE_THE_DATE, WEEKDAY_LABELS,
	chrono::Datelike, dutch_long_date, month_grid, month_header, presses_button,
};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use crate::calendar::add_to_calendar;

fn scroll_to_top(reduce_motion: bool) {
	let Some(window) = web_sys::window() else {
		return;
	};

	let options = ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(if reduce_motion { ScrollBehavior::Auto } else { ScrollBehavior::Smooth });
	window.scroll_to_with_scroll_to_options(&options);
}

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
	pub town: String,
	pub contact: Contact,
	pub gift: GiftSuggestion,
	pub reduce_motion: bool,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
	let contact_open = use_state_eq(|| false);

	let open_contact = {
		let contact_open = contact_open.setter();
		Callback::from(move |_: MouseEvent| contact_open.set(true))
	};
	let close_contact = {
		let contact_open = contact_open.setter();
		Callback::from(move |()| contact_open.set(false))
	};
	let to_top = {
		let reduce_motion = props.reduce_motion;
		Callback::from(move |_: MouseEvent| scroll_to_top(reduce_motion))
	};

	html! {
		<section class="section" data-reveal="">
			<div class="container">
				<div class="cta-card">
					<span class="eyebrow text-accent">{ "Noteer het alvast" }</span>
					<h2 class="section-title font-serif">{ "Save the date" }</h2>
					<CalendarCard reduce_motion={ props.reduce_motion } />
					<p class="cta-meta">{ format!("{} · {}", dutch_long_date(SAVE_THE_DATE), props.town) }</p>
					<button class="btn-seal" type="button" onclick={ Callback::from(|_: MouseEvent| add_to_calendar()) }>
						{ "Zet in je agenda" }
					</button>
					<div class="button-row">
						<button class="btn-ghost" type="button" onclick={ open_contact }>{ &props.contact.title }</button>
						<button class="back-to-top" type="button" onclick={ to_top }>{ "↑ Terug naar boven" }</button>
					</div>
					<GiftCard gift={ props.gift.clone() } />
				</div>
			</div>
			if *contact_open {
				<ContactModal contact={ props.contact.clone() } on_close={ close_contact } />
			}
		</section>
	}
}

#[derive(Properties, PartialEq)]
pub struct CalendarCardProps {
	pub reduce_motion: bool,
}

/// The month of the wedding, with the day itself under a golden heart that pulses once
#[function_component(CalendarCard)]
pub fn calendar_card(props: &CalendarCardProps) -> Html {
	let pulse = use_state_eq(|| false);
	let reset = use_mut_ref(|| Option::<Timeout>::None);

	{
		let pulse = pulse.setter();
		use_effect_with(props.reduce_motion, move |&reduce| {
			let start = (!reduce).then(|| {
				let reset = reset.clone();
				Timeout::new(CALENDAR_PULSE_DELAY_MS, move || {
					pulse.set(true);
					let pulse = pulse.clone();
					*reset.borrow_mut() = Some(Timeout::new(CALENDAR_PULSE_MS, move || pulse.set(false)));
				})
			});

			move || {
				drop(start);
				drop(reset.borrow_mut().take());
			}
		});
	}

	let highlight = SAVE_THE_DATE.day();
	let cells = month_grid(SAVE_THE_DATE);

	html! {
		<div class="calendar-card">
			<h3 class="calendar-month font-serif">{ month_header(SAVE_THE_DATE) }</h3>
			<div class="calendar-weekdays">
				{ for WEEKDAY_LABELS.iter().map(|label| html! {
					<div class="calendar-weekday">{ *label }</div>
				}) }
			</div>
			<div class="calendar-days">
				{ for cells.into_iter().map(|cell| match cell {
					Some(day) if day == highlight => html! {
						<div class="calendar-cell is-highlighted">
							<span>{ day.to_string() }</span>
							<img
								class={ classes!("calendar-heart", (*pulse).then_some("is-pulsing")) }
								src="/clearer-golden-heart.png"
								alt="Gouden hart"
							/>
						</div>
					},
					Some(day) => html! { <div class="calendar-cell"><span>{ day.to_string() }</span></div> },
					None => html! { <div class="calendar-cell" /> },
				}) }
			</div>
		</div>
	}
}

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
	pub contact: Contact,
	pub on_close: Callback<()>,
}

#[function_component(ContactModal)]
pub fn contact_modal(props: &ContactModalProps) -> Html {
	// Escape closes it from anywhere on the page, not just when something inside has focus
	{
		let on_close = props.on_close.clone();
		use_effect_with((), move |()| {
			let on_key = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
				if e.key() == "Escape" {
					on_close.emit(());
				}
			});

			let window = web_sys::window();
			if let Some(window) = &window {
				if let Err(err) = window.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref()) {
					log!("Couldn't listen for Escape on the contact modal:", err);
				}
			}

			move || {
				if let Some(window) = window {
					_ = window.remove_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
				}
			}
		});
	}

	let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
	let on_button = props.on_close.reform(|_: MouseEvent| ());
	let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
	let mailto = format!("mailto:{}", props.contact.email);

	html! {
		<div class="modal-backdrop" onclick={ on_backdrop }>
			<div
				class="modal-card"
				role="dialog"
				aria-modal="true"
				aria-labelledby="contact-title"
				onclick={ keep_open }
			>
				<h3 id="contact-title" class="section-title font-serif">{ &props.contact.title }</h3>
				<p class="text-muted">{ &props.contact.body }</p>
				<a class="btn-ghost" href={ mailto }>{ &props.contact.email }</a>
				<button class="back-to-top" type="button" onclick={ on_button }>{ "Sluiten" }</button>
			</div>
		</div>
	}
}

#[derive(Properties, PartialEq)]
pub struct GiftCardProps {
	pub gift: GiftSuggestion,
}

#[function_component(GiftCard)]
pub fn gift_card(props: &GiftCardProps) -> Html {
	let open = use_state_eq(|| false);

	// a tap also fires pointerenter, so only real mice get the hover behaviour
	let on_enter = {
		let open = open.setter();
		Callback::from(move |e: PointerEvent| if e.pointer_type() == "mouse" {
			open.set(true);
		})
	};
	let on_leave = {
		let open = open.setter();
		Callback::from(move |e: PointerEvent| if e.pointer_type() == "mouse" {
			open.set(false);
		})
	};
	let on_tap = {
		let open = open.clone();
		Callback::from(move |e: PointerEvent| if e.pointer_type() != "mouse" {
			open.set(!*open);
		})
	};
	let on_key = {
		let open = open.clone();
		Callback::from(move |e: KeyboardEvent| if presses_button(&e.key()) {
			e.prevent_default();
			open.set(!*open);
		})
	};

	html! {
		<div
			class={ classes!("gift-card", (*open).then_some("is-open")) }
			role="button"
			tabindex="0"
			aria-expanded={ (*open).to_string() }
			onpointerenter={ on_enter }
			onpointerleave={ on_leave }
			onpointerup={ on_tap }
			onkeydown={ on_key }
		>
			<strong class="text-accent">{ &props.gift.title }</strong>
			<p class="text-muted">
				{ if *open { &props.gift.details } else { &props.gift.teaser } }
			</p>
		</div>
	}
}
