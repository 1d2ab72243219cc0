use const_format::concatcp;

mod calendar;
mod content;
mod countdown;
mod dates;
mod intro;
mod platform;

pub use calendar::*;
pub use content::*;
pub use countdown::*;
pub use dates::{
	CALENDAR_PULSE_DELAY_MS, CALENDAR_PULSE_MS, WEEKDAY_LABELS,
	dutch_long_date, hero_date_stamp, month_grid, month_header,
};
pub use intro::*;
pub use platform::{CalendarKind, Capabilities, presses_button};

// so the frontend and backend agree on the version
pub use chrono;

pub const PAPER_COLOR: &str = "#faf9f6";
pub const INTRO_VIDEO_SRC: &str = "/kling_video.mp4";
pub const STORY_VIDEO_SRC: &str = "/Save%20The%20Date.mp4";
pub const KISS_VIDEO_SRC: &str =
	"https://hebbkx1anhila5yf.public.blob.vercel-storage.com/WhatsApp%20Video%202025-09-09%20at%2021.40.24-BndD8sXBxXu8ekHUiHfWtyweg58V8M.mp4";
pub const VIDEO_POSTER: &str = "/og-save-the-date-new.png";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
/// Marks a section that fades in once it scrolls into view
pub const REVEAL_ATTR: &str = "data-reveal";
pub const REVEALED_CLASS: &str = "is-revealed";
pub const REVEAL_THRESHOLD: f64 = 0.18;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";

pub static BASE_STYLE: &str = concatcp!(r#"
* {
	--paper: "#, PAPER_COLOR, r#";
	--ink: #2b2620;
	--muted: #6f665a;
	--line: rgba(196, 161, 90, 0.35);
	--champagne: #efe2c4;
	--accent: #a9823e;
	--accent-dark: #7a5a22;
	box-sizing: border-box;
}
body {
	margin: 0;
	background-color: var(--paper);
	color: var(--ink);
	font-family: "Geist", system-ui, sans-serif;
}
.font-serif {
	font-family: "Playfair Display", Georgia, serif;
}
.text-accent {
	color: var(--accent);
}
.text-muted {
	color: var(--muted);
}
.intro-layer {
	position: fixed;
	inset: 0;
	z-index: 9999;
	display: grid;
	place-items: center;
	background: var(--paper);
	opacity: 1;
	transition: opacity "#, INTRO_LAYER_FADE_MS, r#"ms ease;
}
.intro-layer.is-passive {
	pointer-events: none;
}
.intro-layer.is-exiting {
	opacity: 0;
}
.intro-video {
	position: absolute;
	inset: 0;
	width: 100vw;
	height: 100vh;
	object-fit: cover;
	opacity: 1;
	transition: opacity "#, INTRO_VIDEO_FADE_MS, r#"ms ease;
}
.intro-video.is-fading {
	opacity: 0;
}
.intro-hit {
	position: absolute;
	inset: 0;
	background: transparent;
	cursor: pointer;
	z-index: 2;
	touch-action: manipulation;
}
.intro-hit.is-hidden {
	display: none;
}
.content-layer {
	opacity: 0;
	visibility: hidden;
	transform: translateY(6px);
	transition: opacity 0.55s ease, transform 0.55s ease;
	pointer-events: none;
}
.content-layer.is-visible {
	opacity: 1;
	visibility: visible;
	transform: translateY(0);
	pointer-events: auto;
}
[data-reveal] {
	opacity: 0;
	transform: translateY(18px);
	transition: opacity 0.7s ease, transform 0.7s ease;
}
[data-reveal].is-revealed {
	opacity: 1;
	transform: none;
}
.page-shell {
	min-height: 100vh;
	background:
		radial-gradient(circle at 15% 10%, rgba(201, 176, 122, 0.16), transparent 55%),
		linear-gradient(180deg, rgba(255, 255, 255, 0.7) 0%, var(--paper) 100%);
}
.section {
	padding: clamp(3.5rem, 7vw, 6.5rem) 1.5rem;
	position: relative;
	overflow: hidden;
}
.container {
	width: min(1120px, 100%);
	margin: 0 auto;
}
.split {
	display: grid;
	gap: 2.5rem;
	align-items: center;
}
@media (min-width: 1024px) {
	.split {
		grid-template-columns: 0.9fr 1.1fr;
	}
}
.eyebrow {
	font-size: 0.65rem;
	letter-spacing: 0.38em;
	text-transform: uppercase;
	font-weight: 600;
}
.hero-section {
	position: relative;
	min-height: 100vh;
	display: flex;
	align-items: center;
	padding: clamp(4rem, 10vw, 7rem) 1.5rem;
	color: #fdfaf3;
	overflow: hidden;
}
.hero-video {
	position: absolute;
	inset: 0;
	width: 100%;
	height: 100%;
	object-fit: cover;
	object-position: 50% 30%;
}
.hero-overlay {
	position: absolute;
	inset: 0;
	background: linear-gradient(180deg, rgba(15, 12, 9, 0.55) 0%, rgba(15, 12, 9, 0.2) 55%, rgba(15, 12, 9, 0.6) 100%);
}
.hero-content {
	position: relative;
	z-index: 2;
	width: min(700px, 100%);
	display: grid;
	gap: 1rem;
}
.hero-title {
	font-size: clamp(2.6rem, 6vw, 4.6rem);
	line-height: 1.05;
	margin: 0;
}
.ampersand, .hero-date {
	color: var(--champagne);
}
.hero-date, .hero-tagline {
	letter-spacing: 0.3em;
	text-transform: uppercase;
	margin: 0;
}
.hero-sound {
	position: absolute;
	right: 24px;
	bottom: 24px;
	z-index: 2;
	padding: 0.5rem 0.9rem;
	border-radius: 999px;
	border: 1px solid rgba(255, 255, 255, 0.5);
	background: rgba(196, 161, 90, 0.85);
	color: #2b1c09;
	font-size: 0.65rem;
	letter-spacing: 0.2em;
	text-transform: uppercase;
	cursor: pointer;
}
.countdown-grid {
	display: grid;
	grid-template-columns: repeat(3, minmax(0, 1fr));
	gap: 0.75rem;
	max-width: 360px;
}
.countdown-card {
	background: rgba(255, 255, 255, 0.16);
	border: 1px solid rgba(255, 255, 255, 0.25);
	border-radius: 18px;
	padding: 0.9rem 0.7rem;
	text-align: center;
}
.countdown-value {
	display: block;
	font-size: 1.4rem;
	font-weight: 600;
	font-variant-numeric: tabular-nums;
}
.countdown-label {
	display: block;
	font-size: 0.6rem;
	letter-spacing: 0.28em;
	text-transform: uppercase;
}
.kiss-card, .map-card {
	border-radius: 24px;
	overflow: hidden;
	border: 1px solid rgba(196, 161, 90, 0.3);
	background: #fff;
}
.kiss-video {
	width: 100%;
	aspect-ratio: 4 / 5;
	object-fit: cover;
	display: block;
}
.section-title {
	font-size: clamp(1.8rem, 3.4vw, 2.7rem);
	line-height: 1.2;
	margin: 0;
}
.section-subtitle {
	max-width: 38rem;
	line-height: 1.6;
}
.timeline {
	position: relative;
	display: grid;
	gap: 1.2rem;
}
.timeline-item {
	display: grid;
	grid-template-columns: 84px 40px 1fr;
	gap: 0.9rem;
	align-items: start;
}
.timeline-time {
	font-size: 0.82rem;
	color: var(--muted);
	font-variant-numeric: tabular-nums;
}
.timeline-icon {
	width: 40px;
	height: 40px;
	border-radius: 999px;
	border: 1px solid rgba(196, 161, 90, 0.5);
	background: var(--champagne);
	color: var(--accent);
	display: flex;
	align-items: center;
	justify-content: center;
}
.timeline-title {
	font-size: 1rem;
	margin: 0;
}
.button-row {
	display: flex;
	flex-wrap: wrap;
	gap: 0.75rem;
}
.btn-ghost {
	padding: 0.6rem 1.2rem;
	border-radius: 999px;
	border: 1px solid rgba(196, 161, 90, 0.45);
	color: var(--accent);
	background: transparent;
	text-transform: uppercase;
	letter-spacing: 0.2em;
	font-size: 0.65rem;
	text-decoration: none;
	cursor: pointer;
}
.map-frame {
	width: 100%;
	min-height: 320px;
	border: 0;
	aspect-ratio: 4 / 3;
}
.cta-card {
	display: grid;
	gap: 1rem;
	text-align: center;
	justify-items: center;
	padding: clamp(2.5rem, 6vw, 3.5rem);
	border-radius: 28px;
	border: 1px solid rgba(196, 161, 90, 0.35);
	background: rgba(255, 255, 255, 0.8);
}
.cta-meta {
	letter-spacing: 0.08em;
	text-transform: uppercase;
	color: var(--accent-dark);
}
.btn-seal {
	background: linear-gradient(135deg, #d8c08b 0%, #b6883d 100%);
	color: #2b1b0a;
	border-radius: 999px;
	padding: 0.9rem 1.6rem;
	text-transform: uppercase;
	letter-spacing: 0.22em;
	font-size: 0.7rem;
	border: 1px solid rgba(255, 255, 255, 0.4);
	cursor: pointer;
}
.back-to-top {
	background: none;
	border: none;
	color: var(--muted);
	cursor: pointer;
}
.calendar-card {
	position: relative;
	width: min(22rem, 100%);
	padding: 1rem;
	border-radius: 18px;
	background: #fff;
	box-shadow: 0 12px 30px rgba(43, 38, 32, 0.08);
}
.calendar-month {
	margin: 0 0 1rem;
	font-size: 1.1rem;
	font-weight: 500;
	letter-spacing: 0.06em;
}
.calendar-weekdays, .calendar-days {
	display: grid;
	grid-template-columns: repeat(7, minmax(0, 1fr));
	gap: 0.5rem;
}
.calendar-weekday {
	font-size: 0.7rem;
	text-transform: uppercase;
	letter-spacing: 0.1em;
	color: var(--muted);
}
.calendar-cell {
	position: relative;
	height: 2.25rem;
	display: flex;
	align-items: center;
	justify-content: center;
	font-variant-numeric: tabular-nums;
}
.calendar-cell.is-highlighted span {
	position: relative;
	z-index: 1;
	font-weight: 600;
}
.calendar-heart {
	position: absolute;
	inset: -0.4rem;
	width: calc(100% + 0.8rem);
	height: calc(100% + 0.8rem);
	object-fit: contain;
}
.calendar-heart.is-pulsing {
	animation: pulse-once "#, CALENDAR_PULSE_MS, r#"ms ease-in-out;
}
@keyframes pulse-once {
	50% { transform: scale(1.18); }
}
.gift-card {
	border: 1px dashed var(--line);
	border-radius: 18px;
	padding: 1rem 1.4rem;
	cursor: pointer;
	max-width: 28rem;
}
.gift-card.is-open {
	background: rgba(239, 226, 196, 0.45);
}
.modal-backdrop {
	position: fixed;
	inset: 0;
	z-index: 1000;
	display: grid;
	place-items: center;
	background: rgba(15, 12, 9, 0.45);
}
.modal-card {
	background: var(--paper);
	border-radius: 24px;
	padding: 2rem;
	width: min(440px, calc(100% - 2rem));
	display: grid;
	gap: 1rem;
}
.footer {
	text-align: center;
	padding: 2rem 1rem;
	color: var(--muted);
}
"#);
