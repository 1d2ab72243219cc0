//! The opening choreography: intro video plays, fades out, the page sits on a blank sheet of
//! paper for a beat, and then the content underneath is revealed.
//!
//! Everything here is timer-driven. Once the visitor activates the intro, four timers are
//! scheduled from that single instant with strictly increasing delays, and each one moves the
//! sequence exactly one step forward. Video playback is fire-and-forget: if the browser refuses
//! to play it, the timers still carry the page through to [`IntroState::Done`].

pub const INTRO_FADE_START_MS: u32 = 1600;
pub const INTRO_VIDEO_FADE_MS: u32 = 500;
pub const INTRO_PAPER_PAUSE_MS: u32 = 150;
pub const INTRO_LAYER_FADE_MS: u32 = 500;

pub const INTRO_TIMINGS: IntroTimings = IntroTimings {
	fade_start_ms: INTRO_FADE_START_MS,
	video_fade_ms: INTRO_VIDEO_FADE_MS,
	paper_pause_ms: INTRO_PAPER_PAUSE_MS,
	layer_fade_ms: INTRO_LAYER_FADE_MS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntroState {
	// waiting for the visitor to tap the envelope
	#[default]
	Idle,
	Playing,
	// intro video is transitioning to transparent
	Fading,
	// nothing but the paper colour on screen
	Paper,
	// content is fading in underneath the (also fading) intro layer
	Revealing,
	// intro layer is gone for good
	Done,
}

impl IntroState {
	/// The only state this one is allowed to move to, if any
	#[must_use]
	pub fn next(self) -> Option<Self> {
		match self {
			Self::Idle => Some(Self::Playing),
			Self::Playing => Some(Self::Fading),
			Self::Fading => Some(Self::Paper),
			Self::Paper => Some(Self::Revealing),
			Self::Revealing => Some(Self::Done),
			Self::Done => None,
		}
	}

	#[must_use]
	pub fn content_visible(self) -> bool {
		matches!(self, Self::Revealing | Self::Done)
	}

	#[must_use]
	pub fn intro_mounted(self) -> bool {
		self != Self::Done
	}

	#[must_use]
	pub fn video_fading(self) -> bool {
		matches!(self, Self::Fading | Self::Paper | Self::Revealing)
	}

	#[must_use]
	pub fn accepts_activation(self) -> bool {
		self == Self::Idle
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroTimings {
	pub fade_start_ms: u32,
	pub video_fade_ms: u32,
	pub paper_pause_ms: u32,
	pub layer_fade_ms: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
	pub delay_ms: u32,
	pub target: IntroState,
}

impl IntroTimings {
	#[must_use]
	pub const fn total_ms(&self) -> u32 {
		self.fade_start_ms + self.video_fade_ms + self.paper_pause_ms + self.layer_fade_ms
	}

	/// Offsets, measured from activation, at which each timed state is entered. Delays are
	/// strictly increasing as long as every phase is non-zero, which is what keeps the timers
	/// firing in order.
	#[must_use]
	pub const fn schedule(&self) -> [ScheduledStep; 4] {
		let fading = self.fade_start_ms;
		let paper = fading + self.video_fade_ms;
		let revealing = paper + self.paper_pause_ms;

		[
			ScheduledStep { delay_ms: fading, target: IntroState::Fading },
			ScheduledStep { delay_ms: paper, target: IntroState::Paper },
			ScheduledStep { delay_ms: revealing, target: IntroState::Revealing },
			ScheduledStep { delay_ms: self.total_ms(), target: IntroState::Done },
		]
	}
}

/// Whatever actually owns the timers. In the browser this is backed by `setTimeout`; tests drive
/// it with a fake clock. When a scheduled timer fires, the owner is expected to hand its target
/// back to [`IntroSequencer::elapsed`].
pub trait Scheduler {
	type Handle;

	fn schedule(&mut self, delay_ms: u32, target: IntroState) -> Self::Handle;
	fn cancel(&mut self, handle: Self::Handle);
}

pub struct IntroSequencer<S: Scheduler> {
	state: IntroState,
	timings: IntroTimings,
	scheduler: S,
	pending: Vec<(IntroState, S::Handle)>,
}

impl<S: Scheduler> IntroSequencer<S> {
	pub fn new(scheduler: S) -> Self {
		Self::with_timings(scheduler, INTRO_TIMINGS)
	}

	pub fn with_timings(scheduler: S, timings: IntroTimings) -> Self {
		Self {
			state: IntroState::Idle,
			timings,
			scheduler,
			pending: Vec::with_capacity(4),
		}
	}

	#[must_use]
	pub fn state(&self) -> IntroState {
		self.state
	}

	/// How many scheduled transitions haven't fired (or been cancelled) yet
	#[must_use]
	pub fn pending(&self) -> usize {
		self.pending.len()
	}

	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}

	/// Starts the sequence. Returns the new state if this call actually started it; any
	/// activation outside of `Idle` does nothing.
	pub fn activate(&mut self) -> Option<IntroState> {
		if !self.state.accepts_activation() {
			return None;
		}

		self.state = IntroState::Playing;

		for step in self.timings.schedule() {
			let handle = self.scheduler.schedule(step.delay_ms, step.target);
			self.pending.push((step.target, handle));
		}

		Some(self.state)
	}

	/// Called when the timer for `target` fires. Returns the new state if the sequence moved;
	/// anything that isn't the immediate successor of the current state is ignored.
	pub fn elapsed(&mut self, target: IntroState) -> Option<IntroState> {
		// it already fired, so there's nothing left to cancel
		if let Some(idx) = self.pending.iter().position(|(t, _)| *t == target) {
			drop(self.pending.swap_remove(idx));
		}

		if self.state.next() != Some(target) {
			return None;
		}

		self.state = target;
		Some(target)
	}

	/// Cancels everything still scheduled. The state stays wherever it was.
	pub fn teardown(&mut self) {
		for (_, handle) in self.pending.drain(..) {
			self.scheduler.cancel(handle);
		}
	}
}

impl<S: Scheduler> Drop for IntroSequencer<S> {
	fn drop(&mut self) {
		self.teardown();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{cell::RefCell, rc::Rc};

	#[derive(Default)]
	struct ClockInner {
		now: u32,
		next_id: u32,
		// (id, due at, target)
		queue: Vec<(u32, u32, IntroState)>,
	}

	// shared so the test can keep advancing it after the sequencer takes ownership
	#[derive(Clone, Default)]
	struct FakeClock(Rc<RefCell<ClockInner>>);

	impl FakeClock {
		fn advance(&self, ms: u32) -> Vec<IntroState> {
			let mut inner = self.0.borrow_mut();
			inner.now += ms;
			let now = inner.now;

			let mut due = inner.queue.iter()
				.filter(|(_, at, _)| *at <= now)
				.copied()
				.collect::<Vec<_>>();
			due.sort_by_key(|(_, at, _)| *at);

			inner.queue.retain(|(_, at, _)| *at > now);
			due.into_iter().map(|(_, _, target)| target).collect()
		}

		fn queued(&self) -> usize {
			self.0.borrow().queue.len()
		}
	}

	impl Scheduler for FakeClock {
		type Handle = u32;

		fn schedule(&mut self, delay_ms: u32, target: IntroState) -> u32 {
			let mut inner = self.0.borrow_mut();
			let id = inner.next_id;
			inner.next_id += 1;
			let at = inner.now + delay_ms;
			inner.queue.push((id, at, target));
			id
		}

		fn cancel(&mut self, handle: u32) {
			self.0.borrow_mut().queue.retain(|(id, _, _)| *id != handle);
		}
	}

	fn run(clock: &FakeClock, seq: &mut IntroSequencer<FakeClock>, ms: u32) -> Vec<IntroState> {
		clock.advance(ms)
			.into_iter()
			.filter_map(|target| seq.elapsed(target))
			.collect()
	}

	#[test]
	fn activation_schedules_every_step() {
		let clock = FakeClock::default();
		let mut seq = IntroSequencer::new(clock.clone());

		assert_eq!(seq.activate(), Some(IntroState::Playing));
		assert_eq!(seq.pending(), 4);
		assert_eq!(clock.queued(), 4);
	}

	#[test]
	fn repeated_activation_changes_nothing() {
		let clock = FakeClock::default();
		let mut seq = IntroSequencer::new(clock.clone());
		seq.activate();

		for _ in 0..5 {
			assert_eq!(seq.activate(), None);
			assert_eq!(seq.state(), IntroState::Playing);
		}
		assert_eq!(clock.queued(), 4);

		run(&clock, &mut seq, 1800);
		assert_eq!(seq.activate(), None);
		assert_eq!(seq.state(), IntroState::Fading);

		run(&clock, &mut seq, 10_000);
		assert_eq!(seq.activate(), None);
		assert_eq!(seq.state(), IntroState::Done);
	}

	#[test]
	fn a_double_click_starts_playback_once() {
		let clock = FakeClock::default();
		let mut seq = IntroSequencer::new(clock.clone());

		// both clicks land before anything re-renders, so only the sequencer can tell them apart
		let starts = (0..2)
			.filter_map(|_| seq.activate())
			.collect::<Vec<_>>();

		assert_eq!(starts, [IntroState::Playing]);
		assert_eq!(clock.queued(), 4);
	}

	#[test]
	fn visits_every_state_in_order() {
		let clock = FakeClock::default();
		let mut seq = IntroSequencer::new(clock.clone());

		let mut visited = vec![seq.state()];
		visited.extend(seq.activate());
		for _ in 0..300 {
			visited.extend(run(&clock, &mut seq, 10));
		}

		assert_eq!(visited, [
			IntroState::Idle,
			IntroState::Playing,
			IntroState::Fading,
			IntroState::Paper,
			IntroState::Revealing,
			IntroState::Done,
		]);
		assert_eq!(seq.pending(), 0);
		assert_eq!(clock.queued(), 0);
	}

	#[test]
	fn transitions_land_on_their_offsets() {
		let clock = FakeClock::default();
		let mut seq = IntroSequencer::new(clock.clone());
		seq.activate();

		assert!(run(&clock, &mut seq, 1599).is_empty());
		assert_eq!(run(&clock, &mut seq, 1), [IntroState::Fading]);
		assert!(run(&clock, &mut seq, 499).is_empty());
		assert_eq!(run(&clock, &mut seq, 1), [IntroState::Paper]);
		assert_eq!(run(&clock, &mut seq, 150), [IntroState::Revealing]);
		assert!(seq.state().content_visible());
		assert_eq!(run(&clock, &mut seq, 500), [IntroState::Done]);
		assert!(!seq.state().intro_mounted());
	}

	#[test]
	fn one_big_jump_still_steps_through_each_state() {
		let clock = FakeClock::default();
		let mut seq = IntroSequencer::new(clock.clone());
		seq.activate();

		assert_eq!(run(&clock, &mut seq, INTRO_TIMINGS.total_ms()), [
			IntroState::Fading,
			IntroState::Paper,
			IntroState::Revealing,
			IntroState::Done,
		]);
	}

	#[test]
	fn teardown_before_done_leaves_nothing_scheduled() {
		let clock = FakeClock::default();
		let mut seq = IntroSequencer::new(clock.clone());
		seq.activate();
		run(&clock, &mut seq, 2200);
		assert_eq!(seq.state(), IntroState::Paper);

		seq.teardown();

		assert_eq!(seq.pending(), 0);
		assert_eq!(clock.queued(), 0);
		assert!(run(&clock, &mut seq, 10_000).is_empty());
		assert_eq!(seq.state(), IntroState::Paper);
	}

	#[test]
	fn dropping_the_sequencer_cancels_its_timers() {
		let clock = FakeClock::default();
		let mut seq = IntroSequencer::new(clock.clone());
		seq.activate();
		run(&clock, &mut seq, 100);

		drop(seq);

		assert_eq!(clock.queued(), 0);
		assert!(clock.advance(10_000).is_empty());
	}

	#[test]
	fn out_of_order_steps_are_ignored() {
		let mut seq = IntroSequencer::new(FakeClock::default());

		// nothing was ever scheduled
		assert_eq!(seq.elapsed(IntroState::Fading), None);
		assert_eq!(seq.state(), IntroState::Idle);

		seq.activate();
		assert_eq!(seq.elapsed(IntroState::Done), None);
		assert_eq!(seq.elapsed(IntroState::Playing), None);
		assert_eq!(seq.state(), IntroState::Playing);

		assert_eq!(seq.elapsed(IntroState::Fading), Some(IntroState::Fading));
		assert_eq!(seq.elapsed(IntroState::Fading), None);
	}

	#[test]
	fn schedule_matches_the_phase_lengths() {
		let delays = INTRO_TIMINGS.schedule().map(|s| s.delay_ms);
		assert_eq!(delays, [1600, 2100, 2250, 2750]);
		assert!(delays.windows(2).all(|w| w[0] < w[1]));
	}
}
