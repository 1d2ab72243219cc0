use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Where the frontend fetches the content bundle from
pub const CONTENT_BUNDLE_URL: &str = "/content.json";
/// If nobody has tapped the intro by then, the bundle gets fetched anyway
pub const CONTENT_PREFETCH_DELAY_MS: u32 = 1500;

static BUNDLED_CONTENT: &str = include_str!("../../assets/content.json");

/// Everything on the page below the hero that isn't just event constants
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageContent {
	pub timeline: Vec<TimelineItem>,
	pub location: Location,
	pub contact: Contact,
	pub gift: GiftSuggestion,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TimelineItem {
	pub time: String,
	pub title: String,
	pub icon: TimelineIcon,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineIcon {
	DoorOpen,
	Users,
	Scroll,
	CakeSlice,
	Camera,
	Clock,
	Car,
	Church,
	Sparkles,
	Utensils,
	Moon,
	PartyPopper,
	Hand,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Location {
	pub name: String,
	pub address: String,
	pub town: String,
	pub parking_note: String,
	pub map_title: String,
	pub directions_url: String,
	pub place_url: String,
	pub embed_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Contact {
	pub title: String,
	pub body: String,
	pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GiftSuggestion {
	pub title: String,
	pub teaser: String,
	pub details: String,
}

impl PageContent {
	/// The copy of the bundle that's compiled in, so the page always has something to render
	/// even if fetching the real one fails
	pub fn bundled() -> &'static Self {
		static CONTENT: OnceLock<PageContent> = OnceLock::new();

		// the file is checked by the tests below, so this can't fail at runtime
		CONTENT.get_or_init(|| serde_json::from_str(BUNDLED_CONTENT).unwrap())
	}
}

/// Where we are with fetching the content bundle. A failed fetch goes back to being requestable,
/// so whichever trigger comes next gets another shot at it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BundleLoad {
	#[default]
	NotRequested,
	InFlight,
	Loaded,
	Failed,
}

impl BundleLoad {
	/// Returns whether the caller should actually send a request, marking it in flight if so
	pub fn begin(&mut self) -> bool {
		match self {
			Self::NotRequested | Self::Failed => {
				*self = Self::InFlight;
				true
			},
			Self::InFlight | Self::Loaded => false,
		}
	}

	pub fn finish<T, E>(&mut self, result: &Result<T, E>) {
		*self = if result.is_ok() { Self::Loaded } else { Self::Failed };
	}
}
