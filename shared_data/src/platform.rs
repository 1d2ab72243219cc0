/// What we know about the visitor's device, as reported by the browser. Both strings are matched
/// case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
	pub user_agent: String,
	pub platform: String,
	pub touch: bool,
}

/// How the "add to calendar" button should behave on this device
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CalendarKind {
	#[default]
	Google,
	Ics,
	Outlook,
}

impl CalendarKind {
	#[must_use]
	pub fn detect(caps: &Capabilities) -> Self {
		let agent = caps.user_agent.to_lowercase();
		let platform = caps.platform.to_lowercase();
		let mac = platform.contains("mac");

		// iPads report themselves as a mac these days, so the touch check is the only thing that
		// gives them away
		if ["iphone", "ipad", "ipod"].iter().any(|d| agent.contains(d)) || (mac && caps.touch) {
			Self::Ics
		} else if agent.contains("android") {
			Self::Google
		} else if mac {
			Self::Ics
		} else if platform.contains("win") {
			Self::Outlook
		} else {
			Self::Google
		}
	}
}

/// Whether a `KeyboardEvent.key` should press an element with `role="button"`, the way it would
/// press a real `<button>`
#[must_use]
pub fn presses_button(key: &str) -> bool {
	matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn enter_and_space_press_buttons() {
		assert!(presses_button("Enter"));
		assert!(presses_button(" "));
		for key in ["Escape", "Tab", "a", "Spacebar", "enter", ""] {
			assert!(!presses_button(key), "{key:?}");
		}
	}

	fn caps(user_agent: &str, platform: &str, touch: bool) -> Capabilities {
		Capabilities { user_agent: user_agent.into(), platform: platform.into(), touch }
	}

	#[test]
	fn apple_mobile_gets_a_file() {
		let iphone = caps("Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X)", "iPhone", true);
		assert_eq!(CalendarKind::detect(&iphone), CalendarKind::Ics);

		// iPadOS desktop-class browsing
		let ipad = caps("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)", "MacIntel", true);
		assert_eq!(CalendarKind::detect(&ipad), CalendarKind::Ics);
	}

	#[test]
	fn android_beats_everything_after_it() {
		let pixel = caps("Mozilla/5.0 (Linux; Android 14; Pixel 8)", "Linux armv81", true);
		assert_eq!(CalendarKind::detect(&pixel), CalendarKind::Google);

		// silly, but the user agent wins over the platform string
		let odd = caps("Mozilla/5.0 (Linux; Android 14)", "Win32", false);
		assert_eq!(CalendarKind::detect(&odd), CalendarKind::Google);
	}

	#[test]
	fn desktops() {
		let mac = caps("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4)", "MacIntel", false);
		assert_eq!(CalendarKind::detect(&mac), CalendarKind::Ics);

		let windows = caps("Mozilla/5.0 (Windows NT 10.0; Win64; x64)", "Win32", false);
		assert_eq!(CalendarKind::detect(&windows), CalendarKind::Outlook);

		let linux = caps("Mozilla/5.0 (X11; Linux x86_64)", "Linux x86_64", false);
		assert_eq!(CalendarKind::detect(&linux), CalendarKind::Google);
	}

	#[test]
	fn nothing_known_falls_back_to_google() {
		assert_eq!(CalendarKind::detect(&Capabilities::default()), CalendarKind::Google);
	}
}
