//! Platform-agnostic keyboard input consumed by the camera controller.

/// Keys the controller reacts to. Everything else maps to
/// [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    Left,
    /// Up arrow.
    Up,
    /// Right arrow.
    Right,
    /// Down arrow.
    Down,
    /// Any key the controller ignores.
    Other,
}

/// A key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Which key changed.
    pub key: Key,
    /// `true` for press, `false` for release.
    pub pressed: bool,
}

impl KeyEvent {
    /// Press of `key`.
    #[must_use]
    pub fn press(key: Key) -> Self {
        Self { key, pressed: true }
    }

    /// Release of `key`.
    #[must_use]
    pub fn release(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}
