// ---------------------------------------------------------------------------
// Key — windowing-library-independent key representation
// ---------------------------------------------------------------------------

/// A keyboard key, independent of any windowing library.
///
/// `main.rs` maps `winit::keyboard::KeyCode` → `Key`; the rest of the
/// input handling works purely with this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    V,
    Q,
    Escape,
}

impl Key {
    pub fn from_winit(code: winit::keyboard::KeyCode) -> Option<Self> {
        use winit::keyboard::KeyCode;
        match code {
            KeyCode::KeyV => Some(Key::V),
            KeyCode::KeyQ => Some(Key::Q),
            KeyCode::Escape => Some(Key::Escape),
            _ => None,
        }
    }
}

/// High-level action produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    ToggleVignette,
    Quit,
}

/// Translate a `Key` press into an `InputAction`.
pub fn on_key(key: Key) -> InputAction {
    match key {
        Key::V => InputAction::ToggleVignette,
        Key::Q | Key::Escape => InputAction::Quit,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
