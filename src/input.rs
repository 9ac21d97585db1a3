//! Input mapping
//!
//! Every input channel boils down to a single intent: jump. The browser layer
//! classifies raw events here and calls `sim::jump` for each hit.

/// Where a jump came from (for logging only)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpSource {
    Keyboard,
    Mouse,
    Touch,
}

/// `KeyboardEvent.code` values that flap
pub const JUMP_KEYS: [&str; 3] = ["Space", "ArrowUp", "KeyX"];

/// Does this physical key code trigger a jump?
pub fn is_jump_key(code: &str) -> bool {
    JUMP_KEYS.contains(&code)
}

/// Classify a keyboard event by its `code`
pub fn classify_key(code: &str) -> Option<JumpSource> {
    is_jump_key(code).then_some(JumpSource::Keyboard)
}
