//! Hotkey system
//!
//! Maps raw key presses from the presentation layer to timeline actions.
//!
//! # Architecture
//!
//! - **Key**: the subset of keys the timeline reacts to
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! Actions are executed by `TimelineStore::run_hotkey`.

/// A key press as reported by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Character(String),
    Delete,
    Backspace,
    Escape,
    Home,
}

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    // ═══════════════════════════════════════════════════════════════
    // Timeline Zoom
    // ═══════════════════════════════════════════════════════════════
    /// Zoom in on the timeline (increase pixels per second)
    TimelineZoomIn,
    /// Zoom out on the timeline (decrease pixels per second)
    TimelineZoomOut,

    // ═══════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════
    /// Toggle playback.
    PlayPause,
    /// Stop playback and rewind.
    Stop,
    /// Jump the playhead to zero.
    SeekStart,

    // ═══════════════════════════════════════════════════════════════
    // Editing
    // ═══════════════════════════════════════════════════════════════
    /// Split the selected clip at the playhead.
    SplitAtPlayhead,
    /// Remove the selected clip.
    DeleteSelection,
    /// Clear clip and track selection.
    ClearSelection,
    /// Save the current project.
    SaveProject,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether any clips are selected
    pub has_selection: bool,
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(key: &Key, ctrl: bool, meta: bool, context: &HotkeyContext) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    // ═══════════════════════════════════════════════════════════════
    // Global Hotkeys (work regardless of context)
    // ═══════════════════════════════════════════════════════════════
    match key {
        Key::Character(c) if (ctrl || meta) && c.eq_ignore_ascii_case("s") => {
            return HotkeyResult::Action(HotkeyAction::SaveProject);
        }
        Key::Character(c) if c == "+" || c == "=" => {
            return HotkeyResult::Action(HotkeyAction::TimelineZoomIn)
        }
        Key::Character(c) if c == "-" => return HotkeyResult::Action(HotkeyAction::TimelineZoomOut),
        Key::Character(c) if c == " " => return HotkeyResult::Action(HotkeyAction::PlayPause),
        Key::Character(c) if c.eq_ignore_ascii_case("k") => {
            return HotkeyResult::Action(HotkeyAction::Stop)
        }
        Key::Home => return HotkeyResult::Action(HotkeyAction::SeekStart),
        _ => {}
    }

    // ═══════════════════════════════════════════════════════════════
    // Selection Hotkeys
    // ═══════════════════════════════════════════════════════════════
    if context.has_selection {
        match key {
            Key::Character(c) if !ctrl && !meta && c.eq_ignore_ascii_case("s") => {
                return HotkeyResult::Action(HotkeyAction::SplitAtPlayhead);
            }
            Key::Delete | Key::Backspace => {
                return HotkeyResult::Action(HotkeyAction::DeleteSelection)
            }
            Key::Escape => return HotkeyResult::Action(HotkeyAction::ClearSelection),
            _ => {}
        }
    }

    HotkeyResult::NoMatch
}
