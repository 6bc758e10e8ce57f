//! Keyboard surface: raw key events → editor actions.

use plankit_core::constants::KEYBOARD_RESIZE_STEP;

/// A key event the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        shift: false,
    };
}

/// What a key press asks the editor to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    Save,
    Undo,
    /// Discard in-progress drawing (Escape).
    Rollback,
    ToggleSnapping,
    Copy,
    Paste,
    ConfirmPaste,
    /// Grow/shrink the selected hole or item (Ctrl+arrows).
    ResizeSelection { delta: f64 },
    /// Grow/shrink the selected wall (`+`/`-`).
    ResizeWall { delta: f64 },
    FlipWall,
    RotateDoor,
    ToggleCatalogPanel,
    /// Space held: show the raster background only.
    BackgroundPreview { active: bool },
}

/// Maps a key press to an action. Returns `None` for keys the editor
/// does not handle.
pub fn action_for(key: Key, mods: Modifiers) -> Option<EditorAction> {
    match (key, mods.ctrl) {
        (Key::Char('s'), true) => Some(EditorAction::Save),
        (Key::Char('z'), true) => Some(EditorAction::Undo),
        (Key::Char('x'), true) => Some(EditorAction::ToggleSnapping),
        (Key::Char('c'), true) => Some(EditorAction::Copy),
        (Key::Char('v'), true) => Some(EditorAction::Paste),
        (Key::Escape, _) => Some(EditorAction::Rollback),
        (Key::Enter, _) => Some(EditorAction::ConfirmPaste),
        (Key::ArrowUp | Key::ArrowRight, true) => Some(EditorAction::ResizeSelection {
            delta: KEYBOARD_RESIZE_STEP,
        }),
        (Key::ArrowDown | Key::ArrowLeft, true) => Some(EditorAction::ResizeSelection {
            delta: -KEYBOARD_RESIZE_STEP,
        }),
        (Key::Char('+'), false) => Some(EditorAction::ResizeWall {
            delta: KEYBOARD_RESIZE_STEP,
        }),
        (Key::Char('-'), false) => Some(EditorAction::ResizeWall {
            delta: -KEYBOARD_RESIZE_STEP,
        }),
        (Key::Char('f'), false) => Some(EditorAction::FlipWall),
        (Key::Char('r'), false) => Some(EditorAction::RotateDoor),
        (Key::Char('l'), false) => Some(EditorAction::ToggleCatalogPanel),
        (Key::Space, _) => Some(EditorAction::BackgroundPreview { active: true }),
        _ => None,
    }
}

/// Maps a key release; only Space (background preview) cares.
pub fn action_for_release(key: Key) -> Option<EditorAction> {
    match key {
        Key::Space => Some(EditorAction::BackgroundPreview { active: false }),
        _ => None,
    }
}

/// Actions the editor core cannot complete on its own; the shell owns
/// the asynchronous persistence edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellRequest {
    Save,
}
