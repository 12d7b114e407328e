//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s, following the
//! classic paint-program layout:
//! - `1`–`8` pick a tool in selector order
//! - `+` / `-` grow or shrink the brush
//! - ⌘/Ctrl + Z, C, S = undo, clear, export

use crate::tools::ToolKind;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SelectTool(ToolKind),
    GrowBrush,
    ShrinkBrush,
    Undo,
    Clear,
    /// Ask the host to hand the canvas to its encoder.
    Export,
}

/// Resolves key events into shortcut actions.
///
/// On macOS `meta` is ⌘; on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the logical key value (e.g. `"z"`, `"+"`, `"4"`). Returns
    /// `None` if the combo has no binding.
    pub fn resolve(key: &str, ctrl: bool, _shift: bool, alt: bool, meta: bool) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "c" | "C" => Some(ShortcutAction::Clear),
                "s" | "S" => Some(ShortcutAction::Export),
                _ => None,
            };
        }

        if alt {
            return None;
        }

        // Shift is ignored: `+` usually arrives shifted on main-row keyboards.
        match key {
            "+" | "=" => Some(ShortcutAction::GrowBrush),
            "-" | "_" => Some(ShortcutAction::ShrinkBrush),
            _ => {
                let digit = key.parse::<i64>().ok().filter(|d| (1..=8).contains(d))?;
                ToolKind::from_index(digit - 1).map(ShortcutAction::SelectTool)
            }
        }
    }
}
