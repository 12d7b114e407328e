pub mod config;
pub mod engine;
pub mod input;
pub mod shortcuts;
pub mod tools;

pub use config::EngineConfig;
pub use engine::{PaintEngine, Response, ShortcutEffect};
pub use input::InputEvent;
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use tools::{ShapeKind, ToolConfig, ToolEffect, ToolKind, ToolPhase, ToolStateMachine};
