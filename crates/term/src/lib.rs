//! Terminal renderer module.
//!
//! This is the one concrete renderer for the game. The core never draws;
//! it exposes a per-frame snapshot and this crate maps it into a simple
//! framebuffer that is flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Resolve all localized display strings here, never in the core
//! - Diff frames so redraws stay cheap at the 50ms timestep

pub mod fb;
pub mod lang;
pub mod renderer;
pub mod screen_view;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use screen_view::{ScreenView, Viewport};
