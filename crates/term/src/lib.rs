//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders a
//! [`core::GameSnapshot`] into a framebuffer that is then flushed to the
//! terminal with crossterm, diffing against the previous frame.
//!
//! - `core` stays deterministic and free of I/O
//! - [`GameView`] is pure and unit-testable
//! - Tile colors follow [`palette`], a function of `log2(value)`

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use falling_2048_core as core;
pub use falling_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
