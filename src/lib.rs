//! Minesweeper Board Engine
//!
//! This library owns the minefield grid: mine placement, adjacency counts,
//! the flood-fill reveal, flag toggling and the win/loss rules. It knows
//! nothing about screens, widgets or input devices; a presentation layer
//! constructs a [`Field`], drives it with [`Field::reveal`] and
//! [`Field::toggle_flag`], and polls snapshots and counters to render.
//!
//! ## Usage
//!
//! ```rust
//! use minesweeper_engine::{Field, GameStatus, GameType, Pos};
//!
//! # fn main() -> Result<(), minesweeper_engine::FieldError> {
//! // One field per game; start a new game by building a new field.
//! let mut field = Field::new(GameType::EASY.params())?;
//!
//! field.reveal(Pos { x: 4, y: 4 })?;
//! field.toggle_flag(Pos { x: 0, y: 0 })?;
//!
//! match field.status() {
//!     GameStatus::Lost => println!("Boom!"),
//!     GameStatus::Won => println!("Field cleared!"),
//!     GameStatus::InProgress => {
//!         let stats = field.stats();
//!         println!(
//!             "{} of {} safe squares revealed, {} flags placed",
//!             stats.revealed,
//!             stats.squares - stats.mines,
//!             stats.flagged
//!         );
//!     }
//! }
//!
//! // Render from per-square views; hidden mines stay hidden until the
//! // game is decided.
//! let rows = field.rows();
//! assert_eq!(rows.len(), 10);
//! # Ok(())
//! # }
//! ```
//!
//! Boards come from a [`GameType`] preset or from explicit [`FieldParams`],
//! which also allow a fixed mine layout for reproducible boards. For
//! deterministic random boards, seed the RNG yourself and use
//! [`Field::with_rng`].

mod data;
mod error;
mod logic;
mod model;

pub use error::FieldError;
pub use logic::Field;
pub use model::{
    FieldParams, FieldStats, GameStatus, GameType, MinePlacement, Pos, SquareView,
};
