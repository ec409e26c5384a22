//! Super Star Trek
//!
//! A Rust implementation of the classic 1978 Super Star Trek game.
//!
//! # Overview
//!
//! The player commands the USS Enterprise on a mission to destroy every
//! Klingon battle cruiser in an 8x8 galaxy of quadrants before the
//! stardates run out. Each bridge command (NAV, SRS, LRS, PHA, TOR, SHE,
//! DAM, COM, XXX) is a function over the galaxy, a random source and a
//! pair of I/O handles, so whole sessions can be replayed from a seed or
//! a scripted stream.
//!
//! # Modules
//!
//! - [`game_engine`] - Game state machine and game-over logic
//! - [`models`] - Domain models (Galaxy, Player, quadrants, positions)
//! - [`services`] - Bridge commands (combat, navigation, scans, computer)
//! - [`random`] - Seeded and scripted random sources
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of reports and mission summaries
//! - [`cli`] - Command line arguments
//!
//! # Example
//!
//! ```rust,no_run
//! use supertrek::io::TerminalIO;
//! use supertrek::Game;
//!
//! let mut game = Game::new(42);
//! game.run(&mut TerminalIO, &mut TerminalIO).unwrap();
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod random;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{DefeatReason, GameEngine, GameState};
pub use services::game::{Command, Game};
