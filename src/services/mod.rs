//! Bridge commands
//!
//! One module per command family. Each command takes the galaxy by
//! exclusive reference for its whole duration, plus the random stream and
//! I/O handles it needs.

pub mod combat;
pub mod computer;
pub mod game;
pub mod navigation;
pub mod proximity;
pub mod scan;
