//! Report formatting
//!
//! Presenters turn player, combat and mission state into the fixed-format
//! lines the bridge prints. Commands decide what happened; presenters only
//! decide how it reads.

pub mod presenters;
