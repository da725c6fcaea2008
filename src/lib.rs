//! # Connect Four
//!
//! A two-player Connect Four engine with a terminal front end built with
//! Ratatui, and a plain console mode.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win detection, turn-owning session
//! - [`input`] — Parsing of raw player text into columns and tokens
//! - [`ui`] — Terminal UI and console driver
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
