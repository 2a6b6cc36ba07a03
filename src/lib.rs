//! # Slot Poll Bot
//!
//! A Telegram bot that finds a time everybody in a chat can make.
//!
//! ## Features
//! - Propose an event with several candidate slots (`/event Sync | 31 января 20:00, 1 февраля 18:00`)
//! - Participants exclude slots that do not work for them, or add new ones
//! - `/done` lists the slots nobody excluded
//! - Russian month names, years inferred from the current date

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Errors returned by scheduling operations
pub mod error;
/// Event coordinator and health endpoints
pub mod services;
/// Event model and storage backends
pub mod store;
/// Utility functions for datetime, validation, and formatting
pub mod utils;
