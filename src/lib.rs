//! # Lifeweeks Bot
//!
//! A Telegram bot that records a user's birth date and reports how many
//! weeks old they are, on demand or via a daily morning push.
//!
//! ## Features
//! - Record a birth date by sending a `YYYY-MM-DD` message
//! - "Get Week Number" inline button replies with the current week count
//! - Daily reminder at 09:00 Europe/Prague for every registered user
//! - All state is memory-resident and lost on restart

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Background services like the daily reminder broadcast
pub mod services;
/// In-memory birthday storage
pub mod store;
/// Utility functions for date validation, week math, and reply formatting
pub mod utils;
