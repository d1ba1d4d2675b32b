//! # College Info Bot
//!
//! A Telegram bot for a college: role-based menus for students, teachers and
//! visitors, schedule relayed from a channel, and a guided reminder flow.
//!
//! ## Features
//! - Registration with email whitelist checks for students and teachers
//! - Per-role main menus with college info, news, contacts and FAQ
//! - Schedule and admission-dates delivery by forwarding channel posts
//! - Year/month/day reminder picker with time capture
//! - Persistent storage with SQLite

/// Bot command handlers, menus and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and schema setup
pub mod database;
/// Supporting services: health endpoints and channel relay
pub mod services;
/// Utility functions for calendar math and input validation
pub mod utils;
