//! Telegram-facing layer: commands, callbacks, plain-text routing and the
//! screens they render.

pub mod actions;
pub mod chat;
pub mod commands;
pub mod content;
pub mod handlers;
pub mod session;
pub mod views;
