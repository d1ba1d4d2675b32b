//! Long-lived service pieces: the health endpoint and the channel relay.

pub mod health;
pub mod relay;
