pub mod reminder;
pub mod user;
pub mod whitelist;

pub use reminder::*;
pub use user::*;
pub use whitelist::*;
