mod chat;
mod core;
mod sanitize;

pub use chat::{CONTEXT_TURNS, build_messages, chat};
pub use core::{CompletionError, Message, Role, completion};
pub use sanitize::sanitize_reply;
