pub mod resolve_nick;

pub use resolve_nick::{ResolveNick, ResolveNickError};
