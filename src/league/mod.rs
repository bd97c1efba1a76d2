pub(crate) mod bracket;
pub(crate) mod search;
mod session;
