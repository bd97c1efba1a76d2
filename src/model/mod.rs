mod bracket;
mod filter;
mod record;
mod session;

pub use bracket::*;
pub use filter::*;
pub use record::*;
pub use session::*;
