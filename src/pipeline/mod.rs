//! Folding a key sequence over the starting value

mod core;
mod trace;

pub use self::core::Pipeline;
pub use trace::{Abort, Trace};
