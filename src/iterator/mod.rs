pub mod core;
pub mod state;

pub use self::core::{SequenceIterator, candidate_count, sequences};
pub use state::Odometer;
