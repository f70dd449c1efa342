/// Candidates evaluated per parallel task
pub const DEFAULT_CHUNK_SIZE: u64 = 4096;
