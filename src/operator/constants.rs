/// Largest magnitude the calculator display can show.
pub const DISPLAY_LIMIT: i64 = 999_999;
