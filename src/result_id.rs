//! Identifiers for inline query results.

use rand::Rng;

/// Generate a fresh identifier for an inline query result.
///
/// The identifier is five hyphen-separated groups of lowercase hex digits
/// (8-4-4-4-12). Telegram only needs it to be unique within one answer.
pub fn new_result_id() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        rng.gen::<u32>(),
        rng.gen::<u16>(),
        rng.gen::<u16>(),
        rng.gen::<u16>(),
        rng.gen::<u64>() & 0xffff_ffff_ffff
    )
}
