/// Strips the MF2 vocabulary prefix: `h-entry` → `entry`, `h-card` →
/// `card`, `h-feed` → `feed`. Anything without the prefix is returned
/// unchanged.
pub fn strip_prefix(kind: &str) -> &str {
    kind.strip_prefix("h-").unwrap_or(kind)
}
