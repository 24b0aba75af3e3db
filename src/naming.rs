//! Name allocation shared by everything that projects named expressions

use std::collections::HashSet;

/// Return `candidate`, or the first `candidate{n}` (n = 1, 2, ...) that is
/// not in `used`.
pub fn find_unique_name(used: &HashSet<String>, candidate: &str) -> String {
    if !used.contains(candidate) {
        return candidate.to_string();
    }
    (1u64..)
        .map(|n| format!("{}{}", candidate, n))
        .find(|name| !used.contains(name))
        .unwrap_or_else(|| candidate.to_string())
}
