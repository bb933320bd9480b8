/// Least non-negative residue of `value` modulo `len`, so negative inputs wrap
/// around instead of producing a negative remainder.
///
/// `len` must be non-zero.
#[must_use]
pub fn wrap_index(value: i64, len: usize) -> usize {
    value.rem_euclid(len as i64) as usize
}
