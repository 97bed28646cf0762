/// Reduces `value` into `[0, modulus)`.
pub(crate) fn reduce(value: u32, modulus: u32) -> u32 {
    value % modulus
}

/// Computes `lhs · rhs mod modulus` without overflowing `u32`.
pub(crate) fn mul_mod(lhs: u32, rhs: u32, modulus: u32) -> u32 {
    ((u64::from(lhs) * u64::from(rhs)) % u64::from(modulus)) as u32
}

/// Computes the inverse of `t` modulo `modulus` by exhaustive search over `[1, modulus)`.
///
/// Returns `None` when `t` is a multiple of the modulus or when no inverse
/// exists (which only happens for composite moduli).
pub fn mod_inverse(t: u32, modulus: u32) -> Option<u32> {
    if modulus < 2 {
        return None;
    }
    let t = u64::from(reduce(t, modulus));
    let m = u64::from(modulus);
    (1..modulus).find(|&v| (t * u64::from(v)) % m == 1)
}
