/// Classic 31-multiplier string hash over UTF-16 code units with 32-bit
/// signed wraparound, returned as its absolute value.
///
/// Outputs must stay identical to previously deployed assignments: changing
/// this function reshuffles every running split test.
///
/// `i32::MIN` maps to `2^31`, which is why the result is `u32`.
pub fn hash_to_number(input: &str) -> u32 {
    let hash = input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)));
    hash.unsigned_abs()
}
