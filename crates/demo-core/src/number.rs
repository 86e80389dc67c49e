//! JS number conversions at the compute boundary.

const TWO_32: f64 = 4_294_967_296.0;

/// ECMAScript `ToInt32`: truncate, wrap modulo 2^32, reinterpret as signed.
/// `NaN` and infinities become `0`.
pub fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let wrapped = value.trunc().rem_euclid(TWO_32);
    // `wrapped` is in [0, 2^32) so the u32 cast is exact
    wrapped as u32 as i32
}
