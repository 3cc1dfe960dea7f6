//! Bit manipulation of machine words, the `LOWORD`/`HIWORD` family.

/// Returns the low-order `u16` of the `u32`.
pub const fn loword(v: u32) -> u16 {
    (v & 0xffff) as u16
}

/// Returns the high-order `u16` of the `u32`.
pub const fn hiword(v: u32) -> u16 {
    ((v >> 16) & 0xffff) as u16
}

/// Returns the low-order `u8` of the `u16`.
pub const fn lobyte(v: u16) -> u8 {
    (v & 0xff) as u8
}

/// Returns the high-order `u8` of the `u16`.
pub const fn hibyte(v: u16) -> u8 {
    ((v >> 8) & 0xff) as u8
}

/// Returns the low-order `u32` of the `u64`.
pub const fn lodword(v: u64) -> u32 {
    (v & 0xffff_ffff) as u32
}

/// Returns the high-order `u32` of the `u64`.
pub const fn hidword(v: u64) -> u32 {
    ((v >> 32) & 0xffff_ffff) as u32
}

/// Builds a `u16` from two `u8`.
pub const fn make_word(lo: u8, hi: u8) -> u16 {
    (lo as u16) | ((hi as u16) << 8)
}

/// Builds a `u32` from two `u16`, the `MAKELONG` macro.
pub const fn make_dword(lo: u16, hi: u16) -> u32 {
    (lo as u32) | ((hi as u32) << 16)
}

/// Builds a `u64` from two `u32`.
pub const fn make_qword(lo: u32, hi: u32) -> u64 {
    (lo as u64) | ((hi as u64) << 32)
}

/// Multiplies two 32-bit values and divides the 64-bit result by a third,
/// rounding to the nearest integer, half away from zero. Same as `MulDiv`.
///
/// Returns `-1` if `denominator` is zero or the result overflows `i32`.
pub const fn mul_div(number: i32, numerator: i32, denominator: i32) -> i32 {
    if denominator == 0 {
        return -1;
    }
    let product = number as i64 * numerator as i64;
    let den = denominator as i64;
    let half = den.abs() / 2;
    // Integer division truncates toward zero, so growing the magnitude of the
    // dividend by half the divisor rounds half away from zero.
    let biased = if product < 0 { product - half } else { product + half };
    let q = biased / den;
    if q > i32::MAX as i64 || q < i32::MIN as i64 {
        -1
    } else {
        q as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_and_join() {
        let v = make_dword(0x1234, 0xabcd);
        assert_eq!(v, 0xabcd_1234);
        assert_eq!(loword(v), 0x1234);
        assert_eq!(hiword(v), 0xabcd);
        assert_eq!(lobyte(0x1234), 0x34);
        assert_eq!(hibyte(0x1234), 0x12);
        assert_eq!(make_word(0x34, 0x12), 0x1234);
        let q = make_qword(1, 2);
        assert_eq!(q, 0x0000_0002_0000_0001);
        assert_eq!((lodword(q), hidword(q)), (1, 2));
    }

    #[test]
    fn test_mul_div_rounding() {
        assert_eq!(mul_div(10, 3, 4), 8); // 7.5
        assert_eq!(mul_div(10, 1, 4), 3); // 2.5
        assert_eq!(mul_div(-10, 1, 4), -3);
        assert_eq!(mul_div(10, -1, 4), -3);
        assert_eq!(mul_div(-10, -1, 4), 3);
        assert_eq!(mul_div(10, 1, -4), -3);
        assert_eq!(mul_div(9, 1, 4), 2);
        assert_eq!(mul_div(96, 144, 96), 144);
    }

    #[test]
    fn test_mul_div_errors() {
        assert_eq!(mul_div(5, 5, 0), -1);
        assert_eq!(mul_div(i32::MAX, i32::MAX, 1), -1);
        assert_eq!(mul_div(i32::MAX, 2, 2), i32::MAX);
    }
}
