/// Compute the greatest common divisor of two signed integers.
/// The result is non-negative.
pub fn gcd_signed(mut a: i64, mut b: i64) -> i64 {
    let mut c;
    while a != 0 {
        c = a;
        // only wraps when i64::MIN % -1 and that still yields 0
        a = b.wrapping_rem(a);
        b = c;
    }
    b.abs()
}

/// Compute the least common multiple of two positive integers.
pub fn lcm(a: i64, b: i64) -> i64 {
    a / gcd_signed(a, b) * b
}

#[cfg(test)]
mod test {
    use super::{gcd_signed, lcm};

    #[test]
    fn gcd() {
        assert_eq!(gcd_signed(54, 90), 18);
        assert_eq!(gcd_signed(162, 270), 54);
        assert_eq!(gcd_signed(1, 1000), 1);
        assert_eq!(gcd_signed(12, 36), 12);
        assert_eq!(gcd_signed(342, 66), 6);
        assert_eq!(gcd_signed(-12, 16), 4);
        assert_eq!(gcd_signed(0, 7), 7);
        assert_eq!(gcd_signed(128, 336), 16);
    }

    #[test]
    fn least_common_multiple() {
        assert_eq!(lcm(8, 10), 40);
        assert_eq!(lcm(7, 21), 21);
        assert_eq!(lcm(7, 13), 91);
        assert_eq!(lcm(128, 336), 2688);
        assert_eq!(lcm(12, 16), 48);
    }
}
