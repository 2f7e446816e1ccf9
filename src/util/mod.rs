pub mod linalg;

/// Integer helpers over `i32`.
pub mod gg_int {
    use crate::core::prelude::*;

    pub fn min(a: i32, b: i32) -> i32 {
        if a < b {
            a
        } else {
            b
        }
    }

    pub fn max(a: i32, b: i32) -> i32 {
        if a > b {
            a
        } else {
            b
        }
    }

    /// Limits `x` to `[min, max]`.
    ///
    /// Assumes `min <= max`. Unlike [`i32::clamp`] this does not panic otherwise: the lower bound
    /// is tested first, so the result is deterministic but meaningless.
    ///
    /// # Examples
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(gg_int::clamp(5, 0, 10), 5);
    /// assert_eq!(gg_int::clamp(-1, 0, 10), 0);
    /// assert_eq!(gg_int::clamp(11, 0, 10), 10);
    /// ```
    pub fn clamp(x: i32, min: i32, max: i32) -> i32 {
        if x < min {
            return min;
        }
        if x > max {
            return max;
        }
        x
    }

    /// Returns `|a|`.
    ///
    /// # Panics
    /// If `a == i32::MIN`, whose magnitude does not fit in an `i32`.
    pub fn abs(a: i32) -> i32 {
        check_ne!(a, i32::MIN);
        if a >= 0 {
            a
        } else {
            -a
        }
    }

    /// Euclidean modulus: always returns `0 <= mod < base` for positive `base`.
    ///
    /// # Examples
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(gg_int::eucmod(7, 3), 1);
    /// assert_eq!(gg_int::eucmod(-7, 3), 2);
    /// assert_eq!(gg_int::eucmod(-3, 3), 0);
    /// ```
    ///
    /// # Panics
    /// If `base == 0`.
    pub fn eucmod(a: i32, base: i32) -> i32 {
        let m = a % base;
        if m >= 0 {
            m
        } else {
            m + base
        }
    }

    /// Returns `floor(log2(n))`, or 0 if `n == 1`.
    ///
    /// Expects `n >= 1`; anything smaller logs a warning and returns 0.
    pub fn log2(n: i32) -> i32 {
        if n <= 0 {
            warn!("gg_int::log2(): expected positive input, got {n}");
            return 0;
        }
        // ilog2() of a positive i32 is at most 30.
        n.ilog2() as i32
    }

    pub fn is_pow2(n: i32) -> bool {
        n > 0 && (n & (n - 1)) == 0
    }
}

/// Float helpers over `f32`.
///
/// All of these follow IEEE-754 semantics; NaN and infinities are passed through rather than
/// intercepted.
pub mod gg_float {
    use crate::core::prelude::*;

    pub fn abs(x: f32) -> f32 {
        if x < 0.0 {
            -x
        } else {
            x
        }
    }

    /// Returns `1.0` for positive numbers and `-1.0` for negative numbers, including signed zero.
    ///
    /// # Examples
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(gg_float::sign(0.0), 1.0);
    /// assert_eq!(gg_float::sign(-0.0), -1.0);
    /// assert_eq!(gg_float::sign(-3.5), -1.0);
    /// ```
    pub fn sign(x: f32) -> f32 {
        1.0_f32.copysign(x)
    }

    /// Euclidean modulus for floats. The remainder takes the sign of `a` (as C's `fmod`), and
    /// negative remainders are shifted up by `base`.
    ///
    /// Note that a tiny negative remainder may round up to exactly `base`.
    pub fn eucmod(a: f32, base: f32) -> f32 {
        let m = a % base;
        if m >= 0.0 {
            m
        } else {
            m + base
        }
    }

    /// Returns whether `|a - b| <= EPSILON`.
    pub fn near(a: f32, b: f32) -> bool {
        near_eps(a, b, EPSILON)
    }

    pub fn near_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() <= epsilon
    }

    /// Limits `x` to `[min, max]`.
    ///
    /// Assumes `min <= max`; see [`clamp_auto`] for a version without that requirement. Unlike
    /// [`f32::clamp`] this never panics.
    pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
        if x < min {
            return min;
        }
        if x > max {
            return max;
        }
        x
    }

    /// Limits `x` to the range spanned by `a` and `b`, in either order.
    ///
    /// # Examples
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(gg_float::clamp_auto(12.0, 10.0, 0.0), 10.0);
    /// assert_eq!(gg_float::clamp_auto(12.0, 0.0, 10.0), 10.0);
    /// assert_eq!(gg_float::clamp_auto(-2.0, 10.0, 0.0), 0.0);
    /// ```
    pub fn clamp_auto(x: f32, a: f32, b: f32) -> f32 {
        clamp(x, a.min(b), a.max(b))
    }

    /// Returns 0 if `-eps < x < eps`, otherwise `x` unchanged.
    pub fn chop(x: f32, eps: f32) -> f32 {
        if -eps < x && x < eps {
            0.0
        } else {
            x
        }
    }

    /// Maps `x` linearly from `[x_min, x_max]` onto `[y_min, y_max]`.
    ///
    /// # Examples
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(gg_float::rescale(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
    /// assert_eq!(gg_float::rescale(0.25, 0.0, 1.0, 1.0, -1.0), 0.5);
    /// ```
    pub fn rescale(x: f32, x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> f32 {
        y_min + (x - x_min) / (x_max - x_min) * (y_max - y_min)
    }

    /// A linear interpolation between two values.
    ///
    /// `frac` is not clamped, so values outside [0, 1] extrapolate.
    ///
    /// # Examples
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(gg_float::cross(0.0, 10.0, 0.5), 5.0);
    /// assert_eq!(gg_float::cross(0.0, 10.0, 2.0), 20.0);
    /// assert_eq!(gg_float::cross(0.0, 10.0, -0.5), -5.0);
    /// ```
    #[doc(alias = "lerp")]
    pub fn cross(a: f32, b: f32, frac: f32) -> f32 {
        a + frac * (b - a)
    }

    /// Linearly interpolates the samples `p` at fractional index `x`.
    ///
    /// Interpolating exactly at the last index treats the element after it as 0, so that
    /// `interp(p, (p.len() - 1) as f32)` is the last sample.
    ///
    /// # Panics
    /// If `x` is negative or NaN, or `floor(x)` is not a valid index into `p`.
    /// Use [`try_interp`] for a checked version.
    ///
    /// # Examples
    /// ```
    /// use ggmath::core::prelude::*;
    /// let p = [0.0, 10.0, 30.0];
    /// assert_eq!(gg_float::interp(&p, 0.5), 5.0);
    /// assert_eq!(gg_float::interp(&p, 1.25), 15.0);
    /// assert_eq!(gg_float::interp(&p, 2.0), 30.0);
    /// ```
    pub fn interp(p: &[f32], x: f32) -> f32 {
        check!(x >= 0.0);
        let xi = x.floor();
        let xf = x - xi;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let i = xi as usize;
        let next = p.get(i + 1).copied().unwrap_or(0.0);
        cross(p[i], next, xf)
    }

    /// Checked version of [`interp`].
    pub fn try_interp(p: &[f32], x: f32) -> Result<f32> {
        if !x.is_finite() || x < 0.0 {
            bail!("gg_float::try_interp(): invalid index {x}");
        }
        if x.floor() >= p.len() as f32 {
            bail!(
                "gg_float::try_interp(): index {x} out of range for {} samples",
                p.len()
            );
        }
        Ok(interp(p, x))
    }

    /// Complex multiply `c = a * b`, returned as `(re, im)`.
    ///
    /// # Examples
    /// ```
    /// use ggmath::core::prelude::*;
    /// assert_eq!(gg_float::cmult(3.0, 4.0, 1.0, 2.0), (-5.0, 10.0));
    /// ```
    pub fn cmult(ar: f32, ai: f32, br: f32, bi: f32) -> (f32, f32) {
        (ar * br - ai * bi, ar * bi + ai * br)
    }

    /// Complex multiply `a *= b`, where `a` is stored in `re` and `im`.
    ///
    /// Both components are computed before either is written, so the result matches [`cmult`].
    pub fn cmult_assign(re: &mut f32, im: &mut f32, br: f32, bi: f32) {
        (*re, *im) = cmult(*re, *im, br, bi);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::{gg_float, gg_int};
    use itertools::iproduct;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // ==================== gg_int ====================

    #[test]
    fn int_min_max() {
        assert_eq!(gg_int::min(3, 7), 3);
        assert_eq!(gg_int::min(-3, -7), -7);
        assert_eq!(gg_int::max(3, 7), 7);
        assert_eq!(gg_int::max(-3, -7), -3);
        assert_eq!(gg_int::min(4, 4), 4);
        assert_eq!(gg_int::max(4, 4), 4);
    }

    #[test]
    fn int_clamp() {
        assert_eq!(gg_int::clamp(5, 0, 10), 5);
        assert_eq!(gg_int::clamp(-1, 0, 10), 0);
        assert_eq!(gg_int::clamp(11, 0, 10), 10);
        assert_eq!(gg_int::clamp(0, 0, 10), 0);
        assert_eq!(gg_int::clamp(10, 0, 10), 10);
        assert_eq!(gg_int::clamp(3, 3, 3), 3);
    }

    #[test]
    fn int_clamp_inverted_bounds_does_not_panic() {
        // Lower bound wins when x is below it; otherwise the upper bound.
        assert_eq!(gg_int::clamp(-5, 10, 0), 10);
        assert_eq!(gg_int::clamp(5, 10, 0), 10);
        assert_eq!(gg_int::clamp(15, 10, 0), 0);
    }

    #[test]
    fn int_abs() {
        assert_eq!(gg_int::abs(5), 5);
        assert_eq!(gg_int::abs(-5), 5);
        assert_eq!(gg_int::abs(0), 0);
        assert_eq!(gg_int::abs(i32::MAX), i32::MAX);
        assert_eq!(gg_int::abs(i32::MIN + 1), i32::MAX);
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn int_abs_min_panics() {
        gg_int::abs(i32::MIN);
    }

    #[test]
    fn int_eucmod() {
        assert_eq!(gg_int::eucmod(7, 3), 1);
        assert_eq!(gg_int::eucmod(-7, 3), 2);
        assert_eq!(gg_int::eucmod(-1, 5), 4);
        assert_eq!(gg_int::eucmod(-5, 5), 0);
        assert_eq!(gg_int::eucmod(0, 5), 0);
        assert_eq!(gg_int::eucmod(i32::MIN, 7), i32::MIN.rem_euclid(7));
    }

    #[test]
    fn int_eucmod_range_and_congruence() {
        for (a, base) in iproduct!(-50..50, 1..12) {
            let m = gg_int::eucmod(a, base);
            assert!((0..base).contains(&m), "eucmod({a}, {base}) = {m}");
            assert_eq!((a - m) % base, 0, "eucmod({a}, {base}) = {m}");
        }
        let mut rng = StdRng::seed_from_u64(0x6767);
        for _ in 0..1000 {
            let a = rng.gen_range(-1_000_000..1_000_000);
            let base = rng.gen_range(1..10_000);
            let m = gg_int::eucmod(a, base);
            assert!((0..base).contains(&m));
            assert_eq!(m, a.rem_euclid(base));
        }
    }

    #[test]
    fn int_log2() {
        assert_eq!(gg_int::log2(1), 0);
        assert_eq!(gg_int::log2(2), 1);
        assert_eq!(gg_int::log2(3), 1);
        assert_eq!(gg_int::log2(8), 3);
        assert_eq!(gg_int::log2(15), 3);
        assert_eq!(gg_int::log2(16), 4);
        assert_eq!(gg_int::log2(i32::MAX), 30);
    }

    #[test]
    fn int_log2_non_positive() {
        assert_eq!(gg_int::log2(0), 0);
        assert_eq!(gg_int::log2(-8), 0);
    }

    #[test]
    fn int_is_pow2() {
        for n in [1, 2, 4, 8, 1024, 1 << 30] {
            assert!(gg_int::is_pow2(n), "{n}");
        }
        for n in [0, -4, 3, 6, 1023, i32::MIN, -1] {
            assert!(!gg_int::is_pow2(n), "{n}");
        }
    }

    #[test]
    fn int_is_pow2_agrees_with_log2() {
        for n in 1..=4096 {
            assert_eq!(gg_int::is_pow2(n), 1 << gg_int::log2(n) == n, "{n}");
        }
    }

    // ==================== gg_float ====================

    #[test]
    fn float_abs() {
        assert_eq!(gg_float::abs(-2.5), 2.5);
        assert_eq!(gg_float::abs(2.5), 2.5);
        assert_eq!(gg_float::abs(0.0), 0.0);
        assert_eq!(gg_float::abs(f32::NEG_INFINITY), f32::INFINITY);
        assert!(gg_float::abs(f32::NAN).is_nan());
    }

    #[test]
    fn float_sign() {
        assert_eq!(gg_float::sign(0.0), 1.0);
        assert_eq!(gg_float::sign(-0.0), -1.0);
        assert_eq!(gg_float::sign(42.0), 1.0);
        assert_eq!(gg_float::sign(-1e-30), -1.0);
        assert_eq!(gg_float::sign(f32::INFINITY), 1.0);
        assert_eq!(gg_float::sign(f32::NEG_INFINITY), -1.0);
    }

    #[test]
    fn float_eucmod() {
        assert_eq!(gg_float::eucmod(7.5, 2.0), 1.5);
        assert_eq!(gg_float::eucmod(-7.5, 2.0), 0.5);
        assert_eq!(gg_float::eucmod(-2.0, 2.0), 0.0);
        assert_eq!(gg_float::eucmod(0.25, 1.0), 0.25);
        assert!(gg_float::eucmod(f32::NAN, 1.0).is_nan());
    }

    #[test]
    fn float_eucmod_range_and_congruence() {
        let mut rng = StdRng::seed_from_u64(0xf10a7);
        for _ in 0..1000 {
            let a: f32 = rng.gen_range(-1000.0..1000.0);
            let base: f32 = rng.gen_range(0.5..100.0);
            let m = gg_float::eucmod(a, base);
            assert!((0.0..=base).contains(&m), "eucmod({a}, {base}) = {m}");
            let k = (a - m) / base;
            assert!(
                gg_float::near_eps(k, k.round(), 1e-3),
                "eucmod({a}, {base}) = {m}"
            );
        }
    }

    #[test]
    fn float_near() {
        assert!(gg_float::near(1.0, 1.0));
        assert!(gg_float::near(1.0, 1.0 + 5e-7));
        assert!(!gg_float::near(1.0, 1.0 + 1e-5));
        assert!(gg_float::near_eps(1.0, 1.5, 0.5));
        assert!(!gg_float::near_eps(1.0, 1.5, 0.4));
        assert!(!gg_float::near(f32::NAN, f32::NAN));
    }

    #[test]
    fn float_clamp() {
        assert_eq!(gg_float::clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(gg_float::clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(gg_float::clamp(11.0, 0.0, 10.0), 10.0);
        assert_eq!(gg_float::clamp(f32::INFINITY, 0.0, 10.0), 10.0);
        // Inverted bounds are a caller error but must not panic.
        assert_eq!(gg_float::clamp(5.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn float_clamp_auto_order_independent() {
        for x in (-40..=140).map(|i| i as f32 * 0.1) {
            let a = gg_float::clamp_auto(x, 10.0, 0.0);
            let b = gg_float::clamp_auto(x, 0.0, 10.0);
            assert_eq!(a, b, "{x}");
            assert!((0.0..=10.0).contains(&a));
        }
        let mut rng = StdRng::seed_from_u64(0xc1a3);
        for _ in 0..1000 {
            let x: f32 = rng.gen_range(-100.0..100.0);
            let lo: f32 = rng.gen_range(-50.0..50.0);
            let hi: f32 = rng.gen_range(-50.0..50.0);
            assert_eq!(
                gg_float::clamp_auto(x, lo, hi),
                gg_float::clamp_auto(x, hi, lo)
            );
        }
    }

    #[test]
    fn float_chop() {
        assert_eq!(gg_float::chop(0.05, 0.1), 0.0);
        assert_eq!(gg_float::chop(-0.05, 0.1), 0.0);
        assert_eq!(gg_float::chop(0.1, 0.1), 0.1);
        assert_eq!(gg_float::chop(-0.1, 0.1), -0.1);
        assert_eq!(gg_float::chop(3.0, 0.1), 3.0);
        // Zero tolerance never chops.
        assert_eq!(gg_float::chop(1e-30, 0.0), 1e-30);
    }

    #[test]
    fn float_rescale() {
        assert_eq!(gg_float::rescale(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(gg_float::rescale(0.0, 0.0, 10.0, -1.0, 1.0), -1.0);
        assert_eq!(gg_float::rescale(10.0, 0.0, 10.0, -1.0, 1.0), 1.0);
        assert_eq!(gg_float::rescale(20.0, 0.0, 10.0, 0.0, 1.0), 2.0);
        // Zero-width domain divides by zero.
        assert!(gg_float::rescale(1.0, 1.0, 1.0, 0.0, 1.0).is_nan());
        assert_eq!(
            gg_float::rescale(2.0, 1.0, 1.0, 0.0, 1.0),
            f32::INFINITY
        );
    }

    #[test]
    fn float_cross() {
        assert_eq!(gg_float::cross(0.0, 10.0, 0.0), 0.0);
        assert_eq!(gg_float::cross(0.0, 10.0, 0.5), 5.0);
        assert_eq!(gg_float::cross(0.0, 10.0, 1.0), 10.0);
        assert_eq!(gg_float::cross(0.0, 10.0, 2.0), 20.0);
        assert_eq!(gg_float::cross(4.0, -4.0, 0.25), 2.0);
    }

    #[test]
    fn float_interp() {
        let p = [1.0, 3.0, 7.0, -1.0];
        assert_eq!(gg_float::interp(&p, 0.0), 1.0);
        assert_eq!(gg_float::interp(&p, 0.5), 2.0);
        assert_eq!(gg_float::interp(&p, 1.0), 3.0);
        assert_eq!(gg_float::interp(&p, 2.5), 3.0);
        assert_eq!(gg_float::interp(&p, 3.0), -1.0);
    }

    #[test]
    #[should_panic]
    fn float_interp_out_of_range_panics() {
        gg_float::interp(&[1.0, 2.0], 2.5);
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn float_interp_negative_panics() {
        gg_float::interp(&[1.0, 2.0], -0.5);
    }

    #[test]
    fn float_try_interp() {
        let p = [0.0, 2.0, 4.0];
        assert_eq!(gg_float::try_interp(&p, 1.5).unwrap(), 3.0);
        assert_eq!(gg_float::try_interp(&p, 2.0).unwrap(), 4.0);
        assert!(gg_float::try_interp(&p, 3.0).is_err());
        assert!(gg_float::try_interp(&p, -1.0).is_err());
        assert!(gg_float::try_interp(&p, f32::NAN).is_err());
        assert!(gg_float::try_interp(&[], 0.0).is_err());
        let err = gg_float::try_interp(&p, 7.5).unwrap_err();
        assert!(err.to_string().contains("out of range for 3 samples"));
    }

    #[test]
    fn float_cmult() {
        assert_eq!(gg_float::cmult(3.0, 4.0, 1.0, 2.0), (-5.0, 10.0));
        // i * i = -1
        assert_eq!(gg_float::cmult(0.0, 1.0, 0.0, 1.0), (-1.0, 0.0));
        assert_eq!(gg_float::cmult(2.0, 0.0, 5.0, 0.0), (10.0, 0.0));
    }

    #[test]
    fn float_cmult_assign_aliases_input() {
        let (mut re, mut im) = (3.0, 4.0);
        gg_float::cmult_assign(&mut re, &mut im, 1.0, 2.0);
        assert_eq!((re, im), (-5.0, 10.0));
        assert_eq!((re, im), gg_float::cmult(3.0, 4.0, 1.0, 2.0));

        // Squaring in place: both operands are the same storage.
        let (mut re, mut im) = (1.0, 1.0);
        let (br, bi) = (re, im);
        gg_float::cmult_assign(&mut re, &mut im, br, bi);
        assert_eq!((re, im), (0.0, 2.0));
    }
}
