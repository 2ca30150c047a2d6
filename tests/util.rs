/// Check whether two floats have a relative difference of at most 5e-5 times the larger
/// magnitude, falling back to an absolute tolerance near zero.
#[macro_export]
macro_rules! assert_floats_near_equal {
    ($expected:expr, $actual:expr, $msg:expr) => {{
        let expected: f64 = $expected;
        let actual: f64 = $actual;
        let scale = if expected.abs() > actual.abs() {
            expected.abs()
        } else {
            actual.abs()
        };
        let tolerance = if scale > 1.0 { scale * 0.00005 } else { 0.00005 };
        assert!(
            (expected - actual).abs() <= tolerance,
            "{}: expected {}, got {}",
            $msg,
            expected,
            actual
        );
    }};
}
