pub fn assert_partial_eq<T: PartialEq>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

/// Panics with the call site and the stringified condition if `$cond` is false.
///
/// Used for caller errors that would otherwise produce a silently wrong value.
#[allow(unused_macros)]
#[macro_export]
macro_rules! check {
    ($cond:expr) => {{
        $crate::core::assert::assert_type::<bool>(&$cond);
        if !$cond {
            panic!(
                "check failed: {}: {}",
                $crate::core::assert::current_location!(),
                stringify!($cond),
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_ne {
    ($lhs:expr, $rhs:expr) => {{
        $crate::core::assert::assert_same_type(&$lhs, &$rhs);
        $crate::core::assert::assert_partial_eq(&$lhs);
        if !($lhs != $rhs) {
            panic!(
                "check failed: {}: {} != {}: {:?} vs. {:?}",
                $crate::core::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_ne;
