//! The `sinkline!` composition macro.
//!
//! Grounded on `original_source/sinkline/src/Sinkline.h`'s `sinkline()`, a
//! variadic function template that recurses as
//! `op.compose(sinkline(remaining...))` down to a single terminal sink. Rust
//! has no variadic generics, so the same recursion is expressed as a
//! `macro_rules!` macro instead of a function.

/// Composes operators in order, left to right, ending in a plain callable
/// (a closure, function item, or any other [`crate::consumer::Consumer`]).
///
/// ```
/// use sinkline::sinkline;
/// use sinkline::operators::map;
/// use sinkline::consumer::Consumer;
///
/// let pipeline = sinkline!(map(|x: i32| x * 2), |doubled: i32| doubled.to_string());
/// assert_eq!(pipeline.call((21,)), "42");
/// ```
#[macro_export]
macro_rules! sinkline {
    ($sink:expr $(,)?) => {
        $sink
    };
    ($op:expr, $($rest:expr),+ $(,)?) => {
        $op.compose($crate::sinkline!($($rest),+))
    };
}
