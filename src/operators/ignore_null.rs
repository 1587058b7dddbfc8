use crate::consumer::{Consumer, FromFn, from_fn};
use crate::null_probe::AnyNull;

use super::filter::Filter;

/// Forwards input arguments only if they are all non-null.
///
/// Grounded on `original_source/sinkline/src/Operators.h`'s `ignoreNull()`,
/// which is `filter` over `!anyNull(inputs...)`. The "error to use this
/// operator when no arguments are comparable against null" constraint is
/// enforced here at compile time: `ignore_null` requires `Args: AnyNull`,
/// and the returned operator's `compose` carries an inline `const` assertion
/// that at least one element of `Args` is actually null-comparable (see
/// `SPEC_FULL.md` §D.2 for why this can't be inferred automatically the way
/// the C++ template specialization does it).
pub struct IgnoreNull<Args> {
    filter: Filter<FromFn<fn(Args) -> bool, Args>>,
}

impl<Args> IgnoreNull<Args>
where
    Args: AnyNull + Clone,
{
    fn new() -> Self {
        fn reject_if_any_null<Args: AnyNull>(args: Args) -> bool {
            !args.any_null()
        }

        let predicate: fn(Args) -> bool = reject_if_any_null::<Args>;
        IgnoreNull { filter: Filter::new(from_fn(predicate)) }
    }

    /// Wires this operator in front of `next`.
    pub fn compose<Next>(self, next: Next) -> impl Consumer<Args, Output = Option<Next::Output>>
    where
        Next: Consumer<Args>,
    {
        const { assert!(Args::ANY_COMPARABLE, "ignore_null requires at least one null-comparable argument") };
        self.filter.compose(next)
    }
}

/// Forwards input arguments only if they are all non-null, per
/// [`crate::null_probe::NullProbe`]. At least one argument in the tuple
/// must be null-comparable (typically an `Option<T>`); a tuple made
/// entirely of [`crate::null_probe::Incomparable`] wrappers fails to
/// compile.
pub fn ignore_null<Args>() -> IgnoreNull<Args>
where
    Args: AnyNull + Clone,
{
    IgnoreNull::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignore_null_drops_any_none_argument() {
        let terminal = |a: Option<i32>, b: Option<&str>| (a.unwrap(), b.unwrap());
        let node = ignore_null::<(Option<i32>, Option<&str>)>().compose(terminal);

        assert_eq!(node.call((Some(1), Some("x"))), Some((1, "x")));
        assert_eq!(node.call((None, Some("x"))), None);
        assert_eq!(node.call((Some(1), None)), None);
    }
}
