//! "Is this argument null?" as a trait, plus tuple-level aggregation across
//! an argument list.
//!
//! Grounded on `original_source/sinkline/src/AnyNull.h`. The original uses
//! `IsNullComparable`/`IsNull<Value, Comparable>` template specialization to
//! decide, *per type*, whether a value can be compared to `nullptr`, folding
//! the per-argument results together with an `operator|` that treats
//! "not comparable" as an identity element. Rust has no equivalent
//! specialization on stable, so instead of inferring comparability from an
//! arbitrary type, each argument must say so explicitly by its own type:
//! `Option<T>` is comparable, anything else must be wrapped in
//! [`Incomparable`] to participate in an `ignore_null` argument list at all.

/// A value that can say whether it represents "no value" — and whether that
/// question is even meaningful for its type.
pub trait NullProbe {
    /// Whether [`NullProbe::is_null`] carries real information for this
    /// type. `false` for [`Incomparable`], `true` for `Option<T>`.
    const COMPARABLE: bool;

    /// True if this value is "null". Meaningless (but harmless — always
    /// `false`) when `COMPARABLE` is `false`.
    fn is_null(&self) -> bool;
}

impl<T> NullProbe for Option<T> {
    const COMPARABLE: bool = true;

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

/// Opts a non-nullable argument out of null comparison so it can still sit
/// alongside `Option<T>` fields in an `ignore_null` argument list.
///
/// The original achieves the equivalent by template deduction — any type
/// that isn't pointer-like is automatically "not comparable". Rust requires
/// this to be spelled out at the call site instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incomparable<T>(pub T);

impl<T> NullProbe for Incomparable<T> {
    const COMPARABLE: bool = false;

    fn is_null(&self) -> bool {
        false
    }
}

/// Tuple-level "is any argument null", folding [`NullProbe::is_null`] across
/// every element the way `anyNull(...)` folds `IsNull::isNull` with
/// `operator|` in the original.
pub trait AnyNull {
    /// True if at least one element of the tuple is actually comparable to
    /// null. An `ignore_null` built over a tuple where this is `false` is a
    /// construction error (see `operators::ignore_null`'s compile-time
    /// assertion).
    const ANY_COMPARABLE: bool;

    /// True if any comparable element is null. Elements that aren't
    /// comparable never contribute a `true`.
    fn any_null(&self) -> bool;
}

macro_rules! impl_any_null {
    ($($t:ident),+) => {
        #[allow(non_snake_case)]
        impl<$($t: NullProbe),+> AnyNull for ($($t,)+) {
            const ANY_COMPARABLE: bool = { false $(|| $t::COMPARABLE)+ };

            fn any_null(&self) -> bool {
                let ($($t,)+) = self;
                false $(|| $t.is_null())+
            }
        }
    };
}

impl_any_null!(A);
impl_any_null!(A, B);
impl_any_null!(A, B, C);
impl_any_null!(A, B, C, D);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_is_comparable_and_reports_null() {
        let some: (Option<i32>,) = (Some(1),);
        let none: (Option<i32>,) = (None,);
        assert!(<(Option<i32>,) as AnyNull>::ANY_COMPARABLE);
        assert!(!some.any_null());
        assert!(none.any_null());
    }

    #[test]
    fn incomparable_never_triggers_null() {
        let mixed: (Option<i32>, Incomparable<String>) = (None, Incomparable("x".into()));
        assert!(mixed.any_null());

        let mixed_present: (Option<i32>, Incomparable<String>) = (Some(1), Incomparable("x".into()));
        assert!(!mixed_present.any_null());
    }

    #[test]
    fn all_incomparable_tuple_reports_no_comparable_members() {
        type Pair = (Incomparable<i32>, Incomparable<&'static str>);
        assert!(!<Pair as AnyNull>::ANY_COMPARABLE);
    }
}
