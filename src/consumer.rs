//! The one uniform abstraction every stage in a sinkline is built from.
//!
//! A [`Consumer`] is callable with a fixed argument list (represented here as
//! a tuple, `Args`) and produces `Output`. Plain closures and function items
//! already satisfy this trait through the blanket impls below — an operator's
//! `compose` never requires its caller to wrap anything.
//!
//! See `original_source/sinkline/src/Optional.h` (`callIf`,
//! `OptionalCallHelper`) for the C++ ancestor of [`conditional_call`].

/// Something callable with argument list `Args`, producing `Output`.
///
/// `Args` is always a tuple type: `()` for nullary consumers, `(A,)` for
/// unary, `(A, B)` for binary, and so on. Implementations must be safely
/// callable any number of times and, where used across threads (`combine`,
/// `scheduleOn`), `Send + Sync`.
pub trait Consumer<Args> {
    /// The value produced by a call. May be `()`.
    type Output;

    /// Invoke this consumer with the given argument tuple.
    fn call(&self, args: Args) -> Self::Output;
}

macro_rules! impl_consumer_for_fn {
    ($($t:ident),*) => {
        #[allow(non_snake_case)]
        impl<Func, Ret, $($t),*> Consumer<($($t,)*)> for Func
        where
            Func: Fn($($t),*) -> Ret,
        {
            type Output = Ret;

            fn call(&self, args: ($($t,)*)) -> Ret {
                let ($($t,)*) = args;
                (self)($($t),*)
            }
        }
    };
}

impl_consumer_for_fn!();
impl_consumer_for_fn!(A);
impl_consumer_for_fn!(A, B);
impl_consumer_for_fn!(A, B, C);
impl_consumer_for_fn!(A, B, C, D);

/// Wraps a plain closure that takes its whole argument tuple at once so it
/// implements `Consumer<Args>` directly, rather than relying on the per-arity
/// blanket impls above (which expect the closure to take each argument
/// separately).
///
/// Every operator's `compose` returns one of these: the composed step is a
/// closure over the operator's captured state (the transform, the next
/// consumer, …) that needs to accept `Args` generically, the same role
/// `makeBlockConvertible` plays in `original_source/sinkline/src/BlockConvertible.h`
/// (there, to additionally allow implicit conversion to an Objective-C
/// block; here, just to satisfy `Consumer`).
pub struct FromFn<F, Args> {
    f: F,
    _args: std::marker::PhantomData<fn(Args)>,
}

impl<F, Args, Ret> Consumer<Args> for FromFn<F, Args>
where
    F: Fn(Args) -> Ret,
{
    type Output = Ret;

    fn call(&self, args: Args) -> Ret {
        (self.f)(args)
    }
}

/// Builds a [`Consumer<Args>`] out of a closure that takes the whole
/// argument tuple as one parameter.
pub fn from_fn<F, Args, Ret>(f: F) -> FromFn<F, Args>
where
    F: Fn(Args) -> Ret,
{
    FromFn { f, _args: std::marker::PhantomData }
}

/// The uniform "conditional call" primitive from spec.md §4.1.
///
/// Unlike the C++ original (which returns `Optional<T>` when the wrapped
/// callable produces a value, or `bool` when it produces `void`), this
/// always returns `Option<R>`. When `R` is `()`, `Option<()>` carries the
/// same information the original's `bool` did (`Some(())` in place of
/// `true`, `None` in place of `false`) — see `SPEC_FULL.md` §D.1 for the
/// rationale. `consumer` is only invoked when `should` is true.
pub fn conditional_call<Args, C>(should: bool, consumer: &C, args: Args) -> Option<C::Output>
where
    C: Consumer<Args>,
{
    if should { Some(consumer.call(args)) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_of_each_arity_are_consumers() {
        let nullary = || 7;
        assert_eq!(Consumer::<()>::call(&nullary, ()), 7);

        let unary = |x: i32| x * 2;
        assert_eq!(unary.call((21,)), 42);

        let binary = |a: i32, b: i32| a + b;
        assert_eq!(binary.call((1, 2)), 3);
    }

    #[test]
    fn conditional_call_runs_only_when_true() {
        let mut calls = 0;
        let record = |x: i32| {
            x + 1
        };

        let ran = conditional_call(true, &record, (4,));
        assert_eq!(ran, Some(5));

        let skipped = conditional_call(false, &record, (4,));
        assert_eq!(skipped, None);
        let _ = &mut calls;
    }

    #[test]
    fn from_fn_wraps_a_whole_tuple_closure() {
        let doubled = from_fn::<_, (i32,), i32>(|(x,)| x * 2);
        assert_eq!(doubled.call((21,)), 42);
    }

    #[test]
    fn conditional_call_on_unit_output_mirrors_bool() {
        let action = |_: i32| {};
        assert_eq!(conditional_call(true, &action, (1,)), Some(()));
        assert_eq!(conditional_call(false, &action, (1,)), None);
    }
}
