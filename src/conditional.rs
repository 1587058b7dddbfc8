//! Wraps a consumer with an enabled/disabled flag fixed at construction
//! time.
//!
//! Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
//! `OptionalSink`, and `Sinkline.h`'s two `sinklineIf` overloads: one takes
//! an explicit `bool condition`, the other takes just a `Sink` and derives
//! `enabled` from `sink != nullptr`.

use crate::consumer::Consumer;

/// A consumer that only forwards to `inner` when enabled; always returns
/// `Option<R>` (see `SPEC_FULL.md` §D.1 — the same conditional-call
/// uniformity as [`crate::consumer::conditional_call`] itself). Whether it's
/// enabled is fixed at construction: either an explicit flag
/// ([`sinkline_if`]) or by the presence of the wrapped sink itself
/// ([`sinkline_if_some`]), mirroring the original's "null sink" case where
/// there is no sink value to store at all when disabled.
pub struct OptionalConsumer<C> {
    inner: Option<C>,
}

impl<C> OptionalConsumer<C> {
    pub fn new(inner: C, enabled: bool) -> Self {
        OptionalConsumer { inner: enabled.then_some(inner) }
    }
}

impl<C, Args> Consumer<Args> for OptionalConsumer<C>
where
    C: Consumer<Args>,
{
    type Output = Option<C::Output>;

    fn call(&self, args: Args) -> Self::Output {
        self.inner.as_ref().map(|inner| inner.call(args))
    }
}

/// Creates a sinkline that only runs `sink` if `condition` is true.
///
/// Meant to be embedded at the end of another sinkline (the last argument
/// to [`crate::sinkline!`]), the same constraint the original documents for
/// `sinklineIf`.
pub fn sinkline_if<C>(condition: bool, sink: C) -> OptionalConsumer<C> {
    OptionalConsumer::new(sink, condition)
}

/// Creates a sinkline that only runs `sink` if it's present at all.
///
/// Mirrors `Sinkline.h`'s single-argument `sinklineIf(Sink &&sink)`
/// overload, which treats `sink != nullptr` as the enabled condition; `None`
/// here plays the role the original's null sink pointer does.
pub fn sinkline_if_some<C>(sink: Option<C>) -> OptionalConsumer<C> {
    OptionalConsumer { inner: sink }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_consumer_always_returns_none() {
        let wrapped = sinkline_if(false, |x: i32| x * 2);
        assert_eq!(wrapped.call((21,)), None);
    }

    #[test]
    fn enabled_consumer_forwards_and_wraps_result() {
        let wrapped = sinkline_if(true, |x: i32| x * 2);
        assert_eq!(wrapped.call((21,)), Some(42));
    }

    #[test]
    fn null_sink_variant_returns_empty() {
        let wrapped = sinkline_if_some::<fn(i32) -> i32>(None);
        assert_eq!(wrapped.call((21,)), None);
    }

    #[test]
    fn present_sink_variant_forwards_and_wraps_result() {
        let wrapped = sinkline_if_some(Some(|x: i32| x * 2));
        assert_eq!(wrapped.call((21,)), Some(42));
    }
}
