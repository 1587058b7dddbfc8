//! Tuple utilities: extract a value by type, and flatten a tuple of
//! `Option<T>`s into `Option<(T..)>`.
//!
//! "Apply a callable to a tuple" (spec.md §4.2's first bullet) is already
//! covered by [`crate::consumer::Consumer::call`] — every `Consumer<Args>`
//! impl *is* that operation, so there is no separate free function for it
//! here (see `original_source/sinkline/src/TupleExt.h`'s `callWithTuple`,
//! which this supersedes).

/// Pulls the first element of type `E` out of a tuple, returning it
/// alongside the remaining elements in their original order.
///
/// Mirrors `original_source/sinkline/src/TupleExt.h`'s `extract()`. Only the
/// tuple shapes `on_error`/`recover` actually need are implemented: a lone
/// error (`(E,)`), and an error paired with one other value in either
/// position (`(E, V)` / `(V, E)`).
pub trait ExtractFirst<E> {
    /// The tuple left over once the `E` has been removed.
    type Rest;

    /// Split `self` into the extracted `E` and the rest of the tuple.
    fn extract_first(self) -> (E, Self::Rest);
}

impl<E> ExtractFirst<E> for (E,) {
    type Rest = ();

    fn extract_first(self) -> (E, ()) {
        (self.0, ())
    }
}

impl<E, V> ExtractFirst<E> for (E, V) {
    type Rest = (V,);

    fn extract_first(self) -> (E, (V,)) {
        (self.0, (self.1,))
    }
}

/// Marker used to disambiguate the `(V, E)` impl from `(E, V)` above: without
/// it, `(E, E)` (both positions the same type) would be ambiguous, which
/// matches spec.md §9's note that "multiple arguments matching the error
/// type" is a flagged, not fully resolved, edge case — we simply pick the
/// first position when both could match, by only offering this second impl
/// for distinct leading types via the blanket below.
pub trait ExtractFirstAtSecond<E> {
    type Leading;
    fn extract_first_at_second(self) -> (E, (Self::Leading,));
}

impl<V, E> ExtractFirstAtSecond<E> for (V, E) {
    type Leading = V;

    fn extract_first_at_second(self) -> (E, (V,)) {
        (self.1, (self.0,))
    }
}

/// Flattens a tuple of `Option<T_i>` into `Option<(T_1, .., T_n)>`: populated
/// iff every slot is populated. Used by [`crate::combine`] to decide whether
/// all inputs have reported a value yet.
///
/// Mirrors `original_source/sinkline/src/TupleExt.h`'s `flattenOptionals`.
/// The base case (empty tuple) is always populated, per spec.md §4.2.
pub trait FlattenOptionals {
    /// The flattened, unwrapped tuple.
    type Flat;

    /// Returns `Some(..)` only if every element of `self` is `Some`.
    fn flatten_optionals(&self) -> Option<Self::Flat>;
}

impl FlattenOptionals for () {
    type Flat = ();

    fn flatten_optionals(&self) -> Option<()> {
        Some(())
    }
}

impl<A: Clone> FlattenOptionals for (Option<A>,) {
    type Flat = (A,);

    fn flatten_optionals(&self) -> Option<(A,)> {
        Some((self.0.clone()?,))
    }
}

impl<A: Clone, B: Clone> FlattenOptionals for (Option<A>, Option<B>) {
    type Flat = (A, B);

    fn flatten_optionals(&self) -> Option<(A, B)> {
        Some((self.0.clone()?, self.1.clone()?))
    }
}

impl<A: Clone, B: Clone, C: Clone> FlattenOptionals for (Option<A>, Option<B>, Option<C>) {
    type Flat = (A, B, C);

    fn flatten_optionals(&self) -> Option<(A, B, C)> {
        Some((self.0.clone()?, self.1.clone()?, self.2.clone()?))
    }
}

impl<A: Clone, B: Clone, C: Clone, D: Clone> FlattenOptionals
    for (Option<A>, Option<B>, Option<C>, Option<D>)
{
    type Flat = (A, B, C, D);

    fn flatten_optionals(&self) -> Option<(A, B, C, D)> {
        Some((
            self.0.clone()?,
            self.1.clone()?,
            self.2.clone()?,
            self.3.clone()?,
        ))
    }
}
