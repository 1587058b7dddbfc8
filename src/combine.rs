//! Multi-input combine-latest join: N typed input consumers that share one
//! output, firing once every input has reported at least one value and
//! again on every update after that.
//!
//! Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
//! `CombineOperator`/`CombineInputOperator`. The original stores its shared
//! slots behind a bare `shared_ptr<tuple<Optional<Values>...>>` with a
//! `// TODO: Thread safety` left at every write site; per `spec.md` §4.4's
//! explicit requirement, this crate guards that storage with a
//! [`std::sync::Mutex`] instead (Open Question resolution #3 in
//! `SPEC_FULL.md`).
//!
//! Rust has no variadic generics, so — unlike the original's single
//! template recursing over `Values...` — each input count gets its own
//! concrete pair of functions: [`combine2`], [`combine3`], [`combine4`].

use std::sync::{Arc, Mutex};

use crate::consumer::Consumer;
use crate::tuple::FlattenOptionals;

/// Implements `combine()` for two inputs. Returns a pair of consumers, one
/// per input slot; call each as new values arrive on that input. `next` is
/// invoked (and its result returned) only once both slots hold a value.
pub fn combine2<A, B, Next>(next: Next) -> (CombineInput2_0<A, B, Next>, CombineInput2_1<A, B, Next>)
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    Next: Consumer<(A, B)>,
{
    let state = Arc::new(CombineState2 { slots: Mutex::new((None, None)), next });
    (CombineInput2_0 { state: state.clone() }, CombineInput2_1 { state })
}

struct CombineState2<A, B, Next> {
    slots: Mutex<(Option<A>, Option<B>)>,
    next: Next,
}

/// Input 0 of a 2-input combine. Obtained only from [`combine2`].
pub struct CombineInput2_0<A, B, Next> {
    state: Arc<CombineState2<A, B, Next>>,
}

/// Input 1 of a 2-input combine. Obtained only from [`combine2`].
pub struct CombineInput2_1<A, B, Next> {
    state: Arc<CombineState2<A, B, Next>>,
}

impl<A, B, Next> Consumer<(A,)> for CombineInput2_0<A, B, Next>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    Next: Consumer<(A, B)>,
{
    type Output = Option<Next::Output>;

    fn call(&self, (value,): (A,)) -> Self::Output {
        let mut guard = self.state.slots.lock().expect("combine mutex poisoned");
        guard.0 = Some(value);
        let flattened = guard.flatten_optionals();
        drop(guard);
        flattened.map(|tuple| self.state.next.call(tuple))
    }
}

impl<A, B, Next> Consumer<(B,)> for CombineInput2_1<A, B, Next>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    Next: Consumer<(A, B)>,
{
    type Output = Option<Next::Output>;

    fn call(&self, (value,): (B,)) -> Self::Output {
        let mut guard = self.state.slots.lock().expect("combine mutex poisoned");
        guard.1 = Some(value);
        let flattened = guard.flatten_optionals();
        drop(guard);
        flattened.map(|tuple| self.state.next.call(tuple))
    }
}

/// Implements `combine()` for three inputs. See [`combine2`] for the
/// general shape.
pub fn combine3<A, B, C, Next>(
    next: Next,
) -> (CombineInput3_0<A, B, C, Next>, CombineInput3_1<A, B, C, Next>, CombineInput3_2<A, B, C, Next>)
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    Next: Consumer<(A, B, C)>,
{
    let state = Arc::new(CombineState3 { slots: Mutex::new((None, None, None)), next });
    (
        CombineInput3_0 { state: state.clone() },
        CombineInput3_1 { state: state.clone() },
        CombineInput3_2 { state },
    )
}

struct CombineState3<A, B, C, Next> {
    slots: Mutex<(Option<A>, Option<B>, Option<C>)>,
    next: Next,
}

pub struct CombineInput3_0<A, B, C, Next> {
    state: Arc<CombineState3<A, B, C, Next>>,
}
pub struct CombineInput3_1<A, B, C, Next> {
    state: Arc<CombineState3<A, B, C, Next>>,
}
pub struct CombineInput3_2<A, B, C, Next> {
    state: Arc<CombineState3<A, B, C, Next>>,
}

impl<A, B, C, Next> Consumer<(A,)> for CombineInput3_0<A, B, C, Next>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    Next: Consumer<(A, B, C)>,
{
    type Output = Option<Next::Output>;

    fn call(&self, (value,): (A,)) -> Self::Output {
        let mut guard = self.state.slots.lock().expect("combine mutex poisoned");
        guard.0 = Some(value);
        let flattened = guard.flatten_optionals();
        drop(guard);
        flattened.map(|tuple| self.state.next.call(tuple))
    }
}

impl<A, B, C, Next> Consumer<(B,)> for CombineInput3_1<A, B, C, Next>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    Next: Consumer<(A, B, C)>,
{
    type Output = Option<Next::Output>;

    fn call(&self, (value,): (B,)) -> Self::Output {
        let mut guard = self.state.slots.lock().expect("combine mutex poisoned");
        guard.1 = Some(value);
        let flattened = guard.flatten_optionals();
        drop(guard);
        flattened.map(|tuple| self.state.next.call(tuple))
    }
}

impl<A, B, C, Next> Consumer<(C,)> for CombineInput3_2<A, B, C, Next>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    Next: Consumer<(A, B, C)>,
{
    type Output = Option<Next::Output>;

    fn call(&self, (value,): (C,)) -> Self::Output {
        let mut guard = self.state.slots.lock().expect("combine mutex poisoned");
        guard.2 = Some(value);
        let flattened = guard.flatten_optionals();
        drop(guard);
        flattened.map(|tuple| self.state.next.call(tuple))
    }
}

/// Implements `combine()` for four inputs. See [`combine2`] for the general
/// shape.
#[allow(clippy::type_complexity)]
pub fn combine4<A, B, C, D, Next>(
    next: Next,
) -> (
    CombineInput4_0<A, B, C, D, Next>,
    CombineInput4_1<A, B, C, D, Next>,
    CombineInput4_2<A, B, C, D, Next>,
    CombineInput4_3<A, B, C, D, Next>,
)
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    Next: Consumer<(A, B, C, D)>,
{
    let state = Arc::new(CombineState4 { slots: Mutex::new((None, None, None, None)), next });
    (
        CombineInput4_0 { state: state.clone() },
        CombineInput4_1 { state: state.clone() },
        CombineInput4_2 { state: state.clone() },
        CombineInput4_3 { state },
    )
}

struct CombineState4<A, B, C, D, Next> {
    slots: Mutex<(Option<A>, Option<B>, Option<C>, Option<D>)>,
    next: Next,
}

pub struct CombineInput4_0<A, B, C, D, Next> {
    state: Arc<CombineState4<A, B, C, D, Next>>,
}
pub struct CombineInput4_1<A, B, C, D, Next> {
    state: Arc<CombineState4<A, B, C, D, Next>>,
}
pub struct CombineInput4_2<A, B, C, D, Next> {
    state: Arc<CombineState4<A, B, C, D, Next>>,
}
pub struct CombineInput4_3<A, B, C, D, Next> {
    state: Arc<CombineState4<A, B, C, D, Next>>,
}

impl<A, B, C, D, Next> Consumer<(A,)> for CombineInput4_0<A, B, C, D, Next>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    Next: Consumer<(A, B, C, D)>,
{
    type Output = Option<Next::Output>;

    fn call(&self, (value,): (A,)) -> Self::Output {
        let mut guard = self.state.slots.lock().expect("combine mutex poisoned");
        guard.0 = Some(value);
        let flattened = guard.flatten_optionals();
        drop(guard);
        flattened.map(|tuple| self.state.next.call(tuple))
    }
}

impl<A, B, C, D, Next> Consumer<(B,)> for CombineInput4_1<A, B, C, D, Next>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    Next: Consumer<(A, B, C, D)>,
{
    type Output = Option<Next::Output>;

    fn call(&self, (value,): (B,)) -> Self::Output {
        let mut guard = self.state.slots.lock().expect("combine mutex poisoned");
        guard.1 = Some(value);
        let flattened = guard.flatten_optionals();
        drop(guard);
        flattened.map(|tuple| self.state.next.call(tuple))
    }
}

impl<A, B, C, D, Next> Consumer<(C,)> for CombineInput4_2<A, B, C, D, Next>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    Next: Consumer<(A, B, C, D)>,
{
    type Output = Option<Next::Output>;

    fn call(&self, (value,): (C,)) -> Self::Output {
        let mut guard = self.state.slots.lock().expect("combine mutex poisoned");
        guard.2 = Some(value);
        let flattened = guard.flatten_optionals();
        drop(guard);
        flattened.map(|tuple| self.state.next.call(tuple))
    }
}

impl<A, B, C, D, Next> Consumer<(D,)> for CombineInput4_3<A, B, C, D, Next>
where
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
    C: Clone + Send + 'static,
    D: Clone + Send + 'static,
    Next: Consumer<(A, B, C, D)>,
{
    type Output = Option<Next::Output>;

    fn call(&self, (value,): (D,)) -> Self::Output {
        let mut guard = self.state.slots.lock().expect("combine mutex poisoned");
        guard.3 = Some(value);
        let flattened = guard.flatten_optionals();
        drop(guard);
        flattened.map(|tuple| self.state.next.call(tuple))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine2_fires_once_both_slots_are_filled() {
        let terminal = |a: i32, b: i32| (a + b).to_string();
        let (in0, in1) = combine2(terminal);

        assert_eq!(in0.call((1,)), None);
        assert_eq!(in1.call((2,)), Some("3".to_string()));
        assert_eq!(in1.call((4,)), Some("5".to_string()));
        assert_eq!(in0.call((5,)), Some("9".to_string()));
    }

    #[test]
    fn combine3_requires_every_slot() {
        let terminal = |a: i32, b: i32, c: i32| a + b + c;
        let (in0, in1, in2) = combine3(terminal);

        assert_eq!(in0.call((1,)), None);
        assert_eq!(in1.call((2,)), None);
        assert_eq!(in2.call((3,)), Some(6));
    }
}
