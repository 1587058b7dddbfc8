use crate::consumer::{Consumer, from_fn};

/// Implements `sideEffect()`: runs an action for its effects, then forwards
/// the original input unchanged.
///
/// Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
/// `SideEffectOperator`, which calls `action(inputs...)` as a discarded
/// expression and accepts any return type. As with [`super::Filter`], owned
/// `Consumer::call` needs two copies of `Args` (one for the action, one to
/// forward), so `Args: Clone` here; the action's own result is likewise
/// discarded rather than constrained to `()`.
pub struct SideEffect<F> {
    action: F,
}

impl<F> SideEffect<F> {
    pub fn new(action: F) -> Self {
        SideEffect { action }
    }

    /// Wires this operator in front of `next`.
    pub fn compose<Next, Args>(self, next: Next) -> impl Consumer<Args, Output = Next::Output>
    where
        Args: Clone,
        F: Consumer<Args>,
        Next: Consumer<Args>,
    {
        let action = self.action;
        from_fn(move |args: Args| {
            let _ = action.call(args.clone());
            next.call(args)
        })
    }
}

/// Invokes the given side effect before forwarding each input unchanged.
pub fn side_effect<F>(action: F) -> SideEffect<F> {
    SideEffect::new(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn side_effect_runs_then_forwards_input_unchanged() {
        let seen = RefCell::new(Vec::new());
        let terminal = |n: i32| n * 2;
        let node = side_effect(|n: i32| seen.borrow_mut().push(n)).compose(terminal);

        assert_eq!(node.call((3,)), 6);
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn side_effect_accepts_an_action_with_a_non_unit_return_value() {
        let seen = RefCell::new(Vec::new());
        let terminal = |n: i32| n * 2;
        let node = side_effect(|n: i32| {
            seen.borrow_mut().push(n);
            n.to_string()
        })
        .compose(terminal);

        assert_eq!(node.call((3,)), 6);
        assert_eq!(*seen.borrow(), vec![3]);
    }
}
