use crate::consumer::{Consumer, from_fn};

/// Implements `then()`: bridges a callback-shaped external API into a
/// sinkline by handing the action a continuation it can invoke any number of
/// times (including zero).
///
/// Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
/// `ThenOperator`, which calls `return action(inputs..., newNext)` — the
/// action's return value, which may depend on whatever `newNext` itself
/// returns, propagates straight out of `compose`. `OperatorsTest.cpp`'s
/// `thenSink("foo")` relies on exactly this: the action multiplies
/// `newNext`'s result by `1.5` and that product is the sinkline's own
/// return value. The continuation is represented here as
/// `&dyn Fn(NextArgs) -> Next::Output` — the one place in this crate where a
/// [`Consumer`] is bridged through dynamic dispatch rather than
/// monomorphized generics, since `then` exists specifically to adapt to
/// external, non-generic callback signatures (see `SPEC_FULL.md` §D.5).
pub struct Then<F> {
    action: F,
}

impl<F> Then<F> {
    pub fn new(action: F) -> Self {
        Then { action }
    }

    /// Wires this operator in front of `next`. The action's own return
    /// value becomes the composed consumer's `Output` — the continuation it
    /// receives may be invoked zero or more times, and its result is
    /// available to the action like any other value.
    pub fn compose<Next, Args, NextArgs, R>(self, next: Next) -> impl Consumer<Args, Output = R>
    where
        F: Fn(Args, &dyn Fn(NextArgs) -> Next::Output) -> R,
        Next: Consumer<NextArgs>,
    {
        let action = self.action;
        from_fn(move |args: Args| {
            let forward = |next_args: NextArgs| next.call(next_args);
            action(args, &forward)
        })
    }
}

/// Invokes the given action for each input, handing it a callback to use
/// for forwarding results whenever (and however many times) it's ready.
pub fn then<F>(action: F) -> Then<F> {
    Then::new(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn then_bridges_a_callback_shaped_action_and_returns_its_result() {
        let terminal = |a: usize, b: usize| a + b;

        let node = then(|(s,): (&str,), emit: &dyn Fn((usize, usize)) -> usize| {
            emit((s.len(), s.len() * 2)) as f64 * 1.5
        })
        .compose(terminal);

        assert_eq!(node.call(("foo",)), 13.5);
    }
}
