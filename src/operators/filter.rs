use crate::consumer::{Consumer, conditional_call, from_fn};

/// Implements `filter()`: forwards inputs only if they pass a predicate.
///
/// Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
/// `FilterOperator`, which evaluates the predicate against the inputs and
/// then uses `callIf` (our [`conditional_call`]) to forward them unchanged.
/// Unlike the original, which forwards the same `inputs` pack it just
/// examined by reference, Rust's owned `Consumer::call` needs a second copy
/// of `Args` to hand to the predicate and another to hand onward, so `Args`
/// must be `Clone` here.
pub struct Filter<F> {
    predicate: F,
}

impl<F> Filter<F> {
    pub fn new(predicate: F) -> Self {
        Filter { predicate }
    }

    /// Wires this operator in front of `next`. Returns `None` for any input
    /// the predicate rejects.
    pub fn compose<Next, Args>(
        self,
        next: Next,
    ) -> impl Consumer<Args, Output = Option<Next::Output>>
    where
        Args: Clone,
        F: Consumer<Args, Output = bool>,
        Next: Consumer<Args>,
    {
        let predicate = self.predicate;
        from_fn(move |args: Args| {
            let should_forward = predicate.call(args.clone());
            conditional_call(should_forward, &next, args)
        })
    }
}

/// Forwards only those inputs which pass the given predicate.
pub fn filter<F>(predicate: F) -> Filter<F> {
    Filter::new(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_drops_values_failing_the_predicate() {
        let terminal = |n: i32| n;
        let node = filter(|n: i32| n % 2 == 0).compose(terminal);
        assert_eq!(node.call((4,)), Some(4));
        assert_eq!(node.call((3,)), None);
    }

    #[test]
    fn filter_over_a_range_keeps_only_matches() {
        let terminal = |n: i32| n;
        let node = filter(|n: i32| n % 2 == 0).compose(terminal);
        let kept: Vec<_> = (0..6).filter_map(|n| node.call((n,))).collect();
        assert_eq!(kept, vec![0, 2, 4]);
    }
}
