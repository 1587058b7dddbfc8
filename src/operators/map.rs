use crate::consumer::{Consumer, from_fn};

/// Implements `map()`: runs a transform over each input and forwards its
/// result as the sole argument to the next stage.
///
/// Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
/// `MapOperator`.
pub struct Map<F> {
    transform: F,
}

impl<F> Map<F> {
    pub fn new(transform: F) -> Self {
        Map { transform }
    }

    /// Wires this operator in front of `next`.
    pub fn compose<Next, Args>(self, next: Next) -> impl Consumer<Args, Output = Next::Output>
    where
        F: Consumer<Args>,
        Next: Consumer<(F::Output,)>,
    {
        let transform = self.transform;
        from_fn(move |args: Args| next.call((transform.call(args),)))
    }
}

/// Maps input values using the given transform.
pub fn map<F>(transform: F) -> Map<F> {
    Map::new(transform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_forwards_transformed_value() {
        let terminal = |n: i32| n.to_string();
        let node = map(|x: i32| x * 2).compose(terminal);
        assert_eq!(node.call((21,)), "42");
    }

    #[test]
    fn map_over_the_documented_sequence() {
        let terminal = |n: i32| n.to_string();
        let node = map(|x: i32| x * 2).compose(terminal);
        let outputs: Vec<_> = [0, 1, 2, 21].into_iter().map(|x| node.call((x,))).collect();
        assert_eq!(outputs, vec!["0", "2", "4", "42"]);
    }
}
