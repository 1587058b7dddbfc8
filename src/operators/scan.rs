use std::cell::RefCell;
use std::sync::{Arc, Mutex};

use crate::consumer::{Consumer, from_fn};

/// Implements `scan()`: folds each input into a running accumulator and
/// forwards the updated accumulator.
///
/// Grounded on `original_source/sinkline/src/OperatorDefinitions.h`'s
/// `ScanOperator<Mutex, Accumulator, Transform>`. The original parameterizes
/// over the mutex type (including `void` for no locking at all); this is
/// split into two constructors instead — [`scan`] (`Mutex`-guarded, the
/// default) and [`scan_unlocked`] (`ScanOperator<void, ...>`'s equivalent).
pub struct Scan<Acc, F> {
    initial: Acc,
    transform: F,
}

impl<Acc, F> Scan<Acc, F> {
    pub fn new(initial: Acc, transform: F) -> Self {
        Scan { initial, transform }
    }

    /// Wires this operator in front of `next`, guarding the accumulator with
    /// a `Mutex` so concurrent callers update it one at a time.
    pub fn compose<Next, Args>(self, next: Next) -> impl Consumer<Args, Output = Next::Output>
    where
        Acc: Clone + Send + 'static,
        F: Fn(&Acc, Args) -> Acc,
        Next: Consumer<(Acc,)>,
    {
        let state = Arc::new(Mutex::new(self.initial));
        let transform = self.transform;

        from_fn(move |args: Args| {
            let updated = {
                let mut guard = state.lock().expect("scan accumulator mutex poisoned");
                let updated = transform(&guard, args);
                *guard = updated.clone();
                updated
            };

            next.call((updated,))
        })
    }

    /// Wires this operator in front of `next` with no locking at all.
    ///
    /// # Safety / soundness
    ///
    /// This mirrors `ScanOperator<void, ...>` in the original, which the
    /// source itself only uses single-threaded. The returned consumer is
    /// `Sync` (so it can sit in a pipeline alongside other `Sync` stages),
    /// but calling it from more than one thread at a time is a data race on
    /// the accumulator — same caveat the original carries, just made
    /// explicit rather than silent.
    pub fn compose_unlocked<Next, Args>(self, next: Next) -> impl Consumer<Args, Output = Next::Output>
    where
        Acc: Clone + 'static,
        F: Fn(&Acc, Args) -> Acc,
        Next: Consumer<(Acc,)>,
    {
        struct UnsyncCell<T>(RefCell<T>);
        // SAFETY: none, in the presence of concurrent callers — see the
        // doc comment on `compose_unlocked` above.
        unsafe impl<T> Sync for UnsyncCell<T> {}

        let cell = UnsyncCell(RefCell::new(self.initial));
        let transform = self.transform;

        from_fn(move |args: Args| {
            let updated = {
                let mut accum = cell.0.borrow_mut();
                let updated = transform(&accum, args);
                *accum = updated.clone();
                updated
            };

            next.call((updated,))
        })
    }
}

/// Folds each input into an accumulator (starting at `initial`), forwarding
/// the updated accumulator. Guarded by a `Mutex` so concurrent callers
/// serialize on the accumulator.
pub fn scan<Acc, F>(initial: Acc, transform: F) -> Scan<Acc, F> {
    Scan::new(initial, transform)
}

/// Like [`scan`], but with no internal locking. See
/// [`Scan::compose_unlocked`] for the soundness caveat.
pub fn scan_unlocked<Acc, F>(initial: Acc, transform: F) -> Scan<Acc, F> {
    Scan::new(initial, transform)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_accumulates_running_sum() {
        let mut outputs = Vec::new();
        let terminal = |sum: i32| outputs.push(sum);
        let node = scan(0, |sum: &i32, (x,): (i32,)| sum + x).compose(terminal);

        for x in [0, 1, 2, 3] {
            node.call((x,));
        }

        assert_eq!(outputs, vec![0, 1, 3, 6]);
    }

    #[test]
    fn scan_unlocked_accumulates_single_threaded() {
        let mut outputs = Vec::new();
        let terminal = |sum: i32| outputs.push(sum);
        let node = scan_unlocked(0, |sum: &i32, (x,): (i32,)| sum + x).compose_unlocked(terminal);

        for x in [1, 1, 1] {
            node.call((x,));
        }

        assert_eq!(outputs, vec![1, 2, 3]);
    }
}
