//! `eprintln!`-based probes for inspecting a sinkline interactively, in the
//! same register as the teacher crate's `src/testing/debug.rs`
//! (`DebugInspectOp`/`DebugCountOp`): no assertions, no collected state,
//! just a line of output per call, meant for `cargo test -- --nocapture` or
//! ad hoc example binaries rather than CI assertions.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::consumer::{Consumer, from_fn};

/// Wraps `next` so that every call is logged to stderr with `label` before
/// being forwarded unchanged. Prints the call count and the
/// `{:?}`-formatted argument tuple.
///
/// Grounded on the teacher's `DebugInspectOp`, adapted from "operates on a
/// batch `Vec<T>`" to "operates on one call's argument tuple", matching how
/// a push pipeline processes one item at a time instead of one partition at
/// a time.
pub fn inspect<Next, Args>(
    label: &'static str,
    next: Next,
) -> impl Consumer<Args, Output = Next::Output>
where
    Args: std::fmt::Debug,
    Next: Consumer<Args>,
{
    let count = AtomicUsize::new(0);
    from_fn(move |args: Args| {
        let n = count.fetch_add(1, Ordering::Relaxed) + 1;
        eprintln!("[sinkline: {label}] call {n}: {args:?}");
        next.call(args)
    })
}
