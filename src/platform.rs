//! Platform capability flags.
//!
//! Grounded on `original_source/sinkline/src/PlatformSupport.h`,
//! `CallableType.h`, and `BlockConvertible.h`, which conditionally compile
//! Objective-C block support behind `__has_feature(blocks)` and GCD support
//! behind `__has_include(<dispatch/dispatch.h>)`. Rust has neither compiler
//! feature, so both capabilities are expressed as plain constants instead
//! of `cfg`-gated type specialization.

/// Whether this build has native Objective-C block support. Always `false`:
/// Rust has no block type to convert to or from.
pub const NATIVE_BLOCKS_AVAILABLE: bool = false;

/// Whether [`crate::schedulers::DispatchQueueScheduler`] is available in
/// this build: only on macOS, and only with the `dispatch-queue` feature
/// enabled.
#[cfg(all(target_os = "macos", feature = "dispatch-queue"))]
pub const DISPATCH_QUEUE_AVAILABLE: bool = true;

/// See the `true` definition above.
#[cfg(not(all(target_os = "macos", feature = "dispatch-queue")))]
pub const DISPATCH_QUEUE_AVAILABLE: bool = false;

/// Converts a callable into its block-compatible form.
///
/// The original's `BlockConvertible` wrapper exists so a generic lambda can
/// implicitly convert to an Objective-C block type when blocks are
/// available, or be used as-is otherwise. Since [`NATIVE_BLOCKS_AVAILABLE`]
/// is always `false` here, this is always the identity function — the same
/// fallback the original's `#else` branch of `makeBlockConvertible` takes,
/// just permanently.
pub fn into_block_adapter<F>(callable: F) -> F {
    callable
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_blocks_are_never_available_in_rust() {
        assert!(!NATIVE_BLOCKS_AVAILABLE);
    }

    #[test]
    fn block_adapter_is_the_identity_function() {
        let f = into_block_adapter(|x: i32| x + 1);
        assert_eq!(f(1), 2);
    }
}
