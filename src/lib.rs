//! # sinkline
//!
//! Strongly-typed push pipelines: small operators compose into one callable
//! [`Consumer`](consumer::Consumer), each call forwarding its arguments
//! through every stage in order, synchronously, with no buffering and no
//! collection in between.
//!
//! This is a Rust restatement of `facebookarchive/sinkline`, a C++ template
//! library for composing callables (lambdas, Objective-C blocks, function
//! pointers) the same way. The shape survives the move: a [`Consumer<Args>`](consumer::Consumer)
//! is anything callable with a fixed argument tuple `Args`, operators wrap a
//! `Consumer` to produce a new one with a (possibly different) argument
//! list, and the [`sinkline!`] macro folds a list of operators and a
//! terminal callable into a single composed `Consumer`.
//!
//! ## Quick start
//!
//! ```
//! use sinkline::sinkline;
//! use sinkline::operators::{filter, map};
//! use sinkline::consumer::Consumer;
//!
//! let pipeline = sinkline!(
//!     filter(|x: i32| x % 2 == 0),
//!     map(|x: i32| x * 2),
//!     |doubled: i32| doubled.to_string(),
//! );
//!
//! assert_eq!(pipeline.call((3,)), None);
//! assert_eq!(pipeline.call((4,)), Some("8".to_string()));
//! ```
//!
//! `filter` returns `Option<R>` because it may not forward at all; operators
//! that always forward (like `map`) pass the inner result through
//! unwrapped. See each operator's documentation for its exact shape.
//!
//! ## Module overview
//!
//! - [`consumer`] — the `Consumer<Args>` trait, blanket impls for closures
//!   of every supported arity, [`consumer::from_fn`], and [`consumer::conditional_call`].
//! - [`operators`] — `map`, `filter`, `reduce`, `ignore_null`, `scan` /
//!   `scan_unlocked`, `on_error` / `recover`, `side_effect`, `then`,
//!   `schedule_on`.
//! - [`combine`] — `combine2`/`combine3`/`combine4`, the multi-input
//!   combine-latest join.
//! - [`conditional`] — `sinkline_if`, an enabled/disabled wrapper.
//! - [`tuple`] — tuple-shape helpers (`ExtractFirst`, `ExtractFirstAtSecond`,
//!   `FlattenOptionals`) that the operators above are built on.
//! - [`null_probe`] — [`null_probe::NullProbe`] / [`null_probe::Incomparable`] / [`null_probe::AnyNull`], the
//!   stable-Rust replacement for the original's null-comparability template
//!   specialization.
//! - [`either`] — [`either::Either`], a small tagged union used where a stage
//!   may produce one of two unrelated result types.
//! - [`schedulers`] — the [`schedulers::Scheduler`] trait plus
//!   [`schedulers::ImmediateScheduler`], [`schedulers::BackgroundScheduler`],
//!   and (macOS, `dispatch-queue` feature) [`schedulers::DispatchQueueScheduler`].
//! - [`future`] — [`future::SinkFuture`] / [`future::SinkPromise`], the
//!   blocking future pair schedulers resolve into.
//! - [`error`] — [`error::SchedulerError`], returned by scheduler suspend/resume/shutdown.
//! - [`platform`] — capability constants standing in for the original's
//!   `__has_feature`/`__has_include` checks.
//! - [`testing`] — `eprintln!`-based inspection probes for ad hoc debugging.
//!
//! ## Non-goals
//!
//! This crate composes callables; it does not schedule a DAG, fuse stages,
//! or materialize intermediate collections. There is no planner and no
//! runner — `sinkline!` just nests `.compose()` calls, and every call into
//! the resulting consumer runs synchronously on the caller's thread unless a
//! `schedule_on` stage hands it to a [`schedulers::Scheduler`].

pub mod combine;
pub mod conditional;
pub mod consumer;
pub mod either;
pub mod error;
pub mod future;
pub mod null_probe;
pub mod operators;
pub mod platform;
pub mod schedulers;
pub mod testing;
pub mod tuple;

mod sinkline_macro;

pub use consumer::{Consumer, conditional_call, from_fn};
pub use either::Either;
pub use error::{SchedulerError, SchedulerErrorKind};
pub use future::{SinkFuture, SinkPromise, run_promised_action, sink_promise};
pub use null_probe::{AnyNull, Incomparable, NullProbe};
pub use schedulers::Scheduler;
