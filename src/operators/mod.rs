//! The operator set from `original_source/sinkline/src/Operators.h`: small,
//! composable transforms that each wrap one step of a sinkline.
//!
//! Every operator exposes a `compose(next)` method that wires it in front of
//! whatever consumer follows, returning a new consumer over the operator's
//! own (possibly different) argument list. The [`crate::sinkline!`] macro
//! chains these together; nothing stops calling `compose` by hand instead.

mod filter;
mod ignore_null;
mod map;
mod on_error;
mod recover;
mod reduce;
mod scan;
mod schedule_on;
mod side_effect;
mod then;

pub use filter::{Filter, filter};
pub use ignore_null::ignore_null;
pub use map::{Map, map};
pub use on_error::{OnError, on_error};
pub use recover::{Recover, recover};
pub use reduce::{Reduce, reduce};
pub use scan::{Scan, scan, scan_unlocked};
pub use schedule_on::{ScheduleOn, schedule_on};
pub use side_effect::{SideEffect, side_effect};
pub use then::{Then, then};
