//! A two-case sum type, used where a pipeline stage can produce one of two
//! unrelated shapes without forcing a shared supertype.
//!
//! Grounded on `original_source/sinkline/src/Either.h`. The original hand-rolls
//! a tagged union with manual copy/move/dtor plumbing because C++ has no
//! built-in sum type; Rust's `enum` already gives us that for free, so this
//! is a thin, idiomatic restatement rather than a port of the storage layer.

use std::fmt;

/// Holds a `Left` or a `Right`, never both.
#[derive(Debug, Clone, Copy)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    /// True if this is the `Left` case.
    pub fn has_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True if this is the `Right` case.
    pub fn has_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The left value, by reference, if present.
    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The right value, by reference, if present.
    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Runs `if_left` or `if_right` depending on which case this is,
    /// unifying on their common return type. Mirrors `Either::match` in the
    /// original.
    pub fn match_either<T>(self, if_left: impl FnOnce(L) -> T, if_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(l) => if_left(l),
            Either::Right(r) => if_right(r),
        }
    }
}

impl<L: PartialEq, R: PartialEq> PartialEq for Either<L, R> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Either::Left(a), Either::Left(b)) => a == b,
            (Either::Right(a), Either::Right(b)) => a == b,
            _ => false,
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(l) => write!(f, "Left({l})"),
            Either::Right(r) => write!(f, "Right({r})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_right_accessors() {
        let l: Either<i32, &str> = Either::Left(3);
        assert!(l.has_left());
        assert!(!l.has_right());
        assert_eq!(l.left(), Some(&3));
        assert_eq!(l.right(), None);
    }

    #[test]
    fn equality_requires_same_case_and_value() {
        let a: Either<i32, &str> = Either::Left(3);
        let b: Either<i32, &str> = Either::Left(3);
        let c: Either<i32, &str> = Either::Right("3");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn match_either_unifies_both_arms() {
        let l: Either<i32, &str> = Either::Left(3);
        let r: Either<i32, &str> = Either::Right("boom");
        assert_eq!(l.match_either(|n| n.to_string(), |s| s.to_string()), "3");
        assert_eq!(r.match_either(|n| n.to_string(), |s| s.to_string()), "boom");
    }
}
