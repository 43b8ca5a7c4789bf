//! # andthen
//!
//! Left-to-right function composition for Rust closures.
//!
//! ## Overview
//!
//! The crate is built around a single combinator, [`and_then`](compose::and_then):
//! given `f: A -> B` and `g: B -> C` it returns `h: A -> C` with
//! `h(a) == g(f(a))`. Around it sit a few helpers from the same family:
//!
//! - **Extension traits**: [`AndThen`](compose::AndThen) and
//!   [`TryAndThen`](compose::TryAndThen) for `f.and_then(g)` method syntax
//! - **Fallible composition**: `try_and_then` short-circuits on `Err`
//! - **Pass-through steps**: `tap` and `try_tap` run an effect and return
//!   their input unchanged
//! - **Macros**: `chain!` for variadic composition, `pipe!` for immediate
//!   application
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities (enabled by default)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use andthen::prelude::*;
//!
//! let square = |x: i32| x * x;
//! let describe = |x: i32| format!("squared: {x}");
//!
//! let pipeline = square.and_then(describe);
//! assert_eq!(pipeline(5), "squared: 25");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the combinators, extension traits and macros.
///
/// # Usage
///
/// ```rust
/// use andthen::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "compose")]
pub mod compose;
