//! Function composition utilities.
//!
//! This module composes single-argument functions left to right: the
//! function written first runs first, and its output feeds the next one.
//!
//! # Overview
//!
//! - [`and_then`]: Compose two functions, `and_then(f, g)(x) = g(f(x))`
//! - [`compose`]: The same composition in mathematical notation, `compose(g, f)`
//! - [`try_and_then`]: Compose two `Result`-returning functions, stopping at the first `Err`
//! - [`AndThen`] / [`TryAndThen`]: Method syntax, `f.and_then(g).and_then(h)`
//! - [`chain!`]: Compose any number of functions left to right
//! - [`pipe!`]: Push a value through functions left to right, right now
//!
//! # Helper Functions
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`constant`]: Ignores its argument and returns a fixed value
//! - [`tap`] / [`try_tap`]: Run an effect on the value and pass it through
//!
//! # Examples
//!
//! ## Method syntax
//!
//! ```
//! use andthen::compose::AndThen;
//!
//! let square = |x: i32| x * x;
//! let add_one = |x: i32| x + 1;
//! let to_text = |x: i32| x.to_string();
//!
//! let pipeline = square.and_then(add_one).and_then(to_text);
//! assert_eq!(pipeline(3), "10");
//! ```
//!
//! ## Fail-fast composition
//!
//! ```
//! use andthen::compose::TryAndThen;
//!
//! let parse = |text: &str| text.parse::<i32>().map_err(|_| "not a number");
//! let positive = |n: i32| if n > 0 { Ok(n) } else { Err("not positive") };
//!
//! let validate = parse.try_and_then(positive);
//! assert_eq!(validate("42"), Ok(42));
//! assert_eq!(validate("-1"), Err("not positive"));
//! assert_eq!(validate("x"), Err("not a number"));
//! ```
//!
//! ## Variadic chain
//!
//! ```
//! use andthen::chain;
//!
//! fn square(x: i32) -> i32 { x * x }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let pipeline = chain!(square, double, |x: i32| x - 1);
//! assert_eq!(pipeline(3), 17);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `f.and_then(g).and_then(h) == f.and_then(g.and_then(h))`
//! - **Left Identity**: `identity.and_then(f) == f`
//! - **Right Identity**: `f.and_then(identity) == f`
//! - **Notation**: `compose(g, f) == and_then(f, g)`

mod and_then;
mod chain_macro;
mod pipe_macro;
mod utils;

pub use and_then::{AndThen, TryAndThen, and_then, compose, try_and_then};
pub use utils::{constant, identity, tap, try_tap};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::chain;
pub use crate::pipe;
