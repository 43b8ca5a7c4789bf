//! Helper functions (combinators) used as composition steps.
//!
//! - [`identity`]: The unit of composition
//! - [`constant`]: Replaces any input with a fixed value
//! - [`tap`]: Runs an effect and passes the value through
//! - [`try_tap`]: Like [`tap`], for effects that can fail

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// - `identity.and_then(f)` is equivalent to `f`
/// - `f.and_then(identity)` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use andthen::compose::{AndThen, identity};
///
/// let square = |x: i32| x * x;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(square.and_then(identity)(6), square(6));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use andthen::compose::{AndThen, constant};
///
/// let always_zero = constant::<_, i32>(0);
/// assert_eq!(always_zero(100), 0);
///
/// let reset = (|x: i32| x * x).and_then(constant::<_, i32>("done"));
/// assert_eq!(reset(7), "done");
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Turns an effect into a pass-through step.
///
/// The returned function calls `effect` with a reference to its argument
/// and then returns the argument unchanged. Useful for logging or printing
/// in the middle of a composition.
///
/// # Examples
///
/// ```
/// use andthen::compose::{AndThen, tap};
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let square = |x: i32| x * x;
///
/// let pipeline = square
///     .and_then(tap(|value: &i32| seen.borrow_mut().push(*value)))
///     .and_then(|x: i32| x + 1);
///
/// assert_eq!(pipeline(5), 26);
/// assert_eq!(*seen.borrow(), vec![25]);
/// ```
#[inline]
pub fn tap<A, F>(effect: F) -> impl Fn(A) -> A
where
    F: Fn(&A),
{
    move |value| {
        effect(&value);
        value
    }
}

/// Turns a fallible effect into a pass-through step.
///
/// The returned function calls `effect` with a reference to its argument.
/// If the effect succeeds the argument is returned in `Ok`; otherwise the
/// effect's error is returned and the argument is dropped.
///
/// # Examples
///
/// ```
/// use andthen::compose::{TryAndThen, try_tap};
///
/// let reject_zero = try_tap(|value: &i32| if *value == 0 { Err("zero") } else { Ok(()) });
/// let invert = |x: i32| Ok::<_, &str>(100 / x);
///
/// let pipeline = reject_zero.try_and_then(invert);
/// assert_eq!(pipeline(4), Ok(25));
/// assert_eq!(pipeline(0), Err("zero"));
/// ```
#[inline]
pub fn try_tap<A, E, F>(effect: F) -> impl Fn(A) -> Result<A, E>
where
    F: Fn(&A) -> Result<(), E>,
{
    move |value| effect(&value).map(|()| value)
}
