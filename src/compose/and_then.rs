//! The `and_then` combinator and its method-syntax traits.

/// Composes two functions left to right.
///
/// `and_then(f, g)(x)` is equivalent to `g(f(x))`. The returned function
/// owns both operands and can be called any number of times; each call runs
/// `first` exactly once and then `next` exactly once.
///
/// If `first` panics, the panic unwinds through the composed function and
/// `next` is never called. Use [`try_and_then`] for functions that report
/// failure through `Result`.
///
/// # Type Parameters
///
/// * `A` - Input type of the composed function
/// * `B` - Output of `first`, input of `next`
/// * `C` - Output of the composed function
///
/// # Examples
///
/// ```
/// use andthen::compose::and_then;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn describe(x: i32) -> String { format!("value {x}") }
///
/// let composed = and_then(square, describe);
/// assert_eq!(composed(5), "value 25");
/// assert_eq!(composed(3), "value 9");
/// ```
///
/// The output of `first` must match the input of `next`:
///
/// ```compile_fail
/// use andthen::compose::and_then;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn shout(text: String) -> String { text.to_uppercase() }
///
/// let composed = and_then(square, shout);
/// ```
#[inline]
pub fn and_then<A, B, C, F, G>(first: F, next: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| next(first(input))
}

/// Composes two functions in mathematical (right-to-left) notation.
///
/// `compose(g, f)(x)` is `g(f(x))`, the same function as `and_then(f, g)`.
///
/// # Examples
///
/// ```
/// use andthen::compose::{and_then, compose};
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(compose(add_one, double)(5), 11);
/// assert_eq!(compose(add_one, double)(5), and_then(double, add_one)(5));
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: G, inner: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    and_then(inner, outer)
}

/// Composes two `Result`-returning functions, stopping at the first error.
///
/// `try_and_then(f, g)(x)` runs `f(x)`. On `Ok(b)` it returns `g(b)`; on
/// `Err(e)` it returns `Err(e)` unchanged and `g` is not called.
///
/// # Examples
///
/// ```
/// use andthen::compose::try_and_then;
///
/// fn halve(n: u32) -> Result<u32, String> {
///     if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) }
/// }
///
/// let quarter = try_and_then(halve, halve);
/// assert_eq!(quarter(12), Ok(3));
/// assert_eq!(quarter(6), Err("3 is odd".to_string()));
/// assert_eq!(quarter(5), Err("5 is odd".to_string()));
/// ```
#[inline]
pub fn try_and_then<A, B, C, E, F, G>(first: F, next: G) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(A) -> Result<B, E>,
    G: Fn(B) -> Result<C, E>,
{
    move |input| first(input).and_then(&next)
}

/// Method syntax for [`and_then`].
///
/// Implemented for every `Fn(A) -> B`, including closures, function items
/// and the functions returned by `and_then` itself, so compositions chain:
///
/// ```
/// use andthen::compose::AndThen;
///
/// let square = |x: i32| x * x;
/// let halve = |x: i32| x / 2;
/// let negate = |x: i32| -x;
///
/// let pipeline = square.and_then(halve).and_then(negate);
/// assert_eq!(pipeline(4), -8);
/// ```
pub trait AndThen<A, B>: Fn(A) -> B + Sized {
    /// Returns a function that applies `self` and then `next`.
    fn and_then<C, G>(self, next: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C;
}

impl<A, B, F> AndThen<A, B> for F
where
    F: Fn(A) -> B,
{
    #[inline]
    fn and_then<C, G>(self, next: G) -> impl Fn(A) -> C
    where
        G: Fn(B) -> C,
    {
        and_then(self, next)
    }
}

/// Method syntax for [`try_and_then`].
///
/// ```
/// use andthen::compose::TryAndThen;
///
/// let checked_square = |x: i32| x.checked_mul(x).ok_or("overflow");
/// let checked_increment = |x: i32| x.checked_add(1).ok_or("overflow");
///
/// let pipeline = checked_square.try_and_then(checked_increment);
/// assert_eq!(pipeline(3), Ok(10));
/// assert_eq!(pipeline(i32::MAX), Err("overflow"));
/// ```
pub trait TryAndThen<A, B, E>: Fn(A) -> Result<B, E> + Sized {
    /// Returns a function that applies `self` and, if it succeeds, `next`.
    fn try_and_then<C, G>(self, next: G) -> impl Fn(A) -> Result<C, E>
    where
        G: Fn(B) -> Result<C, E>;
}

impl<A, B, E, F> TryAndThen<A, B, E> for F
where
    F: Fn(A) -> Result<B, E>,
{
    #[inline]
    fn try_and_then<C, G>(self, next: G) -> impl Fn(A) -> Result<C, E>
    where
        G: Fn(B) -> Result<C, E>,
    {
        try_and_then(self, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_and_then_applies_left_first() {
        let subtract_three = |x: i32| x - 3;
        let double = |x: i32| x * 2;
        // (10 - 3) * 2, not 10 * 2 - 3
        assert_eq!(and_then(subtract_three, double)(10), 14);
    }

    #[test]
    fn test_and_then_changes_types() {
        let length = |text: &str| text.len();
        let is_even = |n: usize| n % 2 == 0;
        let composed = and_then(length, is_even);
        assert!(composed("abcd"));
        assert!(!composed("abc"));
    }

    #[test]
    fn test_and_then_reruns_both_functions_per_call() {
        let calls = RefCell::new(0);
        let counted = |x: i32| {
            *calls.borrow_mut() += 1;
            x
        };
        let composed = and_then(counted, |x: i32| x + 1);
        composed(1);
        composed(2);
        composed(3);
        assert_eq!(*calls.borrow(), 3);
    }

    #[test]
    fn test_try_and_then_skips_next_on_error() {
        let reached = RefCell::new(false);
        let fail = |_: i32| -> Result<i32, &'static str> { Err("boom") };
        let next = |x: i32| -> Result<i32, &'static str> {
            *reached.borrow_mut() = true;
            Ok(x)
        };
        assert_eq!(try_and_then(fail, next)(1), Err("boom"));
        assert!(!*reached.borrow());
    }

    #[test]
    fn test_method_syntax_on_function_item() {
        fn square(x: i64) -> i64 {
            x * x
        }
        let composed = square.and_then(|x: i64| x + 1);
        assert_eq!(composed(7), 50);
    }
}
