//! The `pipe!` macro for immediate left-to-right application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, which is
/// `chain!(f, g, h)(x)` without building the intermediate function.
///
/// Each function is called exactly once, so [`FnOnce`] closures are
/// accepted.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged (a trailing comma is accepted in every form)
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use andthen::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn describe(x: i32) -> String { format!("Result: {x}") }
///
/// assert_eq!(pipe!(5, square, describe), "Result: 25");
/// ```
///
/// ## Consuming closures
///
/// ```
/// use andthen::pipe;
///
/// let suffix = String::from("!");
/// let shout = move |text: String| text.to_uppercase() + &suffix;
///
/// assert_eq!(pipe!("hello".to_string(), shout), "HELLO!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
