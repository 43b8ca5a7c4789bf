//! The `chain!` macro for variadic left-to-right composition.

/// Composes any number of functions from left to right.
///
/// `chain!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, and to
/// `f.and_then(g).and_then(h)`.
///
/// # Syntax
///
/// - `chain!(f)` - Returns `f` unchanged
/// - `chain!(f, g)` - Returns `|x| g(f(x))`
/// - `chain!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use andthen::chain;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn to_text(x: i32) -> String { x.to_string() }
///
/// // to_text(add_one(square(4))) = "17"
/// let pipeline = chain!(square, add_one, to_text);
/// assert_eq!(pipeline(4), "17");
/// ```
///
/// ## Agreement with method syntax
///
/// ```
/// use andthen::chain;
/// use andthen::compose::AndThen;
///
/// let f = |x: i32| x + 1;
/// let g = |x: i32| x * 2;
/// let h = |x: i32| x - 3;
///
/// assert_eq!(chain!(f, g, h)(10), f.and_then(g).and_then(h)(10));
/// ```
#[macro_export]
macro_rules! chain {
    ($function:expr $(,)?) => {
        $function
    };

    // chain!(f, g, ...) = and_then(f, chain!(g, ...))
    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let rest = $crate::chain!($($remaining_functions),+);
        move |input| rest(first(input))
    }};
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    #[test]
    fn test_chain_single() {
        let double = |x: i32| x * 2;
        let chained = chain!(double);
        assert_eq!(chained(5), 10);
    }

    #[test]
    fn test_chain_three_runs_in_written_order() {
        let log = RefCell::new(Vec::new());
        let first = |x: i32| {
            log.borrow_mut().push("first");
            x
        };
        let second = |x: i32| {
            log.borrow_mut().push("second");
            x
        };
        let third = |x: i32| {
            log.borrow_mut().push("third");
            x
        };
        let chained = chain!(first, second, third);
        chained(0);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_chain_trailing_comma() {
        let chained = chain!(|x: i32| x + 1, |x: i32| x * 10,);
        assert_eq!(chained(1), 20);
    }
}
