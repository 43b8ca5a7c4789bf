//! The square / greet / print pipeline.
//!
//! Each step is a plain closure; `andthen` glues them together. The greeting
//! and result steps write to a shared sink so tests can capture the output.

use std::cell::RefCell;
use std::fmt;
use std::io::Write;

use andthen::compose::{AndThen, TryAndThen, try_tap};

use crate::config::GreetingConfig;
use crate::error::GreetingError;

/// Squares its input, wrapping on overflow.
///
/// ```rust
/// use greeting::square;
///
/// assert_eq!(square(5), 25);
/// assert_eq!(square(-3), 9);
/// ```
pub const fn square(x: i32) -> i32 {
    x.wrapping_mul(x)
}

fn write_line<W: Write>(sink: &RefCell<W>, line: fmt::Arguments<'_>) -> Result<(), GreetingError> {
    let mut output = sink.borrow_mut();
    writeln!(output, "{line}")?;
    Ok(())
}

/// Builds `square -> greet -> print_result` over `sink`.
///
/// The greeting step writes `Hello <n>` and passes `n` on unchanged; the
/// result step writes `Result: <n>`. If the greeting cannot be written, the
/// result step is skipped and the write error is returned.
///
/// The returned function can be called any number of times.
///
/// ```rust
/// use std::cell::RefCell;
/// use greeting::build_pipeline;
///
/// let sink = RefCell::new(Vec::new());
/// let pipeline = build_pipeline(&sink);
///
/// pipeline(5).unwrap();
/// assert_eq!(String::from_utf8(sink.take()).unwrap(), "Hello 25\nResult: 25\n");
/// ```
pub fn build_pipeline<W: Write>(
    sink: &RefCell<W>,
) -> impl Fn(i32) -> Result<(), GreetingError> {
    let greet = try_tap(move |it: &i32| {
        tracing::debug!(value = *it, "greeting");
        write_line(sink, format_args!("Hello {it}"))
    });
    let print_result = move |i: i32| {
        tracing::debug!(value = i, "printing result");
        write_line(sink, format_args!("Result: {i}"))
    };

    square.and_then(greet).try_and_then(print_result)
}

/// Runs the pipeline once for every configured input, in order.
///
/// Stops at the first failure and flushes the sink on success.
///
/// # Errors
///
/// Returns [`GreetingError::Output`] if writing to or flushing `sink` fails.
pub fn run<W: Write>(config: &GreetingConfig, sink: &RefCell<W>) -> Result<(), GreetingError> {
    let pipeline = build_pipeline(sink);

    for &input in &config.inputs {
        tracing::info!(input, "running pipeline");
        pipeline(input)?;
    }

    sink.borrow_mut().flush()?;
    Ok(())
}
