/*!
 * Debug Tracing
 *
 * Caller-located diagnostic prints, compiled out of release builds.
 *
 * The [`trace!`](crate::trace!) macro writes `<prefix><file>:<line>:<fn>`
 * followed by an optional `": "`-separated argument list to standard error,
 * but only when `debug_assertions` is enabled. In release builds the whole
 * invocation, arguments included, compiles to `()`.
 *
 * The prefix defaults to [`DEFAULT_PREFIX`] and can be overridden at build
 * time through the `RESGUARD_TRACE_PREFIX` environment variable. The
 * destination can be overridden per call with
 * [`trace_to!`](crate::trace_to!), which accepts any [`std::io::Write`].
 *
 * ## Example
 *
 * ```rust
 * use resguard::trace;
 *
 * fn connect(port: u16) {
 *     trace!("connecting", port);
 *     // [TRACE] src/net.rs:42:connect: connecting, 8080
 * }
 * # connect(8080);
 * ```
 */

use std::fmt;
use std::io::Write;

/// Default prefix written before every trace line
pub const DEFAULT_PREFIX: &str = "[TRACE] ";

/// Prefix in effect: the build-time override, or the default
///
/// Resolved when this crate is compiled; set `RESGUARD_TRACE_PREFIX` in the
/// build environment to override.
#[inline]
pub fn prefix() -> &'static str {
    match option_env!("RESGUARD_TRACE_PREFIX") {
        Some(prefix) => prefix,
        None => DEFAULT_PREFIX,
    }
}

/// Formatting helper behind the tracing macros
///
/// Construction writes the location header and nothing else. The caller
/// then appends either an argument list ([`values`](Self::values)) or the
/// bare terminator ([`finish`](Self::finish)). Writes are fire-and-forget:
/// stream failures are swallowed, as usual for diagnostic output.
pub struct Tracer<W: Write> {
    out: W,
}

impl<W: Write> Tracer<W> {
    /// Write the location header using the configured prefix
    pub fn new(out: W, file: &str, line: u32, func: &str) -> Self {
        Self::with_prefix(out, prefix(), file, line, func)
    }

    /// Write the location header with an explicit prefix
    pub fn with_prefix(mut out: W, prefix: &str, file: &str, line: u32, func: &str) -> Self {
        let _ = write!(out, "{}{}:{}:{}", prefix, file, line, func);
        Self { out }
    }

    /// Append `": "`, the comma-separated values, and a newline
    pub fn values(&mut self, args: &[&dyn fmt::Display]) -> &mut Self {
        let _ = self.out.write_all(b": ");
        for (index, arg) in args.iter().enumerate() {
            if index > 0 {
                let _ = self.out.write_all(b", ");
            }
            let _ = write!(self.out, "{}", arg);
        }
        let _ = self.out.write_all(b"\n");
        self
    }

    /// Terminator form: append the newline alone
    pub fn finish(&mut self) -> &mut Self {
        let _ = self.out.write_all(b"\n");
        self
    }
}

#[doc(hidden)]
pub fn type_name_of<T>(_: T) -> &'static str {
    std::any::type_name::<T>()
}

#[doc(hidden)]
pub fn enclosing_fn_name(probe: &'static str) -> &'static str {
    // The probe is a fn item declared inside the caller, so its type name
    // is `<path>::<caller>::f`, plus a `{{closure}}` segment when the
    // caller is a closure body.
    let path = probe.strip_suffix("::f").unwrap_or(probe);
    let path = path.strip_suffix("::{{closure}}").unwrap_or(path);
    path.rsplit("::").next().unwrap_or(path)
}

/// Expands to the bare name of the enclosing function
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        $crate::trace::enclosing_fn_name($crate::trace::type_name_of(f))
    }};
}

/// Print caller location and arguments to standard error in debug builds
///
/// `trace!(a, b)` writes `<prefix><file>:<line>:<fn>: a, b\n`. The
/// zero-argument form is the explicit terminator: header and newline, with
/// no trailing `": "`. Arguments must implement [`std::fmt::Display`].
///
/// When `debug_assertions` is off the invocation compiles to `()` and the
/// arguments are not evaluated.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! trace {
    () => {{
        $crate::trace::Tracer::new(
            ::std::io::stderr().lock(),
            file!(),
            line!(),
            $crate::function_name!(),
        )
        .finish();
    }};
    ($($arg:expr),+ $(,)?) => {{
        $crate::trace::Tracer::new(
            ::std::io::stderr().lock(),
            file!(),
            line!(),
            $crate::function_name!(),
        )
        .values(&[$(&$arg as &dyn ::std::fmt::Display),+]);
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        ()
    };
}

/// Like [`trace!`](crate::trace!), but writes to the given stream
///
/// The first operand is any value implementing [`std::io::Write`]; the rest
/// follow [`trace!`](crate::trace!) exactly. Compiles to `()` in release
/// builds without evaluating any operand.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! trace_to {
    ($out:expr) => {{
        $crate::trace::Tracer::new(&mut $out, file!(), line!(), $crate::function_name!()).finish();
    }};
    ($out:expr, $($arg:expr),+ $(,)?) => {{
        $crate::trace::Tracer::new(&mut $out, file!(), line!(), $crate::function_name!())
            .values(&[$(&$arg as &dyn ::std::fmt::Display),+]);
    }};
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! trace_to {
    ($($arg:tt)*) => {
        ()
    };
}
