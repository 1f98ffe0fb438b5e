//! Logging macros.
//!
//! Forward to `defmt` when the `defmt` feature is enabled. Otherwise the
//! arguments are only borrowed, so values that exist just for logging do not
//! trip unused-variable lints. Only primitives are logged so no `Format` impls
//! are needed.

macro_rules! log_with {
    ($level:ident, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        defmt::$level!($fmt $(, $arg)*);
        #[cfg(not(feature = "defmt"))]
        {
            $( let _ = &$arg; )*
        }
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {
        log_with!(trace, $($arg)*)
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        log_with!(debug, $($arg)*)
    };
}

macro_rules! info {
    ($($arg:tt)*) => {
        log_with!(info, $($arg)*)
    };
}

macro_rules! warn {
    ($($arg:tt)*) => {
        log_with!(warn, $($arg)*)
    };
}
