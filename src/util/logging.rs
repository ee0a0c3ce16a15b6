//! Thin forwarding macros so that the `log` dependency stays optional. With the feature disabled
//! the arguments are still type-checked but nothing is logged.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::log::trace!(target: "filesys", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)+) => {
        ::log::debug!(target: "filesys", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)+) => {
        if false {
            let _ = format_args!($($arg)+);
        }
    };
}

pub(crate) use debug;
pub(crate) use trace;
