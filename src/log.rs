//! Conditional logging macros.
//!
//! With the `tracing` feature these are the `tracing` macros; without it
//! they expand to nothing, so layout code can log freely at no cost.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, trace, warn};
