//! Filesystem writes.

mod atomic;

pub use atomic::replace;
