//! Platform detection and wheel platform tags
//!
//! This module maps the host's operating system and architecture onto one of
//! the fixed platform keys for which `algebraic_immunity` wheels are built.

mod host;
mod key;

pub use host::HostPlatform;
pub use key::{PlatformKey, UnsupportedPlatform};
