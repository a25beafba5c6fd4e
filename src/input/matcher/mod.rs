mod core;
#[cfg(any(test, feature = "diagnostics"))]
mod diagnostics;
mod keys;
mod mouse;
mod ready;

pub use self::core::{MatcherError, ShortcutMatcher};
#[cfg(any(test, feature = "diagnostics"))]
pub use self::diagnostics::MatcherDiagnostics;
