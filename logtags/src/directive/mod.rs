//! Display directives: what may be shown for a field, and how strings are cut.
//!
//! This module provides:
//!
//! - **Directives** (`directives`): the [`DisplayDirective`] enum, the
//!   [`FieldLogging`] schema annotation and its [`DisplayMode`].
//!
//! - **Text trimming** (`text`): [`TrimConfig`], the string arithmetic shared by
//!   the trimming directives.
//!
//! # Example
//!
//! ```rust
//! use logtags::TrimConfig;
//!
//! assert_eq!(TrimConfig::tail(4).apply_to("sk_live_abc123def456"), "<...>f456");
//! assert_eq!(TrimConfig::both(2, 2).apply_to("4111111111111111"), "41<...>11");
//! ```

pub mod directives;
pub mod text;

pub use directives::{DEFAULT_MASK, DisplayDirective, DisplayMode, FieldLogging};
pub use text::{TRIM_MARKER, TrimConfig};
