//! Dependency extraction for single JavaScript/TypeScript files.
//!
//! This crate walks one parsed module and reports every module specifier it
//! references, including:
//! - Static `import` declarations, with the names they import
//! - Re-exports (`export { x } from`, `export * from`)
//! - Dynamic `import()` expressions
//! - TypeScript `import x = require()` and `import("x").T` type references
//! - CommonJS `require()` calls, when mixed imports are enabled
//!
//! # Examples
//!
//! ```
//! use oxideps_core::{Options, Source, extract};
//!
//! # fn main() -> oxideps_core::Result<()> {
//! let deps = extract(Some(Source::Text("import { a, b } from './mod';")), &Options::default())?;
//! assert_eq!(deps[0].specifier, "./mod");
//! assert_eq!(deps[0].imported_names.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
//! # Ok(())
//! # }
//! ```

mod classifier;
mod config;
mod error;
mod extract;
mod source;
mod types;
mod walker;

// Re-export public API
pub use classifier::classify;
pub use config::Options;
pub use error::{Error, Result};
pub use extract::{extract, extract_file, extract_program, extract_tsx};
pub use source::Source;
pub use types::{Dependency, DependencyKind};
pub use walker::walk;
