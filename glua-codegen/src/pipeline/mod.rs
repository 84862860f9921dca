//! Compilation pipeline.
//!
//! A [`Pipeline`] turns a generate request into models and bindings through
//! explicit phases (validate → models → bindings), calling plugin hooks
//! around each phase and collecting diagnostics in a shared
//! [`CompilationContext`].
//!
//! ```ignore
//! let ctx = Pipeline::new(lua_target(&options)).run(request, options)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = Generator::from_context(ctx);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::{Pipeline, TargetLanguage};
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
