//! The loadable runtime module.
//!
//! The host engine loads this library, resolves the exported entry symbol
//! ([`entry::runtime_main`]), and passes it a pointer to the entry
//! descriptor. The entry point publishes the root [`Application`] as an
//! opaque handle, captures the native function tables into process-wide
//! dispatch state, boots the embedded [`ScriptEngine`], and returns. From
//! then on the host drives the module through the application table it got
//! back, and triggers [`entry::runtime_source_file_changed`] whenever the
//! watched user script changes.
//!
//! There is no teardown path: the application and script engine live until
//! process exit.

pub mod application;
pub mod entry;
mod logging;
pub mod script;

pub use application::Application;
pub use script::{ScriptEngine, UserScript};
