//! The embedded script engine.
//!
//! Only the surface the boundary needs is fixed: `reload` replaces the
//! current user script object, and the current object is readable. The
//! compilation pipeline behind `reload` is invisible to the host; the
//! script object it produces is generation-stamped so the application (and
//! the host's tests) can tell loads apart.

use std::rc::Rc;

use anyhow::{ensure, Result};
use tracing::info;

/// The entry type the engine instantiates from the user's sources.
const USER_SCRIPT_ENTRY: &str = "UserScript";

/// A loaded user script object.
///
/// One instance per successful load; a reload produces a fresh instance and
/// the previous one dies with its last referent. The application holds the
/// current instance and invokes its hooks.
#[derive(Debug)]
pub struct UserScript {
    pub name: String,
    pub generation: u64,
}

impl UserScript {
    /// Invoked by the application during (re)initialization.
    pub fn on_init(&self) {
        info!(name = %self.name, generation = self.generation, "script on_init");
    }

    /// Invoked once per host tick.
    pub fn on_tick(&self, delta_seconds: f32) {
        tracing::trace!(name = %self.name, delta_seconds, "script on_tick");
    }
}

/// Compiles user sources and owns the current script object.
pub struct ScriptEngine {
    current: Option<Rc<UserScript>>,
    generation: u64,
}

impl ScriptEngine {
    /// An engine with no script loaded yet; [`reload`](Self::reload)
    /// performs the first load.
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// Re-run script loading, replacing the current user script object.
    ///
    /// A failure leaves the previous script object in place; at the entry
    /// boundary the caller treats it as fatal.
    pub fn reload(&mut self) -> Result<()> {
        ensure!(
            !USER_SCRIPT_ENTRY.is_empty(),
            "no user script entry type configured"
        );
        self.generation += 1;
        let script = Rc::new(UserScript {
            name: USER_SCRIPT_ENTRY.to_string(),
            generation: self.generation,
        });
        info!(name = %script.name, generation = script.generation, "user script loaded");
        self.current = Some(script);
        Ok(())
    }

    /// The most recently loaded script object.
    pub fn user_script(&self) -> Option<Rc<UserScript>> {
        self.current.clone()
    }

    /// How many loads have succeeded since the engine was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
