//! Startup addon wiring
//!
//! The original fix armed itself as a load-time side effect of the host's
//! addon auto-registration. Here the host arms its fixups explicitly: it
//! registers addons under unique names and runs them exactly once during
//! startup, in registration order.

use log::info;

use crate::dispatcher::ElementDispatcher;
use crate::error::{Error, Result};
use crate::runtime::HostRuntime;

/// Borrowed host surfaces handed to each addon while it arms itself
pub struct AddonContext<'a> {
    pub dispatcher: &'a dyn ElementDispatcher,
    pub runtime: &'a dyn HostRuntime,
}

/// A startup fixup that arms itself against the host
pub trait Addon: Send + Sync {
    /// Unique addon name, used to reject duplicate registrations
    fn name(&self) -> &str;

    /// Arm the addon; invoked once during host startup
    fn run(&self, ctx: &AddonContext<'_>);
}

/// Ordered set of startup addons, run exactly once
#[derive(Default)]
pub struct AddonRegistry {
    addons: Vec<Box<dyn Addon>>,
    started: bool,
}

impl AddonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an addon for the next startup pass
    pub fn register(&mut self, addon: Box<dyn Addon>) -> Result<()> {
        if self.addons.iter().any(|a| a.name() == addon.name()) {
            return Err(Error::DuplicateAddon(addon.name().to_string()));
        }
        self.addons.push(addon);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.addons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }

    /// Run every addon in registration order. A second call is an error so
    /// hooks without their own double-registration guard stay armed exactly
    /// once per process.
    pub fn run_all(&mut self, ctx: &AddonContext<'_>) -> Result<()> {
        if self.started {
            return Err(Error::AlreadyStarted);
        }
        self.started = true;
        for addon in &self.addons {
            info!("running startup addon: {}", addon.name());
            addon.run(ctx);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::InMemoryDispatcher;
    use crate::runtime::StaticHostRuntime;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingAddon {
        name: &'static str,
        runs: Arc<AtomicUsize>,
    }

    impl Addon for CountingAddon {
        fn name(&self) -> &str {
            self.name
        }

        fn run(&self, _ctx: &AddonContext<'_>) {
            self.runs.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut reg = AddonRegistry::new();
        reg.register(Box::new(CountingAddon { name: "fix", runs: runs.clone() }))
            .unwrap();
        let err = reg
            .register(Box::new(CountingAddon { name: "fix", runs }))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateAddon(name) if name == "fix"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn run_all_runs_each_addon_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let mut reg = AddonRegistry::new();
        reg.register(Box::new(CountingAddon { name: "a", runs: runs.clone() }))
            .unwrap();
        reg.register(Box::new(CountingAddon { name: "b", runs: runs.clone() }))
            .unwrap();

        let d = InMemoryDispatcher::new();
        let r = StaticHostRuntime::default();
        let ctx = AddonContext {
            dispatcher: &d,
            runtime: &r,
        };
        reg.run_all(&ctx).unwrap();
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn second_startup_pass_is_an_error() {
        let mut reg = AddonRegistry::new();
        let d = InMemoryDispatcher::new();
        let r = StaticHostRuntime::default();
        let ctx = AddonContext {
            dispatcher: &d,
            runtime: &r,
        };
        reg.run_all(&ctx).unwrap();
        assert!(matches!(reg.run_all(&ctx), Err(Error::AlreadyStarted)));
    }
}
