//! Poster fixup hook
//!
//! On the WebView engine a low-resolution play icon appears before each
//! clip. Fix that by replacing the poster with a transparent image so the
//! frame stays black until playback starts.

use std::sync::Arc;

use log::{debug, info};

use crate::addons::{Addon, AddonContext};
use crate::dispatcher::{ElementDispatcher, ElementHandler};
use crate::element::VideoElement;
use crate::runtime::HostRuntime;
use crate::FixupConfig;

/// 1x1 transparent image assigned in place of the low-resolution poster
pub const TRANSPARENT_POSTER: &str = "data:image/gif,AAAA";

/// Creation hook that blanks the poster of every new video element
///
/// Stateless between invocations: it holds no element references after a
/// callback returns, and reacts identically to every creation event.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosterFix {
    webview_only: bool,
}

impl PosterFix {
    /// Hook that arms unconditionally (the observed production behavior)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FixupConfig) -> Self {
        PosterFix {
            webview_only: config.webview_only,
        }
    }

    /// Register this hook's creation callback with the dispatcher.
    ///
    /// Expected to be called exactly once during host startup. There is no
    /// guard against double registration; a second call registers a second
    /// handler.
    pub fn activate(&self, dispatcher: &dyn ElementDispatcher) {
        info!("poster fix armed");
        dispatcher.add_handler(Arc::new(*self));
    }

    /// Whether the hook should arm on the given host.
    ///
    /// Always true unless `webview_only` is set, in which case the host
    /// must be a WebView surface without a native player engine active.
    pub fn should_arm(&self, runtime: &dyn HostRuntime) -> bool {
        !self.webview_only || (runtime.is_webview() && !runtime.is_native_player())
    }

    /// Apply the platform guard and activate when it passes.
    ///
    /// Returns whether the hook was armed.
    pub fn arm(&self, dispatcher: &dyn ElementDispatcher, runtime: &dyn HostRuntime) -> bool {
        if !self.should_arm(runtime) {
            debug!("poster fix skipped: host is not a plain WebView surface");
            return false;
        }
        self.activate(dispatcher);
        true
    }
}

impl ElementHandler for PosterFix {
    fn on_create(&self, element: Option<&mut dyn VideoElement>) {
        if let Some(el) = element {
            debug!("blanking poster on new video element");
            el.set_poster(TRANSPARENT_POSTER);
        }
    }
}

impl Addon for PosterFix {
    fn name(&self) -> &str {
        "poster_fix"
    }

    fn run(&self, ctx: &AddonContext<'_>) {
        self.arm(ctx.dispatcher, ctx.runtime);
    }
}
