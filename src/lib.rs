//! Poster fixup for WebView-hosted video players
//!
//! On the WebView engine a low-resolution play icon appears before each
//! clip starts. This crate hides it by overwriting the poster of every
//! newly created video element with a 1x1 transparent image.
//!
//! The host player supplies two surfaces: an element-lifecycle dispatcher
//! ([`ElementDispatcher`]) that reports video-element creation to
//! registered [`ElementHandler`]s, and a [`HostRuntime`] answering which
//! playback engine is embedding the page. The hook itself is stateless; it
//! mutates one attribute per creation callback and holds nothing after the
//! callback returns.
//!
//! # Example
//!
//! ```
//! use posterfix::{
//!     install_poster_fix, FixupConfig, InMemoryDispatcher, InMemoryVideoElement,
//!     StaticHostRuntime, VideoElement, TRANSPARENT_POSTER,
//! };
//!
//! let dispatcher = InMemoryDispatcher::new();
//! let runtime = StaticHostRuntime::default();
//! let armed = install_poster_fix(&dispatcher, &runtime, &FixupConfig::default());
//! assert!(armed);
//!
//! let mut video = InMemoryVideoElement::with_poster("http://example.com/thumb.jpg");
//! dispatcher.notify_created(Some(&mut video));
//! assert_eq!(video.poster().as_deref(), Some(TRANSPARENT_POSTER));
//! ```

pub mod addons;
pub mod dispatcher;
pub mod element;
pub mod error;
pub mod poster;
pub mod runtime;

pub use addons::{Addon, AddonContext, AddonRegistry};
pub use dispatcher::{ElementDispatcher, ElementHandler, InMemoryDispatcher};
pub use element::{InMemoryVideoElement, VideoElement};
pub use error::{Error, Result};
pub use poster::{PosterFix, TRANSPARENT_POSTER};
pub use runtime::{HostRuntime, StaticHostRuntime};

/// Configuration for installing the poster fix
///
/// The default matches the fix's observed production behavior: activation is
/// unconditional. Setting `webview_only` restores the original intent of
/// arming only inside the embedded web-rendering engine and skipping hosts
/// where a native player engine is active.
#[derive(Debug, Clone)]
pub struct FixupConfig {
    /// Arm only when the host reports a WebView surface with no native
    /// player engine active
    pub webview_only: bool,
}

impl Default for FixupConfig {
    fn default() -> Self {
        Self {
            webview_only: false,
        }
    }
}

/// Install the poster fix against the host's dispatcher.
///
/// Intended to be called exactly once during host application startup.
/// Returns whether the hook was armed; it is skipped only when
/// `webview_only` is set and the runtime does not match.
pub fn install_poster_fix(
    dispatcher: &dyn ElementDispatcher,
    runtime: &dyn HostRuntime,
    config: &FixupConfig,
) -> bool {
    PosterFix::from_config(config).arm(dispatcher, runtime)
}
