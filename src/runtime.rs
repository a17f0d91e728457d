//! Host runtime capability queries
//!
//! The poster fix targets the embedded web-rendering (WebView) surface.
//! Hosts that swap in a native player engine report that here so gated
//! addons can skip arming.

/// Boolean capability queries about the embedding host
pub trait HostRuntime: Send + Sync {
    /// Whether rendering happens inside the embedded web-rendering engine
    fn is_webview(&self) -> bool;

    /// Whether a native (non-WebView) player engine is active
    fn is_native_player(&self) -> bool;
}

/// Runtime description with fixed answers
#[derive(Debug, Clone, Copy)]
pub struct StaticHostRuntime {
    pub webview: bool,
    pub native_player: bool,
}

impl Default for StaticHostRuntime {
    fn default() -> Self {
        // The environment the fix was written for: a WebView host with no
        // native player engine active.
        StaticHostRuntime {
            webview: true,
            native_player: false,
        }
    }
}

impl HostRuntime for StaticHostRuntime {
    fn is_webview(&self) -> bool {
        self.webview
    }

    fn is_native_player(&self) -> bool {
        self.native_player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runtime_is_a_plain_webview_host() {
        let r = StaticHostRuntime::default();
        assert!(r.is_webview());
        assert!(!r.is_native_player());
    }

    #[test]
    fn static_runtime_reports_fixed_answers() {
        let r = StaticHostRuntime {
            webview: false,
            native_player: true,
        };
        assert!(!r.is_webview());
        assert!(r.is_native_player());
    }
}
