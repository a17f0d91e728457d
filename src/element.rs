//! Opaque handle to a playable-media UI element
//!
//! The host player owns its video elements. Handlers receive a borrowed
//! handle for the duration of one creation callback and may mutate the
//! poster attribute on it; nothing is retained after the callback returns.

/// A playable-media UI element as seen by creation handlers.
///
/// Only the poster attribute is exposed. The poster is the static thumbnail
/// a video element displays before playback begins, and it is the only
/// attribute the fixup touches.
pub trait VideoElement {
    /// Current poster attribute value, if any
    fn poster(&self) -> Option<String>;

    /// Overwrite the poster attribute
    fn set_poster(&mut self, poster: &str);
}

/// In-memory element that keeps its attributes, for tests and DOM-less hosts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryVideoElement {
    pub poster: Option<String>,
    pub src: Option<String>,
}

impl InMemoryVideoElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element that already carries a poster, like a freshly created
    /// player element pointing at a low-resolution thumbnail
    pub fn with_poster(poster: &str) -> Self {
        InMemoryVideoElement {
            poster: Some(poster.to_string()),
            src: None,
        }
    }
}

impl VideoElement for InMemoryVideoElement {
    fn poster(&self) -> Option<String> {
        self.poster.clone()
    }

    fn set_poster(&mut self, poster: &str) {
        self.poster = Some(poster.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_element_overwrites_poster() {
        let mut el = InMemoryVideoElement::with_poster("http://example.com/thumb.jpg");
        el.set_poster("data:image/gif,AAAA");
        assert_eq!(el.poster().as_deref(), Some("data:image/gif,AAAA"));
    }

    #[test]
    fn in_memory_element_starts_without_attributes() {
        let el = InMemoryVideoElement::new();
        assert!(el.poster().is_none());
        assert!(el.src.is_none());
    }
}
