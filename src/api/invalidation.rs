use serde::{Deserialize, Serialize};

use crate::render::Renderer;

use super::TimelineEngine;

/// Ordered repaint classes requested from the rendering surface.
///
/// - `Scroll`: only the scroll offset moved; cells and sizes are unchanged.
/// - `Layout`: cell size changed (zoom factor); cached models stay valid.
/// - `Full`: cell count or cell content changed; every visible row is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    Scroll,
    Layout,
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// Domain-oriented reason attached to a repaint request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Scroll,
    Zoom,
    Level,
    Intervals,
    Style,
    Viewport,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Scroll => 1 << 0,
            Self::Zoom => 1 << 1,
            Self::Level => 1 << 2,
            Self::Intervals => 1 << 3,
            Self::Style => 1 << 4,
            Self::Viewport => 1 << 5,
        }
    }

    #[must_use]
    pub const fn level(self) -> InvalidationLevel {
        match self {
            Self::Scroll => InvalidationLevel::Scroll,
            Self::Zoom => InvalidationLevel::Layout,
            Self::Level | Self::Intervals | Self::Style | Self::Viewport => InvalidationLevel::Full,
        }
    }
}

/// Coalesced invalidation request consumed by the host's frame scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationMask {
    level: InvalidationLevel,
    topics: u8,
}

impl InvalidationMask {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            level: InvalidationLevel::None,
            topics: 0,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self {
            level: topic.level(),
            topics: topic.bit(),
        }
    }

    #[must_use]
    pub const fn level(self) -> InvalidationLevel {
        self.level
    }

    #[must_use]
    pub const fn has_topic(self, topic: InvalidationTopic) -> bool {
        (self.topics & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self.level, InvalidationLevel::None)
    }

    pub fn merge(&mut self, other: Self) {
        self.level = self.level.max(other.level);
        self.topics |= other.topics;
    }
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationMask {
        self.core.runtime.pending_invalidation
    }

    /// Returns and clears the pending invalidation.
    pub fn take_pending_invalidation(&mut self) -> InvalidationMask {
        std::mem::take(&mut self.core.runtime.pending_invalidation)
    }

    pub(super) fn invalidate(&mut self, topic: InvalidationTopic) {
        let mask = InvalidationMask::from_topic(topic);
        if mask.level() == InvalidationLevel::Full {
            self.core.runtime.cell_cache.clear();
        }
        self.core.runtime.pending_invalidation.merge(mask);
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidationLevel, InvalidationMask, InvalidationTopic};

    #[test]
    fn merge_keeps_highest_level_and_all_topics() {
        let mut mask = InvalidationMask::from_topic(InvalidationTopic::Scroll);
        mask.merge(InvalidationMask::from_topic(InvalidationTopic::Zoom));
        assert_eq!(mask.level(), InvalidationLevel::Layout);
        assert!(mask.has_topic(InvalidationTopic::Scroll));
        assert!(mask.has_topic(InvalidationTopic::Zoom));
        assert!(!mask.has_topic(InvalidationTopic::Intervals));

        mask.merge(InvalidationMask::from_topic(InvalidationTopic::Intervals));
        assert_eq!(mask.level(), InvalidationLevel::Full);
    }
}
