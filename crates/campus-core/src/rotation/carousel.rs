use std::time::Duration;

use tracing::debug;

use super::items::{ItemList, ListIdentity, MediaKind, RotationItem};
use super::viewport::Breakpoints;
use crate::config::RotationConfig;

/// Layout and transition settings shared by every carousel on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSettings {
    pub breakpoints: Breakpoints,
    pub max_visible: usize,
    pub fade: Duration,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::from(&RotationConfig::default())
    }
}

impl From<&RotationConfig> for CarouselSettings {
    fn from(config: &RotationConfig) -> Self {
        Self {
            breakpoints: Breakpoints {
                medium: config.medium_breakpoint,
                wide: config.wide_breakpoint,
            },
            max_visible: config.max_visible,
            fade: config.fade,
        }
    }
}

/// Cursor state owned by one rotation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    pub current_index: usize,
    pub visible_count: usize,
    pub is_cycling: bool,
}

/// How a video slot plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoPlayback {
    pub autoplay: bool,
    pub muted: bool,
    pub looped: bool,
}

impl VideoPlayback {
    pub fn for_item(item: &RotationItem) -> Option<Self> {
        (item.media_kind == MediaKind::Video).then_some(Self {
            autoplay: true,
            muted: true,
            looped: true,
        })
    }
}

/// What the host draws for one carousel at this moment.
#[derive(Debug, Clone)]
pub struct CarouselFrame<'a> {
    pub active_index: usize,
    pub active: &'a RotationItem,
    /// Item fading out, present only right after an advance.
    pub outgoing: Option<&'a RotationItem>,
    /// `visible_count` items starting at the cursor, wrapping around.
    pub window: Vec<&'a RotationItem>,
    pub fade: Duration,
    pub playback: Option<VideoPlayback>,
}

/// Discrete-step rotation over an externally supplied list.
#[derive(Debug)]
pub struct Carousel {
    settings: CarouselSettings,
    list: ItemList,
    state: RotationState,
    previous_index: Option<usize>,
    viewport_width: u32,
    visible: bool,
    advances: u64,
}

impl Carousel {
    pub fn new(settings: CarouselSettings, viewport_width: u32) -> Self {
        Self {
            settings,
            list: ItemList::empty(),
            state: RotationState {
                current_index: 0,
                visible_count: 0,
                is_cycling: false,
            },
            previous_index: None,
            viewport_width,
            visible: true,
            advances: 0,
        }
    }

    pub fn with_items(settings: CarouselSettings, viewport_width: u32, list: ItemList) -> Self {
        let mut carousel = Self::new(settings, viewport_width);
        carousel.replace_items(list);
        carousel
    }

    /// Swaps in a new list and rewinds the cursor. Same identity is a no-op.
    pub fn replace_items(&mut self, list: ItemList) -> bool {
        if list.identity() == self.list.identity() {
            return false;
        }
        debug!(
            previous_len = self.list.len(),
            next_len = list.len(),
            "rotation list replaced; cursor reset"
        );
        self.list = list;
        self.state.current_index = 0;
        self.previous_index = None;
        self.advances = 0;
        self.recompute();
        true
    }

    pub fn resize(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
        self.recompute();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.state.visible_count = self.settings.breakpoints.visible_count(
            self.viewport_width,
            self.settings.max_visible,
            self.list.len(),
        );
        self.state.is_cycling = self.visible && self.list.len() > 1;
    }

    /// Moves the cursor one step, wrapping at the end. `None` while not cycling.
    pub fn advance(&mut self) -> Option<usize> {
        if !self.state.is_cycling {
            return None;
        }
        let len = self.list.len();
        self.previous_index = Some(self.state.current_index);
        self.state.current_index = (self.state.current_index + 1) % len;
        self.advances += 1;
        Some(self.state.current_index)
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn list_identity(&self) -> ListIdentity {
        self.list.identity()
    }

    pub fn items(&self) -> &[RotationItem] {
        self.list.items()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Steps taken since the current list was loaded.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// `None` means render nothing: there are no items.
    pub fn frame(&self) -> Option<CarouselFrame<'_>> {
        let active = self.list.get(self.state.current_index)?;
        let len = self.list.len();
        let window = (0..self.state.visible_count)
            .filter_map(|offset| self.list.get((self.state.current_index + offset) % len))
            .collect();

        Some(CarouselFrame {
            active_index: self.state.current_index,
            active,
            outgoing: self.previous_index.and_then(|index| self.list.get(index)),
            window,
            fade: self.settings.fade,
            playback: VideoPlayback::for_item(active),
        })
    }
}
