/// Width thresholds (in CSS pixels) separating the three layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub medium: u32,
    pub wide: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: 640,
            wide: 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Medium,
    Wide,
}

impl Breakpoints {
    pub fn classify(&self, width: u32) -> ViewportClass {
        if width >= self.wide {
            ViewportClass::Wide
        } else if width >= self.medium {
            ViewportClass::Medium
        } else {
            ViewportClass::Narrow
        }
    }

    /// Slides shown side by side, never more than there are items.
    pub fn visible_count(&self, width: u32, max_visible: usize, item_count: usize) -> usize {
        let wanted = match self.classify(width) {
            ViewportClass::Narrow => 1,
            ViewportClass::Medium => 2,
            ViewportClass::Wide => max_visible.max(1),
        };
        wanted.min(item_count)
    }
}
