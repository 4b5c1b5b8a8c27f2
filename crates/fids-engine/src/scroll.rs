/// Auto-scroll position of a list view, in abstract scroll units.
///
/// `content` and `viewport` are extents measured when the view is entered;
/// the renderer maps units back to table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    position: u32,
    content: u32,
    viewport: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    Advanced,
    /// Position is at `content - viewport`; nothing moved
    AtBottom,
}

impl ScrollState {
    /// Fresh state at the top of the content
    pub fn new(content: u32, viewport: u32) -> Self {
        Self {
            position: 0,
            content,
            viewport,
        }
    }

    pub fn overflows(&self) -> bool {
        self.content > self.viewport
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn max_position(&self) -> u32 {
        self.content.saturating_sub(self.viewport)
    }

    pub fn at_bottom(&self) -> bool {
        self.position >= self.max_position()
    }

    /// Move down by `step`, clamped to the bottom
    pub fn step(&mut self, step: u32) -> ScrollStep {
        if self.at_bottom() {
            return ScrollStep::AtBottom;
        }
        self.position = self.position.saturating_add(step.max(1)).min(self.max_position());
        ScrollStep::Advanced
    }
}
