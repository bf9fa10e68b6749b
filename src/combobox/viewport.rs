/// Scroll position of the rendered option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub scroll_offset: usize,
    pub visible_rows: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Viewport {
    pub fn new(visible_rows: usize) -> Self {
        Self {
            scroll_offset: 0,
            visible_rows,
        }
    }

    /// Scroll by the smallest amount that makes `index` visible.
    pub fn ensure_visible(&mut self, index: usize) {
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if self.visible_rows > 0 && index >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = index - self.visible_rows + 1;
        }
    }

    /// Range of rows currently on screen for a list of `total` rows.
    pub fn visible_range(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.scroll_offset.min(total);
        let end = (start + self.visible_rows).min(total);
        start..end
    }

    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }

    /// Update the row capacity, keeping the offset inside `total`.
    pub fn resize(&mut self, visible_rows: usize, total: usize) {
        self.visible_rows = visible_rows;
        let max_offset = total.saturating_sub(visible_rows);
        if self.scroll_offset > max_offset {
            self.scroll_offset = max_offset;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_row_does_not_scroll() {
        let mut vp = Viewport::new(5);
        vp.ensure_visible(4);
        assert_eq!(vp.scroll_offset, 0);
    }

    #[test]
    fn scrolls_down_to_nearest() {
        let mut vp = Viewport::new(5);
        vp.ensure_visible(7);
        assert_eq!(vp.scroll_offset, 3);
        assert_eq!(vp.visible_range(20), 3..8);
    }

    #[test]
    fn scrolls_up_to_nearest() {
        let mut vp = Viewport::new(5);
        vp.scroll_offset = 10;
        vp.ensure_visible(2);
        assert_eq!(vp.scroll_offset, 2);
    }

    #[test]
    fn range_is_clamped() {
        let vp = Viewport::new(5);
        assert_eq!(vp.visible_range(3), 0..3);
        assert_eq!(vp.visible_range(0), 0..0);
    }

    #[test]
    fn default_shows_eight_rows() {
        assert_eq!(Viewport::default(), Viewport::new(8));
        assert_eq!(Viewport::default().visible_range(20), 0..8);
    }

    #[test]
    fn resize_clamps_offset() {
        let mut vp = Viewport::new(2);
        vp.scroll_offset = 8;
        vp.resize(5, 10);
        assert_eq!(vp.scroll_offset, 5);
    }
}
