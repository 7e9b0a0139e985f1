/// Lines kept between the cursor and the top/bottom edge when scrolling
pub const SCROLL_MARGIN: usize = 5;

/// Columns kept left of a revealed target when scrolling horizontally
const LEFT_MARGIN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub max_offset: usize,
    pub viewport_height: usize,
    pub h_offset: usize,
    pub max_h_offset: usize,
    pub viewport_width: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        self.max_offset = content_lines.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
    }

    pub fn update_h_bounds(&mut self, max_line_width: usize, viewport_width: usize) {
        self.viewport_width = viewport_width;
        self.max_h_offset = max_line_width.saturating_sub(viewport_width);
        self.h_offset = self.h_offset.min(self.max_h_offset);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset);
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn half_page(&self) -> usize {
        (self.viewport_height / 2).max(1)
    }

    pub fn half_width(&self) -> usize {
        (self.viewport_width / 2).max(1)
    }

    pub fn scroll_right(&mut self, cols: usize) {
        self.h_offset = self.h_offset.saturating_add(cols).min(self.max_h_offset);
    }

    pub fn scroll_left(&mut self, cols: usize) {
        self.h_offset = self.h_offset.saturating_sub(cols);
    }

    pub fn jump_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.offset = self.max_offset;
    }

    /// Scroll vertically so `line` sits outside the scroll margin.
    /// Before the first render (no viewport yet) the line becomes the top line.
    pub fn ensure_line_visible(&mut self, line: usize) {
        if self.viewport_height == 0 {
            self.offset = line;
            return;
        }

        let margin = SCROLL_MARGIN.min(self.viewport_height / 2);
        let visible_start = self.offset;
        let visible_end = self.offset.saturating_add(self.viewport_height);

        if line < visible_start.saturating_add(margin) {
            self.offset = line.saturating_sub(margin);
        } else if line >= visible_end.saturating_sub(margin) {
            let new_offset = line
                .saturating_add(margin)
                .saturating_add(1)
                .saturating_sub(self.viewport_height);
            self.offset = new_offset.min(self.max_offset);
        }
    }

    /// Scroll horizontally so columns `[column, column + len)` are on screen
    pub fn ensure_columns_visible(&mut self, column: usize, len: usize) {
        if self.viewport_width == 0 {
            return;
        }

        let end = column.saturating_add(len);
        let visible_end = self.h_offset.saturating_add(self.viewport_width);

        if column < self.h_offset || end > visible_end {
            self.h_offset = column.saturating_sub(LEFT_MARGIN).min(self.max_h_offset);
        }
    }

    /// Bring a range starting at (`line`, `column`) into view
    pub fn reveal(&mut self, line: usize, column: usize, len: usize) {
        self.ensure_line_visible(line);
        self.ensure_columns_visible(column, len);
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
