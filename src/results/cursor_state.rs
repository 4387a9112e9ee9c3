/// Cursor over the result list, wrapping at both ends
#[derive(Debug, Default)]
pub struct CursorState {
    pub index: usize,
    /// First visible row, kept in step with the cursor during render
    pub offset: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    pub fn move_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    pub fn set(&mut self, index: usize) {
        self.index = index;
    }

    /// Pull the cursor back into bounds after the result list is replaced
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            self.offset = 0;
        } else if self.index >= len {
            self.index = len - 1;
        }
    }

    /// Adjust the scroll offset so the cursor row is inside the viewport
    pub fn scroll_into_view(&mut self, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }
        if self.index < self.offset {
            self.offset = self.index;
        } else if self.index >= self.offset + viewport_height {
            self.offset = self.index + 1 - viewport_height;
        }
    }
}
