/// Fixed-size window over an immutable slice, driven by an explicit
/// offset counter. Slicing and advancing share the one `window_size`
/// field, so the step can never drift from the window.
#[derive(Debug, Clone)]
pub struct Pager {
    window_size: usize,
    offset: usize,
}

impl Pager {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            offset: 0,
        }
    }

    /// The current window, clipped to the slice bounds. Empty once the
    /// offset has run past the end.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = (self.offset + self.window_size).min(items.len());
        &items[start..end]
    }

    pub fn advance(&mut self) {
        self.offset += self.window_size;
    }
}
