use super::{BlitCmd, BlitSink};

/// A single recorded blit plus its insertion index.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub order: u32,
    pub cmd: BlitCmd,
}

/// Recorded blit stream.
///
/// Insertion order is paint order (back-to-front): later items land on top.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity for reuse
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Iterates commands in paint order without cloning.
    pub fn commands(&self) -> impl Iterator<Item = &BlitCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, cmd: BlitCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { order, cmd });
    }
}

impl BlitSink for DrawList {
    #[inline]
    fn blit(&mut self, cmd: BlitCmd) {
        self.push(cmd);
    }
}
