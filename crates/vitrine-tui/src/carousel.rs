//! Carousel state machine for the detail overlay.
//!
//! One state: the current index into the image list. The controller only
//! exists while the overlay is open and only when there is something to
//! cycle through — with zero or one image there are no controls to drive.
//! Closing the overlay drops the controller, so no input routing can
//! outlive it.

use vitrine_core::CardImage;

/// Cyclic cursor over a product's images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<CardImage>,
    index: usize,
}

impl Carousel {
    /// Build a controller for the overlay, starting at index 0.
    /// Returns `None` when `images.len() <= 1` — controls stay hidden.
    pub fn open(images: Vec<CardImage>) -> Option<Self> {
        if images.len() <= 1 {
            return None;
        }
        Some(Self { images, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &CardImage {
        &self.images[self.index]
    }

    /// Step forward, wrapping at the end.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
    }

    /// Step backward, wrapping at the start.
    pub fn prev(&mut self) {
        self.index = (self.index + self.images.len() - 1) % self.images.len();
    }

    /// Jump to `i` if it names an image; out-of-range is a no-op.
    pub fn jump_to(&mut self, i: usize) {
        if i < self.images.len() {
            self.index = i;
        }
    }
}
