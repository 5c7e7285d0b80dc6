//! Card placement for the layout collaborator.

use serde::{Deserialize, Serialize};

use crate::core::config::GridSize;

/// Where each card sits, in unscaled grid-container units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub grid: GridSize,
    pub card_width: f32,
    pub card_height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
}

impl GridLayout {
    /// Default gap between cards.
    pub const DEFAULT_PADDING: f32 = 10.0;

    /// Layout with the default padding.
    #[must_use]
    pub fn new(grid: GridSize, card_width: f32, card_height: f32) -> Self {
        Self {
            grid,
            card_width,
            card_height,
            padding_x: Self::DEFAULT_PADDING,
            padding_y: Self::DEFAULT_PADDING,
        }
    }

    /// Override the padding.
    #[must_use]
    pub fn with_padding(mut self, x: f32, y: f32) -> Self {
        self.padding_x = x;
        self.padding_y = y;
        self
    }

    /// Centre of the card at a cell index, or `None` outside the grid.
    #[must_use]
    pub fn card_center(&self, index: usize) -> Option<(f32, f32)> {
        let (col, row) = self.grid.position(index)?;
        let x = self.padding_x + col as f32 * (self.card_width + self.padding_x);
        let y = self.padding_y + row as f32 * (self.card_height + self.padding_y);
        Some((x + self.card_width * 0.5, y + self.card_height * 0.5))
    }

    /// Width and height of the whole grid including outer padding.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        (
            self.padding_x + self.grid.cols as f32 * (self.card_width + self.padding_x),
            self.padding_y + self.grid.rows as f32 * (self.card_height + self.padding_y),
        )
    }
}
