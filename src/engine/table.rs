//! Cards dealt for the current game, stored in grid order.

use rustc_hash::FxHashMap;

use crate::cards::Card;
use crate::core::config::GridSize;
use crate::core::entity::CardId;

/// The dealt cards with lookup by id and by grid cell.
#[derive(Clone, Debug, Default)]
pub struct Table {
    grid: GridSize,
    cards: Vec<Card>,
    slots: FxHashMap<CardId, usize>,
}

impl Table {
    /// Lay out `cards`, which must be in cell order.
    #[must_use]
    pub fn new(grid: GridSize, cards: Vec<Card>) -> Self {
        let slots = cards
            .iter()
            .enumerate()
            .map(|(index, card)| (card.id(), index))
            .collect();
        Self { grid, cards, slots }
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.slots.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.slots.get(&id).map(|&i| &self.cards[i])
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let index = *self.slots.get(&id)?;
        self.cards.get_mut(index)
    }

    /// Card at a cell index.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Card at a grid position.
    #[must_use]
    pub fn at_position(&self, col: usize, row: usize) -> Option<&Card> {
        if col >= self.grid.cols || row >= self.grid.rows {
            return None;
        }
        self.at(self.grid.index(col, row))
    }

    /// All cards in cell order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Disable input on every card.
    pub fn disable_input(&mut self) {
        for card in &mut self.cards {
            card.set_input_enabled(false);
        }
    }

    /// Remove and return every card, leaving the table empty.
    pub fn take_cards(&mut self) -> Vec<Card> {
        self.slots.clear();
        std::mem::take(&mut self.cards)
    }
}
