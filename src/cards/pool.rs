//! Card pooling.
//!
//! Cards are recycled between games instead of being rebuilt. The pool hands
//! out owned [`Card`]s and takes them back; it never refuses a request and
//! grows to the largest number of cards ever out at once.

use super::card::Card;
use super::face::FaceValue;
use crate::core::entity::CardId;

/// Free list of inactive cards.
///
/// ```
/// use memory_match::cards::{CardPool, FaceValue};
///
/// let mut pool = CardPool::with_capacity(2);
/// let card = pool.acquire(FaceValue::CAT);
/// assert!(card.is_active());
/// assert_eq!(pool.available(), 1);
///
/// pool.release(card);
/// assert_eq!(pool.available(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardPool {
    free: Vec<Card>,
    created: u32,
}

impl CardPool {
    /// Largest grid offered by the lobby (4 x 5).
    pub const DEFAULT_CAPACITY: usize = 20;

    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool pre-filled with `capacity` inactive cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Self {
            free: Vec::with_capacity(capacity),
            created: 0,
        };
        for _ in 0..capacity {
            let card = pool.create_card();
            pool.free.push(card);
        }
        pool
    }

    fn create_card(&mut self) -> Card {
        let card = Card::new(CardId::new(self.created));
        self.created += 1;
        card
    }

    /// Take a card from the pool, creating one if the pool is empty, and
    /// activate it with `face`.
    pub fn acquire(&mut self, face: FaceValue) -> Card {
        let mut card = match self.free.pop() {
            Some(card) => card,
            None => {
                log::debug!("card pool empty, growing to {}", self.created + 1);
                self.create_card()
            }
        };
        card.activate(face);
        card
    }

    /// Reset a card and return it to the pool.
    pub fn release(&mut self, mut card: Card) {
        card.reset();
        self.free.push(card);
    }

    /// Reset and return many cards.
    pub fn release_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.release(card);
        }
    }

    /// Number of cards ready to be handed out.
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Number of cards ever created by this pool (its high-water mark).
    #[must_use]
    pub fn created(&self) -> usize {
        self.created as usize
    }
}
