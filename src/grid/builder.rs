//! Deck building.
//!
//! A deck is the shuffled sequence of face values for one game, consumed
//! positionally: cell `col + row * cols` gets `deck[col + row * cols]`.

use serde::{Deserialize, Serialize};

use crate::cards::FaceValue;
use crate::core::config::GridSize;
use crate::core::error::Result;
use crate::core::rng::GameRng;

/// Shuffled face values for every grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    grid: GridSize,
    set_size: usize,
    faces: Vec<FaceValue>,
}

impl Deck {
    /// Grid this deck was built for.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Copies of each face value in the deck.
    #[must_use]
    pub fn set_size(&self) -> usize {
        self.set_size
    }

    /// Number of distinct face values.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.faces.len() / self.set_size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face value for a cell index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<FaceValue> {
        self.faces.get(index).copied()
    }

    /// Face value for a grid position.
    #[must_use]
    pub fn face_at(&self, col: usize, row: usize) -> Option<FaceValue> {
        if col >= self.grid.cols || row >= self.grid.rows {
            return None;
        }
        self.get(self.grid.index(col, row))
    }

    /// All faces in cell order.
    #[must_use]
    pub fn faces(&self) -> &[FaceValue] {
        &self.faces
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a FaceValue;
    type IntoIter = std::slice::Iter<'a, FaceValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.faces.iter()
    }
}

/// Build a shuffled deck of pairs for `grid`.
///
/// Fails with `InvalidGridDimensions` if the area is odd, holds fewer than two
/// pairs, or needs more pairs than there are face values.
pub fn build(grid: GridSize, rng: &mut GameRng) -> Result<Deck> {
    build_sets(grid, 2, rng)
}

/// Build a shuffled deck where each face appears `set_size` times.
pub fn build_sets(grid: GridSize, set_size: usize, rng: &mut GameRng) -> Result<Deck> {
    grid.validate(set_size)?;

    let distinct = grid.area() / set_size;
    let mut faces: Vec<FaceValue> = FaceValue::all()
        .take(distinct)
        .flat_map(|face| std::iter::repeat(face).take(set_size))
        .collect();
    rng.shuffle(&mut faces);

    Ok(Deck {
        grid,
        set_size,
        faces,
    })
}
