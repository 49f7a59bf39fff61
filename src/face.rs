//! The 12 base cells (faces) of the pixelization and their adjacency.
//!
//! Faces are laid out in three rows of four: faces 0 to 3 cover the north
//! polar cap, 4 to 7 the equatorial belt, 8 to 11 the south polar cap.
//! Neighbouring faces are addressed by an `(x_off, y_off)` pair in
//! `{-1, 0, +1}^2` expressed in the face-local frame: `(-1, -1)` is the
//! directly southern face, `(+1, +1)` the directly northern one, `(+1, -1)`
//! and `(-1, +1)` the lateral ones, the remaining four the edge neighbours.
//!
//! Not every direction exists. North-row faces have no `(+1, +1)` neighbour
//! and south-row faces no `(-1, -1)` neighbour (both would lie beyond a
//! pole); equatorial faces have neither, since three faces meet at their
//! north and south vertices and no single face sits in those directions.

use crate::error::Error;
use crate::N_FACES;

/// Marks a direction with no neighbouring face.
const ABSENT: i8 = -1;

/// Face adjacency, one row per face, indexed by the packed direction
/// `(x_off + 1) | ((y_off + 1) << 2)`. Slots 3 and 7 are unused paddings of
/// the packing; the `(0, 0)` slot holds the face itself.
static NEIGHBORS: [[i8; 11]; 12] = [
  // North polar cap row
  [8, 5, 1, ABSENT, 4, 0, 1, ABSENT, 3, 3, ABSENT],
  [9, 6, 2, ABSENT, 5, 1, 2, ABSENT, 0, 0, ABSENT],
  [10, 7, 3, ABSENT, 6, 2, 3, ABSENT, 1, 1, ABSENT],
  [11, 8, 0, ABSENT, 7, 3, 0, ABSENT, 2, 2, ABSENT],
  // Equatorial row
  [ABSENT, 8, 5, ABSENT, 11, 4, 0, ABSENT, 7, 3, ABSENT],
  [ABSENT, 9, 6, ABSENT, 8, 5, 1, ABSENT, 4, 0, ABSENT],
  [ABSENT, 10, 7, ABSENT, 9, 6, 2, ABSENT, 5, 1, ABSENT],
  [ABSENT, 11, 4, ABSENT, 10, 7, 3, ABSENT, 6, 2, ABSENT],
  // South polar cap row
  [ABSENT, 9, 9, ABSENT, 11, 8, 5, ABSENT, 11, 4, 0],
  [ABSENT, 10, 10, ABSENT, 8, 9, 6, ABSENT, 8, 5, 1],
  [ABSENT, 11, 11, ABSENT, 9, 10, 7, ABSENT, 9, 6, 2],
  [ABSENT, 8, 8, ABSENT, 10, 11, 4, ABSENT, 10, 7, 3],
];

/// Packs a direction pair into the adjacency-table column index.
#[inline]
const fn pack_offsets(x_off: i8, y_off: i8) -> usize {
  (((x_off + 1) | ((y_off + 1) << 2)) as u8) as usize
}

/// One of the 12 base cells of the pixelization.
///
/// ```rust
/// use hpxidx::Face;
///
/// let face = Face::new(4);
/// assert_eq!(1, face.row());
/// assert_eq!((0, 3), face.southernmost_vertex());
/// assert_eq!(3, face.neighbor(0, 1).unwrap().id());
/// assert!(face.neighbor(1, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
  id: u8,
}

impl Face {
  /// Returns the face of the given index.
  ///
  /// # Panics
  /// If `id` is not in `[0, 12)`.
  #[inline]
  pub fn new(id: u8) -> Face {
    assert!(id < N_FACES, "Expected face id in [0, 12)");
    Face { id }
  }

  /// The index of the face, in `[0, 12)`.
  #[inline]
  pub const fn id(&self) -> u8 {
    self.id
  }

  /// The row of base cells the face belongs to: 0 for the north polar cap,
  /// 1 for the equatorial belt, 2 for the south polar cap.
  #[inline]
  pub const fn row(&self) -> u8 {
    self.id >> 2
  }

  /// The `(x, y)` coordinate of the southernmost vertex of the face in the
  /// face-division frame: `x` in `[0, 7]`, `y` in `[2, 4]`.
  #[inline]
  pub const fn southernmost_vertex(&self) -> (i64, i64) {
    let row = (self.id >> 2) as i64;
    let col = (self.id & 3) as i64;
    (2 * col - (row & 1) + 1, row + 2)
  }

  /// The neighbouring face in the given direction; `(0, 0)` returns the
  /// face itself.
  ///
  /// # Errors
  /// [Error::NoSuchNeighbor] if the direction is topologically absent at
  /// this face (beyond a pole, or the three-face vertices of the equatorial
  /// row).
  pub fn neighbor(&self, x_off: i8, y_off: i8) -> Result<Face, Error> {
    debug_assert!((-1..=1).contains(&x_off) && (-1..=1).contains(&y_off));
    match NEIGHBORS[self.id as usize][pack_offsets(x_off, y_off)] {
      ABSENT => Err(Error::NoSuchNeighbor {
        face: self.id,
        x_off,
        y_off,
      }),
      id => Ok(Face { id: id as u8 }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn testok_row_and_southernmost_vertex() {
    let cases: [(u8, u8, i64, i64); 12] = [
      (0, 0, 1, 2),
      (1, 0, 3, 2),
      (2, 0, 5, 2),
      (3, 0, 7, 2),
      (4, 1, 0, 3),
      (5, 1, 2, 3),
      (6, 1, 4, 3),
      (7, 1, 6, 3),
      (8, 2, 1, 4),
      (9, 2, 3, 4),
      (10, 2, 5, 4),
      (11, 2, 7, 4),
    ];
    for (id, row, south_x, south_y) in cases {
      let face = Face::new(id);
      assert_eq!(row, face.row(), "face: {}", id);
      assert_eq!((south_x, south_y), face.southernmost_vertex(), "face: {}", id);
    }
  }

  #[test]
  fn testok_neighbors() {
    let cases: [(u8, i8, i8, u8); 37] = [
      (0, -1, -1, 8),
      (0, -1, 0, 4),
      (0, -1, 1, 3),
      (0, 0, -1, 5),
      (0, 0, 1, 3),
      (0, 1, -1, 1),
      (0, 1, 0, 1),
      (1, -1, -1, 9),
      (1, -1, 0, 5),
      (1, -1, 1, 0),
      (1, 0, -1, 6),
      (1, 0, 1, 0),
      (1, 1, 0, 2),
      (1, 1, -1, 2),
      (4, -1, 0, 11),
      (4, -1, 1, 7),
      (4, 0, -1, 8),
      (4, 0, 1, 3),
      (4, 1, -1, 5),
      (4, 1, 0, 0),
      (7, -1, 0, 10),
      (7, -1, 1, 6),
      (7, 0, -1, 11),
      (7, 0, 1, 2),
      (7, 1, -1, 4),
      (7, 1, 0, 3),
      (8, -1, 0, 11),
      (8, -1, 1, 11),
      (8, 0, -1, 9),
      (8, 0, 1, 4),
      (8, 1, -1, 9),
      (8, 1, 0, 5),
      (8, 1, 1, 0),
      (11, -1, 0, 10),
      (11, -1, 1, 10),
      (11, 0, -1, 8),
      (11, 1, 1, 3),
    ];
    for (id, x_off, y_off, expected) in cases {
      let neighbor = Face::new(id).neighbor(x_off, y_off).unwrap();
      assert_eq!(
        expected,
        neighbor.id(),
        "face: {}, direction: ({}, {})",
        id,
        x_off,
        y_off
      );
    }
  }

  #[test]
  fn testok_neighbor_center_is_self() {
    for id in 0..N_FACES {
      assert_eq!(id, Face::new(id).neighbor(0, 0).unwrap().id());
    }
  }

  #[test]
  fn testerr_absent_directions() {
    // Beyond the north pole for the north row, beyond the south pole for the
    // south row; equatorial faces lack both polar diagonals.
    for id in 0..8 {
      assert_eq!(
        Err(Error::NoSuchNeighbor {
          face: id,
          x_off: 1,
          y_off: 1
        }),
        Face::new(id).neighbor(1, 1)
      );
    }
    for id in 4..N_FACES {
      assert_eq!(
        Err(Error::NoSuchNeighbor {
          face: id,
          x_off: -1,
          y_off: -1
        }),
        Face::new(id).neighbor(-1, -1)
      );
    }
  }

  #[test]
  #[should_panic]
  fn testpanic_face_id() {
    Face::new(12);
  }
}
