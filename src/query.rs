//! Neighbour queries.
//!
//! Neighbours are found in face-local coordinates: the candidate
//! `(x + x_off, y + y_off)` either stays inside the face or crosses into an
//! adjacent one, in which case the out-of-range component wraps and the face
//! table resolves the crossing direction. Crossing a polar corner
//! additionally swaps the coordinate axes, because the `(x, y)` frames of
//! the polar-row faces meet at right angles around the poles.

use crate::coord::{Coord, FacePixel};
use crate::error::Error;
use crate::face::Face;
use crate::{Resolution, Scheme};

/// The pixel adjacent to `coord` in the direction `(x_off, y_off)`, as an
/// index in the requested scheme.
///
/// Offsets follow the face-local axes: `x` grows north-east, `y` grows
/// north-west, so `(-1, -1)` is the southern neighbour and `(+1, +1)` the
/// northern one.
///
/// # Errors
/// [Error::NoSuchNeighbor] if the pixel touches a polar corner and the
/// requested diagonal crosses beyond the pole, where no adjacent pixel
/// exists.
///
/// ```rust
/// use hpxidx::{neighbor, Coord, NestPixel, Resolution, Scheme};
///
/// let hpx = Resolution::from_order(1).unwrap();
/// let corner = Coord::from(NestPixel::new(&hpx, 3).unwrap());
/// assert_eq!(0, neighbor(&hpx, Scheme::Nested, &corner, -1, -1).unwrap());
/// assert!(neighbor(&hpx, Scheme::Nested, &corner, 1, 1).is_err());
/// ```
pub fn neighbor(
  hpx: &Resolution,
  scheme: Scheme,
  coord: &Coord,
  x_off: i8,
  y_off: i8,
) -> Result<u64, Error> {
  let fp = coord.to_face_pixel(hpx);
  cross_face(hpx, &fp, x_off, y_off).map(|neighbor| neighbor.pixel_id(hpx, scheme))
}

/// All pixels adjacent to `coord`, as indices in the requested scheme.
///
/// Interior pixels yield exactly 8 neighbours in the fixed direction order
/// `(-1,-1), (0,-1), (+1,-1), (-1,0), (+1,0), (-1,+1), (0,+1), (+1,+1)`.
/// Pixels on a face boundary keep that order but skip the directions that
/// vanish at polar corners, so the sequence shrinks to 7 (or 6 for the
/// single pixel of an order-0 equatorial face).
pub fn neighbors(hpx: &Resolution, coord: &Coord, scheme: Scheme) -> Vec<u64> {
  let fp = coord.to_face_pixel(hpx);
  let max_xy = hpx.nside() - 1;
  if fp.x() > 0 && fp.x() < max_xy && fp.y() > 0 && fp.y() < max_xy {
    // Away from the face boundary every neighbour shares the face; at high
    // orders this is by far the most common case.
    let (x, y, face) = (fp.x(), fp.y(), fp.face());
    vec![
      FacePixel::new(x - 1, y - 1, face).pixel_id(hpx, scheme),
      FacePixel::new(x, y - 1, face).pixel_id(hpx, scheme),
      FacePixel::new(x + 1, y - 1, face).pixel_id(hpx, scheme),
      FacePixel::new(x - 1, y, face).pixel_id(hpx, scheme),
      FacePixel::new(x + 1, y, face).pixel_id(hpx, scheme),
      FacePixel::new(x - 1, y + 1, face).pixel_id(hpx, scheme),
      FacePixel::new(x, y + 1, face).pixel_id(hpx, scheme),
      FacePixel::new(x + 1, y + 1, face).pixel_id(hpx, scheme),
    ]
  } else {
    // On a boundary, enumerate the 3x3 box minus the center, dropping the
    // leading corner for the south vertex of faces 4-11 and the trailing
    // corner for the north vertex of faces 0-7; those diagonals cross
    // beyond a pole and have no pixel.
    let start = if fp.face() > 3 && fp.x() == 0 && fp.y() == 0 {
      1
    } else {
      0
    };
    let end = if fp.face() < 8 && fp.x() == max_xy && fp.y() == max_xy {
      8
    } else {
      9
    };
    let mut result = Vec::with_capacity(8);
    for i in start..end {
      let x_off = (i % 3) as i8 - 1;
      let y_off = (i / 3) as i8 - 1;
      if x_off == 0 && y_off == 0 {
        continue;
      }
      if let Ok(neighbor) = cross_face(hpx, &fp, x_off, y_off) {
        result.push(neighbor.pixel_id(hpx, scheme));
      }
    }
    result
  }
}

/// Shared core: offsets a face pixel, wrapping across the face boundary and
/// rotating the coordinate frame when the crossing passes a polar corner.
fn cross_face(
  hpx: &Resolution,
  fp: &FacePixel,
  x_off: i8,
  y_off: i8,
) -> Result<FacePixel, Error> {
  let nside = hpx.nside() as i64;
  let max_xy = nside - 1;
  let mut x = fp.x() as i64 + x_off as i64;
  let mut y = fp.y() as i64 + y_off as i64;
  let mut fx_dir = 0i8;
  let mut fy_dir = 0i8;

  if x < 0 {
    fx_dir = -1;
    x += nside;
  } else if x >= nside {
    fx_dir = 1;
    x -= nside;
  }
  if y < 0 {
    fy_dir = -1;
    y += nside;
  } else if y >= nside {
    fy_dir = 1;
    y -= nside;
  }

  // North-row faces meet at the north pole with their axes swapped, as do
  // south-row faces at the south pole.
  if fx_dir == 1 && fy_dir != -1 && fp.face() < 4 {
    x = y;
    y = max_xy;
  }
  if fy_dir == 1 && fx_dir != -1 && fp.face() < 4 {
    y = x;
    x = max_xy;
  }
  if fy_dir == -1 && fx_dir != 1 && fp.face() > 7 {
    y = x;
    x = 0;
  }
  if fx_dir == -1 && fy_dir != 1 && fp.face() > 7 {
    x = y;
    y = 0;
  }

  let face = Face::new(fp.face()).neighbor(fx_dir, fy_dir)?;
  Ok(FacePixel::new(x as u32, y as u32, face.id()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::coord::NestPixel;

  fn hpx(order: u8) -> Resolution {
    Resolution::from_order(order).unwrap()
  }

  fn nest_coord(hpx: &Resolution, index: u64) -> Coord {
    Coord::from(NestPixel::new(hpx, index).unwrap())
  }

  #[test]
  fn testok_neighbors_of_north_corner_pixel() {
    // Nest pixel 3 at order 1 sits on the north corner of face 0; its
    // northern diagonal crosses the pole onto face 3.
    let hpx = hpx(1);
    let result = neighbors(&hpx, &nest_coord(&hpx, 3), Scheme::Nested);
    assert_eq!(vec![0, 1, 6, 2, 7, 13, 15], result);
  }

  #[test]
  fn testok_neighbors_of_south_corner_pixel() {
    // Nest pixel 32 at order 1 sits on the south corner of face 8; its
    // southern diagonal crosses the pole onto face 9.
    let hpx = hpx(1);
    let result = neighbors(&hpx, &nest_coord(&hpx, 32), Scheme::Nested);
    assert_eq!(vec![36, 38, 44, 33, 45, 34, 35], result);
  }

  #[test]
  fn testok_neighbor_counts() {
    let hpx = hpx(2);
    let max_xy = hpx.nside() - 1;
    for index in 0..hpx.n_pixels() {
      let nest = NestPixel::new(&hpx, index).unwrap();
      let fp = nest.to_face_pixel(&hpx);
      let north_corner = fp.face() < 8 && fp.x() == max_xy && fp.y() == max_xy;
      let south_corner = fp.face() > 3 && fp.x() == 0 && fp.y() == 0;
      let expected = 8 - (north_corner as usize) - (south_corner as usize);
      let result = neighbors(&hpx, &Coord::from(nest), Scheme::Nested);
      assert_eq!(
        expected,
        result.len(),
        "nest: {}, face pixel: ({}, {}, {})",
        index,
        fp.x(),
        fp.y(),
        fp.face()
      );
    }
  }

  #[test]
  fn testok_order0_equatorial_face_has_6_neighbors() {
    // At order 0 the single pixel of an equatorial face is both corners at
    // once, so it loses both polar diagonals.
    let hpx = hpx(0);
    let result = neighbors(&hpx, &nest_coord(&hpx, 4), Scheme::Nested);
    assert_eq!(6, result.len());
    assert_eq!(vec![8, 5, 11, 0, 7, 3], result);
  }

  #[test]
  fn testok_interior_pixel_has_8_neighbors() {
    let hpx = hpx(2);
    // Face pixel (1, 1) on face 4: all neighbours stay on the face.
    let interior = Coord::from(FacePixel::new(1, 1, 4));
    let result = neighbors(&hpx, &interior, Scheme::Nested);
    let base = 4 * hpx.face_pixels();
    assert_eq!(
      vec![
        base,
        base + 1,
        base + 4,
        base + 2,
        base + 6,
        base + 8,
        base + 9,
        base + 12
      ],
      result
    );
  }

  #[test]
  fn testok_single_direction_agrees_with_enumeration() {
    let hpx = hpx(2);
    let directions: [(i8, i8); 8] = [
      (-1, -1),
      (0, -1),
      (1, -1),
      (-1, 0),
      (1, 0),
      (-1, 1),
      (0, 1),
      (1, 1),
    ];
    for index in 0..hpx.n_pixels() {
      let coord = nest_coord(&hpx, index);
      let enumerated = neighbors(&hpx, &coord, Scheme::Ring);
      let mut singles = Vec::with_capacity(8);
      for (x_off, y_off) in directions {
        if let Ok(id) = neighbor(&hpx, Scheme::Ring, &coord, x_off, y_off) {
          singles.push(id);
        }
      }
      assert_eq!(enumerated, singles, "nest: {}", index);
    }
  }

  #[test]
  fn testok_adjacency_is_symmetric() {
    for order in 0..=3u8 {
      let hpx = hpx(order);
      for index in 0..hpx.n_pixels() {
        for other in neighbors(&hpx, &nest_coord(&hpx, index), Scheme::Nested) {
          let back = neighbors(&hpx, &nest_coord(&hpx, other), Scheme::Nested);
          assert!(
            back.contains(&index),
            "order: {}, {} -> {} but not back",
            order,
            index,
            other
          );
        }
      }
    }
  }

  #[test]
  fn testok_schemes_are_consistent() {
    let hpx = hpx(2);
    for index in 0..hpx.n_pixels() {
      let coord = nest_coord(&hpx, index);
      let in_ring: Vec<u64> = neighbors(&hpx, &coord, Scheme::Ring);
      let in_nest: Vec<u64> = neighbors(&hpx, &coord, Scheme::Nested);
      let converted: Vec<u64> = in_nest
        .iter()
        .map(|&n| NestPixel::new(&hpx, n).unwrap().to_ring_pixel(&hpx).index())
        .collect();
      assert_eq!(in_ring, converted, "nest: {}", index);
    }
  }

  #[test]
  fn testerr_no_such_neighbor() {
    let hpx = hpx(1);
    // North corner of face 0, asking past the pole.
    assert_eq!(
      Err(Error::NoSuchNeighbor {
        face: 0,
        x_off: 1,
        y_off: 1
      }),
      neighbor(&hpx, Scheme::Nested, &nest_coord(&hpx, 3), 1, 1)
    );
    // South corner of face 8, asking past the pole.
    assert_eq!(
      Err(Error::NoSuchNeighbor {
        face: 8,
        x_off: -1,
        y_off: -1
      }),
      neighbor(&hpx, Scheme::Nested, &nest_coord(&hpx, 32), -1, -1)
    );
  }
}
