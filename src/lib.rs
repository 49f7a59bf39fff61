//! Implementation of the HEALPix pixel-indexing algebra.
//! See papers:
//! * Gorsky2005: "HEALPix: A Framework for High-Resolution Discretization and Fast Analysis of Data
//!               Distributed on the Sphere", Górski, K. M. et al., 2005; 2005ApJ...622..759G.
//! * Calabretta2007: "Mapping on the HEALPix grid", Calabretta, M. R. et Roukema, B. F., 2007; 2007MNRAS.381..865C
//!
//! The sphere is partitioned into `12 * nside^2` equal-area curvilinear
//! quadrilaterals. This crate describes a pixelization at a chosen
//! resolution ([Resolution]), converts losslessly between the equivalent
//! pixel identifiers (see the [coord] module) and answers neighbour queries
//! that respect the topology at base-cell boundaries and polar corners (see
//! the [query] module).

use std::f64::consts::PI;

pub mod coord;
pub mod error;
pub mod face;
pub mod query;
pub mod ring;
pub mod zorder;

pub use crate::coord::{
  Coord, FacePixel, NestPixel, ProjectionCoordinate, RingCoordinate, RingPixel, SphereCoordinate,
  UniquePixel,
};
pub use crate::error::Error;
pub use crate::face::Face;
pub use crate::query::{neighbor, neighbors};
pub use crate::ring::Ring;

/// Constant = 2 * pi.
///
/// ```rust
/// use hpxidx::TWICE_PI;
/// use std::f64::consts::PI;
/// assert_eq!(2f64 * PI, TWICE_PI);
/// ```
pub const TWICE_PI: f64 = 2.0 * PI;

/// Number of base cells (faces) the unit sphere is divided in.
pub const N_FACES: u8 = 12;

/// Number of bits needed to code a base-cell index.
const FACE_ID_BITS: u32 = u64::BITS - (N_FACES as u64).leading_zeros();

/// The largest order such that the total pixel count `12 * 4^order` fits a
/// signed 64-bit index, keeping one spare bit for the unique-pixel encoding.
/// Derived from the index width rather than written as a literal; evaluates
/// to 29 on a 64-bit pixel index.
///
/// ```rust
/// use hpxidx::MAX_ORDER;
/// assert_eq!(29, MAX_ORDER);
/// ```
pub const MAX_ORDER: u8 = ((i64::BITS - 2 - FACE_ID_BITS) / 2) as u8;

/// The largest possible nside, i.e. `2^MAX_ORDER`.
///
/// ```rust
/// use hpxidx::{MAX_NSIDE, MAX_ORDER};
/// assert_eq!(1u32 << MAX_ORDER, MAX_NSIDE);
/// ```
pub const MAX_NSIDE: u32 = 1 << MAX_ORDER;

/// Returns `true` if the given order is valid on this machine, i.e. if it is
/// &le; [MAX_ORDER].
#[inline]
pub const fn is_valid_order(order: u8) -> bool {
  order <= MAX_ORDER
}

/// Returns `true` if the given nside is valid, i.e. if it is a non-zero
/// power of two &le; [MAX_NSIDE].
///
/// ```rust
/// use hpxidx::is_valid_nside;
/// assert!(!is_valid_nside(0));
/// assert!(is_valid_nside(1));
/// assert!(is_valid_nside(32));
/// assert!(!is_valid_nside(31));
/// ```
#[inline]
pub const fn is_valid_nside(nside: u32) -> bool {
  nside > 0 && nside.is_power_of_two() && nside <= MAX_NSIDE
}

/// The two HEALPix pixel numbering schemes.
///
/// `Ring` starts pixel 0 at the north-pole ring and sweeps each iso-latitude
/// ring west to east before moving to the next ring southward. `Nested`
/// numbers pixels face by face, each face holding a Morton-ordered quadtree
/// grown from its southernmost vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
  Ring,
  Nested,
}

/// Description of a pixelization at one resolution.
///
/// A pixelization is uniquely identified by its *order* `k`; `nside = 2^k`
/// is the number of pixels along the side of each base cell. Every other
/// quantity is a pure function of the order, so the descriptor is a cheap
/// `Copy` value carrying no mutable state.
///
/// # Examples
/// ```rust
/// use hpxidx::Resolution;
///
/// let hpx = Resolution::from_order(2).unwrap();
/// assert_eq!(4, hpx.nside());
/// assert_eq!(192, hpx.n_pixels());
/// assert_eq!(15, hpx.n_rings());
/// assert_eq!(24, hpx.polar_region_pixels());
/// assert_eq!(7, hpx.equator_ring());
///
/// let same = Resolution::from_nside(4).unwrap();
/// assert_eq!(hpx, same);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
  order: u8,
  nside: u32,
}

impl Resolution {
  /// Builds the descriptor of the pixelization of the given order.
  ///
  /// # Errors
  /// [Error::InvalidResolution] if `order > MAX_ORDER`.
  pub fn from_order(order: u8) -> Result<Resolution, Error> {
    if !is_valid_order(order) {
      return Err(Error::InvalidResolution {
        value: order as u64,
      });
    }
    Ok(Resolution {
      order,
      nside: 1u32 << order,
    })
  }

  /// Builds the descriptor of the pixelization with the given number of
  /// pixels along each base-cell side. The order is recovered from the bit
  /// length of `nside`.
  ///
  /// # Errors
  /// [Error::InvalidResolution] if `nside` is zero, not a power of two, or
  /// larger than [MAX_NSIDE].
  pub fn from_nside(nside: u32) -> Result<Resolution, Error> {
    if !is_valid_nside(nside) {
      return Err(Error::InvalidResolution {
        value: nside as u64,
      });
    }
    Ok(Resolution {
      order: nside.trailing_zeros() as u8,
      nside,
    })
  }

  /// Same as [Resolution::from_order] without the range check; `order` must
  /// be &le; [MAX_ORDER].
  pub(crate) const fn from_order_unchecked(order: u8) -> Resolution {
    Resolution {
      order,
      nside: 1u32 << order,
    }
  }

  /// The order of the pixelization, i.e. `log2(nside)`.
  #[inline]
  pub const fn order(&self) -> u8 {
    self.order
  }

  /// The number of pixels along the side of each base cell.
  #[inline]
  pub const fn nside(&self) -> u32 {
    self.nside
  }

  /// The number of pixels in each base cell, i.e. `nside^2`.
  #[inline]
  pub const fn face_pixels(&self) -> u64 {
    1u64 << ((self.order as u32) << 1)
  }

  /// The total number of pixels on the sphere, i.e. `12 * nside^2`.
  #[inline]
  pub const fn n_pixels(&self) -> u64 {
    12u64 << ((self.order as u32) << 1)
  }

  /// The number of pixels in each (north or south) polar region, i.e.
  /// `2 * nside * (nside - 1)`.
  #[inline]
  pub const fn polar_region_pixels(&self) -> u64 {
    let n = self.nside as u64;
    2 * n * (n - 1)
  }

  /// The number of iso-latitude rings, i.e. `4 * nside - 1`.
  #[inline]
  pub const fn n_rings(&self) -> u32 {
    (self.nside << 2) - 1
  }

  /// The index of the ring sitting on the equator, i.e. `2 * nside - 1`.
  #[inline]
  pub const fn equator_ring(&self) -> u32 {
    (self.nside << 1) - 1
  }

  /// The area of one pixel, in steradians: `pi / (3 * nside^2)`.
  #[inline]
  pub fn pixel_area(&self) -> f64 {
    PI / (3 * self.face_pixels()) as f64
  }

  /// Approximate surface area of one pixel on a sphere of the given radius,
  /// in the square of the radius unit. The approximation improves as the
  /// pixel area shrinks (below 0.03 sr, i.e. order &ge; 6, it is excellent).
  #[inline]
  pub fn pixel_surface_area(&self, radius: f64) -> f64 {
    self.pixel_area() * radius * radius
  }

  /// The angular resolution, in radians: the square root of the pixel area.
  #[inline]
  pub fn angular_resolution(&self) -> f64 {
    self.pixel_area().sqrt()
  }
}
