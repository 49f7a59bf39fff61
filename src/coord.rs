//! Pixel identifiers and the conversions between them.
//!
//! A pixel (or a position) on the sphere can be expressed in six equivalent
//! representations:
//! * [RingPixel]: linear index in the RING scheme, sweeping the iso-latitude
//!   rings from the north pole southward;
//! * [NestPixel]: linear index in the NESTED scheme, face-blocked with a
//!   Morton-ordered interior;
//! * [FacePixel]: `(x, y)` offset from the southernmost vertex of a face,
//!   `x` growing north-east and `y` north-west;
//! * [RingCoordinate]: `(ring, pixel-in-ring)` pair;
//! * [ProjectionCoordinate]: position on the planar HEALPix projection;
//! * [SphereCoordinate]: latitude/colatitude/longitude on the unit sphere.
//!
//! Each representation converts to every other one; the discrete-to-discrete
//! conversions are exact bijections, and the continuous coordinate returned
//! for a pixel lies in the pixel's interior so the inverse recovers the same
//! index. The [Coord] sum type carries "a position in any representation"
//! for callers that do not care which one, e.g. the neighbour queries.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::error::Error;
use crate::face::Face;
use crate::ring::Ring;
use crate::zorder;
use crate::{Resolution, Scheme, TWICE_PI};

/// Pixel index in the RING numbering scheme, in `[0, 12 * nside^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RingPixel(u64);

impl RingPixel {
  /// Wraps a RING-scheme pixel index after checking it against the given
  /// resolution.
  ///
  /// # Errors
  /// [Error::OutOfRange] if `index >= 12 * nside^2`.
  pub fn new(hpx: &Resolution, index: u64) -> Result<RingPixel, Error> {
    if index >= hpx.n_pixels() {
      return Err(Error::OutOfRange {
        pixel: index,
        n_pixels: hpx.n_pixels(),
      });
    }
    Ok(RingPixel(index))
  }

  /// The raw index value.
  #[inline]
  pub const fn index(&self) -> u64 {
    self.0
  }

  /// Splits the linear RING index into its `(ring, pixel-in-ring)` pair.
  ///
  /// Three-zone case analysis: in the polar caps the ring is located by
  /// inverting the triangular cumulative count `2 r (r + 1)`; the equatorial
  /// belt is a plain division by the constant ring length; the south cap
  /// mirrors the north arithmetic counting backward from the last pixel.
  pub fn to_ring_coordinate(&self, hpx: &Resolution) -> RingCoordinate {
    let polar = hpx.polar_region_pixels();
    if self.0 < polar {
      let ph = (self.0 + 1) as f64 / 2.0;
      let ring = (ph - ph.floor().sqrt()).sqrt() as i64;
      let in_ring = self.0 as i64 - 2 * (ring + 1) * ring;
      RingCoordinate::new(ring as u32, in_ring as u64)
    } else if self.0 < hpx.n_pixels() - polar {
      let pe = self.0 - polar;
      let belt_pixels = (hpx.nside() as u64) << 2;
      RingCoordinate::new((pe / belt_pixels) as u32 + hpx.nside() - 1, pe % belt_pixels)
    } else {
      let np = hpx.n_pixels() - self.0 - 1;
      let ph = (np + 1) as f64 / 2.0;
      let north_ring = (ph - ph.floor().sqrt()).sqrt() as i64 + 1;
      let in_ring = 2 * (north_ring + 1) * north_ring - 1 - np as i64;
      RingCoordinate::new((hpx.n_rings() as i64 - north_ring) as u32, in_ring as u64)
    }
  }

  pub fn to_face_pixel(&self, hpx: &Resolution) -> FacePixel {
    self.to_ring_coordinate(hpx).to_face_pixel(hpx)
  }

  pub fn to_nest_pixel(&self, hpx: &Resolution) -> NestPixel {
    self
      .to_ring_coordinate(hpx)
      .to_face_pixel(hpx)
      .to_nest_pixel(hpx)
  }

  pub fn to_projection_coordinate(&self, hpx: &Resolution) -> ProjectionCoordinate {
    self
      .to_ring_coordinate(hpx)
      .to_face_pixel(hpx)
      .to_projection_coordinate(hpx)
  }

  pub fn to_sphere_coordinate(&self, hpx: &Resolution) -> SphereCoordinate {
    self.to_ring_coordinate(hpx).to_sphere_coordinate(hpx)
  }

  /// The index of this pixel in the requested numbering scheme.
  pub fn pixel_id(&self, hpx: &Resolution, scheme: Scheme) -> u64 {
    match scheme {
      Scheme::Ring => self.0,
      Scheme::Nested => self.to_nest_pixel(hpx).0,
    }
  }
}

/// Pixel index in the NESTED numbering scheme, in `[0, 12 * nside^2)`.
///
/// Face `f` occupies the block `[f * nside^2, (f + 1) * nside^2)`; inside a
/// face the local index is the Morton interleave of `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NestPixel(u64);

impl NestPixel {
  /// Wraps a NESTED-scheme pixel index after checking it against the given
  /// resolution.
  ///
  /// # Errors
  /// [Error::OutOfRange] if `index >= 12 * nside^2`.
  pub fn new(hpx: &Resolution, index: u64) -> Result<NestPixel, Error> {
    if index >= hpx.n_pixels() {
      return Err(Error::OutOfRange {
        pixel: index,
        n_pixels: hpx.n_pixels(),
      });
    }
    Ok(NestPixel(index))
  }

  /// The raw index value.
  #[inline]
  pub const fn index(&self) -> u64 {
    self.0
  }

  /// Splits the face-blocked index into its face and the de-interleaved
  /// `(x, y)` coordinate.
  pub fn to_face_pixel(&self, hpx: &Resolution) -> FacePixel {
    let face = (self.0 / hpx.face_pixels()) as u8;
    let in_face = self.0 % hpx.face_pixels();
    let (x, y) = zorder::deinterleave(in_face);
    FacePixel::new(x, y, face)
  }

  pub fn to_ring_coordinate(&self, hpx: &Resolution) -> RingCoordinate {
    self.to_face_pixel(hpx).to_ring_coordinate(hpx)
  }

  pub fn to_ring_pixel(&self, hpx: &Resolution) -> RingPixel {
    self
      .to_face_pixel(hpx)
      .to_ring_coordinate(hpx)
      .to_ring_pixel(hpx)
  }

  pub fn to_projection_coordinate(&self, hpx: &Resolution) -> ProjectionCoordinate {
    self.to_face_pixel(hpx).to_projection_coordinate(hpx)
  }

  pub fn to_sphere_coordinate(&self, hpx: &Resolution) -> SphereCoordinate {
    self
      .to_face_pixel(hpx)
      .to_ring_coordinate(hpx)
      .to_sphere_coordinate(hpx)
  }

  /// Encodes this pixel together with its order into a single integer, so
  /// that every `(order, pixel)` pair maps to a distinct value.
  ///
  /// ```rust
  /// use hpxidx::{NestPixel, Resolution};
  ///
  /// let hpx = Resolution::from_order(1).unwrap();
  /// let nest = NestPixel::new(&hpx, 0).unwrap();
  /// assert_eq!(16, nest.to_unique_pixel(&hpx).index());
  /// ```
  pub fn to_unique_pixel(&self, hpx: &Resolution) -> UniquePixel {
    UniquePixel((4u64 << ((hpx.order() as u32) << 1)) + self.0)
  }

  /// The index of this pixel in the requested numbering scheme.
  pub fn pixel_id(&self, hpx: &Resolution, scheme: Scheme) -> u64 {
    match scheme {
      Scheme::Nested => self.0,
      Scheme::Ring => self.to_ring_pixel(hpx).0,
    }
  }
}

/// A NESTED pixel index with the order multiplexed in: `(4 << 2 order) +
/// nest`. The ranges of successive orders are contiguous, so the order is
/// recovered from the position of the leading bit alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniquePixel(u64);

impl UniquePixel {
  /// Wraps a unique-pixel value.
  ///
  /// # Errors
  /// [Error::OutOfRange] if `index < 4` (no order reaches below the first
  /// encoded value), or [Error::InvalidResolution] if the decoded order
  /// exceeds the machine maximum.
  pub fn new(index: u64) -> Result<UniquePixel, Error> {
    if index < 4 {
      return Err(Error::OutOfRange {
        pixel: index,
        n_pixels: 4,
      });
    }
    let pixel = UniquePixel(index);
    Resolution::from_order(pixel.order())?;
    Ok(pixel)
  }

  /// The raw encoded value.
  #[inline]
  pub const fn index(&self) -> u64 {
    self.0
  }

  /// The order encoded in the value.
  #[inline]
  pub const fn order(&self) -> u8 {
    ((u64::BITS - 3 - self.0.leading_zeros()) >> 1) as u8
  }

  /// Strips the order marker, returning the resolution it designates and
  /// the plain NESTED index.
  pub fn to_nest_pixel(&self) -> (Resolution, NestPixel) {
    let order = self.order();
    let hpx = Resolution::from_order_unchecked(order);
    (hpx, NestPixel(self.0 - (4u64 << ((order as u32) << 1))))
  }
}

/// A pixel addressed by its base cell and the `(x, y)` offset from the
/// southernmost vertex of that cell, both in `[0, nside)`.
///
/// The value `(nside, nside, 0)` is reserved as the out-of-domain marker
/// returned by the projection-plane inversion for points outside the
/// projection area; see [FacePixel::is_out_of_domain].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FacePixel {
  x: u32,
  y: u32,
  face: u8,
}

impl FacePixel {
  #[inline]
  pub const fn new(x: u32, y: u32, face: u8) -> FacePixel {
    FacePixel { x, y, face }
  }

  /// Offset along the north-east axis from the southernmost vertex.
  #[inline]
  pub const fn x(&self) -> u32 {
    self.x
  }

  /// Offset along the north-west axis from the southernmost vertex.
  #[inline]
  pub const fn y(&self) -> u32 {
    self.y
  }

  /// The base cell holding the pixel.
  #[inline]
  pub const fn face(&self) -> u8 {
    self.face
  }

  /// `true` if this value is the reserved marker for a position outside the
  /// projection domain rather than an actual pixel.
  #[inline]
  pub fn is_out_of_domain(&self, hpx: &Resolution) -> bool {
    self.x >= hpx.nside() || self.y >= hpx.nside()
  }

  /// Interleaves `(x, y)` and prepends the face block.
  pub fn to_nest_pixel(&self, hpx: &Resolution) -> NestPixel {
    NestPixel(zorder::interleave(self.x, self.y) + self.face as u64 * hpx.face_pixels())
  }

  /// Converts to the `(ring, pixel-in-ring)` pair through the vertical and
  /// horizontal vertex sums `v = x + y`, `h = x - y` anchored at the face's
  /// southernmost vertex.
  pub fn to_ring_coordinate(&self, hpx: &Resolution) -> RingCoordinate {
    let v = (self.x + self.y) as i64;
    let h = self.x as i64 - self.y as i64;
    let (south_x, south_y) = Face::new(self.face).southernmost_vertex();
    let nside = hpx.nside() as i64;
    let ring_index = (south_y * nside - v - 2) as u32;
    let ring = Ring::new_unchecked(*hpx, ring_index);
    let s = if ring.is_offset() { 0 } else { 1 };
    let mut in_ring = (south_x * (ring.pixels() as i64 >> 2) + h + s) / 2;
    if in_ring < 0 {
      in_ring += ring.pixels() as i64 - 1;
    }
    RingCoordinate::new(ring_index, in_ring as u64)
  }

  pub fn to_ring_pixel(&self, hpx: &Resolution) -> RingPixel {
    self.to_ring_coordinate(hpx).to_ring_pixel(hpx)
  }

  /// Maps the pixel center onto the planar projection, `x` wrapped into
  /// `[0, 2 pi)`.
  pub fn to_projection_coordinate(&self, hpx: &Resolution) -> ProjectionCoordinate {
    let v = (self.x + self.y) as i64;
    let h = self.x as i64 - self.y as i64;
    let (south_x, south_y) = Face::new(self.face).southernmost_vertex();
    let nside = hpx.nside() as i64;
    let ring_index = south_y * nside - v - 2;
    let k = south_x * nside + h;
    let mut x = k as f64 / nside as f64 * FRAC_PI_4;
    if x < 0.0 {
      x += TWICE_PI;
    }
    let y = FRAC_PI_2 - (ring_index + 1) as f64 / nside as f64 * FRAC_PI_4;
    ProjectionCoordinate::new(x, y)
  }

  pub fn to_sphere_coordinate(&self, hpx: &Resolution) -> SphereCoordinate {
    self.to_ring_coordinate(hpx).to_sphere_coordinate(hpx)
  }

  /// The index of this pixel in the requested numbering scheme.
  pub fn pixel_id(&self, hpx: &Resolution, scheme: Scheme) -> u64 {
    match scheme {
      Scheme::Ring => self.to_ring_pixel(hpx).0,
      Scheme::Nested => self.to_nest_pixel(hpx).0,
    }
  }
}

/// A pixel addressed by its ring and its rank within the ring, counted from
/// the westernmost pixel of the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RingCoordinate {
  ring: u32,
  pixel_in_ring: u64,
}

impl RingCoordinate {
  #[inline]
  pub const fn new(ring: u32, pixel_in_ring: u64) -> RingCoordinate {
    RingCoordinate {
      ring,
      pixel_in_ring,
    }
  }

  /// The ring the pixel is located in.
  #[inline]
  pub const fn ring(&self) -> u32 {
    self.ring
  }

  /// The rank of the pixel within its ring, starting at 0.
  #[inline]
  pub const fn pixel_in_ring(&self) -> u64 {
    self.pixel_in_ring
  }

  pub fn to_ring_pixel(&self, hpx: &Resolution) -> RingPixel {
    let ring = Ring::new_unchecked(*hpx, self.ring);
    RingPixel(ring.first_index() + self.pixel_in_ring)
  }

  /// Locates the base cell holding the pixel, then solves the vertex-sum
  /// identities for `(x, y)`.
  ///
  /// In the polar caps the face is the rank divided by the cap-triangle
  /// width; in the equatorial belt the standard face finder compares the
  /// rank shifted by the ring parity against the face grid.
  pub fn to_face_pixel(&self, hpx: &Resolution) -> FacePixel {
    let ring = Ring::new_unchecked(*hpx, self.ring);
    let nside = hpx.nside() as i64;
    let j = self.pixel_in_ring as i64;
    let first = ring.first_index();
    let mut nr = ring.north_index() as i64 + 1;
    let face = if first < hpx.polar_region_pixels() {
      (j / nr) as u8
    } else if first < hpx.n_pixels() - hpx.polar_region_pixels() {
      nr = nside;
      let ire = (self.ring as i64 + 1) - nside + 1;
      let irm = 2 * nside + 2 - ire;
      let ifm = ((j + 1) - ire / 2 + nside - 1) >> hpx.order();
      let ifp = ((j + 1) - irm / 2 + nside - 1) >> hpx.order();
      if ifp == ifm {
        (ifp | 4) as u8
      } else if ifp < ifm {
        ifp as u8
      } else {
        (ifm + 8) as u8
      }
    } else {
      (8 + j / nr) as u8
    };
    let (south_x, south_y) = Face::new(face).southernmost_vertex();
    let shift = if ring.is_offset() { 0 } else { 1 };
    let irt = (self.ring as i64 + 1) - south_y * nside + 1;
    let mut ipt = 2 * (j + 1) - south_x * nr - shift - 1;
    if ipt >= 2 * nside {
      ipt -= 8 * nside;
    }
    let x = (ipt - irt) >> 1;
    let y = (-ipt - irt) >> 1;
    FacePixel::new(x as u32, y as u32, face)
  }

  pub fn to_nest_pixel(&self, hpx: &Resolution) -> NestPixel {
    self.to_face_pixel(hpx).to_nest_pixel(hpx)
  }

  pub fn to_projection_coordinate(&self, hpx: &Resolution) -> ProjectionCoordinate {
    self.to_face_pixel(hpx).to_projection_coordinate(hpx)
  }

  /// The position of the pixel center on the sphere: the latitude comes
  /// from the ring, the longitude from the rank and the ring phase.
  pub fn to_sphere_coordinate(&self, hpx: &Resolution) -> SphereCoordinate {
    let ring = Ring::new_unchecked(*hpx, self.ring);
    let longitude = if ring.north_index() < hpx.nside() {
      (PI / (2.0 * (ring.north_index() + 1) as f64)) * (self.pixel_in_ring as f64 + 0.5)
    } else {
      let shift = if ring.is_offset() { 1.0 } else { 0.0 };
      (PI / (2.0 * hpx.nside() as f64)) * (self.pixel_in_ring as f64 + shift / 2.0)
    };
    SphereCoordinate {
      latitude: ring.latitude(),
      colatitude: ring.colatitude(),
      longitude,
    }
  }

  /// The index of this pixel in the requested numbering scheme.
  pub fn pixel_id(&self, hpx: &Resolution, scheme: Scheme) -> u64 {
    match scheme {
      Scheme::Ring => self.to_ring_pixel(hpx).0,
      Scheme::Nested => self.to_nest_pixel(hpx).0,
    }
  }
}

/// A position on the planar HEALPix projection of the sphere, both
/// components in radians: `x` longitudinal in `[0, 2 pi)`, `y` latitudinal
/// in `(-pi / 2, pi / 2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionCoordinate {
  x: f64,
  y: f64,
}

impl ProjectionCoordinate {
  #[inline]
  pub const fn new(x: f64, y: f64) -> ProjectionCoordinate {
    ProjectionCoordinate { x, y }
  }

  /// The longitudinal component, correlated with the longitude.
  #[inline]
  pub const fn x(&self) -> f64 {
    self.x
  }

  /// The latitudinal component, correlated with the latitude.
  #[inline]
  pub const fn y(&self) -> f64 {
    self.y
  }

  /// Locates the pixel containing this position through the 45-degree
  /// rotated `(p, q)` frame in which the faces tile a regular grid.
  ///
  /// Positions outside the projection area return the reserved marker
  /// `FacePixel(nside, nside, 0)` (see [FacePixel::is_out_of_domain])
  /// instead of a silently clamped pixel.
  pub fn to_face_pixel(&self, hpx: &Resolution) -> FacePixel {
    let nside = hpx.nside();
    let t = 4.0 * self.x / PI - 4.0;
    let u = 4.0 * self.y / PI + 5.0;
    let pp = ((u + t) / 2.0).clamp(0.0, 5.0);
    let floored_pp = pp.floor();
    let qq = ((u - t) / 2.0).clamp(3.0 - floored_pp, 6.0 - floored_pp);
    let v = 5 - (pp as i64 + qq as i64);
    if v < 0 {
      return FacePixel::new(nside, nside, 0);
    }
    let h = pp as i64 - qq as i64 + 4;
    let face = (4 * v + (h >> 1) % 4) as u8;
    let x = (nside as f64 * pp.fract()) as u32;
    let y = (nside as f64 * qq.fract()) as u32;
    FacePixel::new(x, y, face)
  }

  pub fn to_ring_coordinate(&self, hpx: &Resolution) -> RingCoordinate {
    self.to_face_pixel(hpx).to_ring_coordinate(hpx)
  }

  pub fn to_ring_pixel(&self, hpx: &Resolution) -> RingPixel {
    self
      .to_face_pixel(hpx)
      .to_ring_coordinate(hpx)
      .to_ring_pixel(hpx)
  }

  pub fn to_nest_pixel(&self, hpx: &Resolution) -> NestPixel {
    self.to_face_pixel(hpx).to_nest_pixel(hpx)
  }

  /// Un-projects the position back onto the sphere: cylindrical-equal-area
  /// inverse in the equatorial band `|y| <= pi / 4`, Collignon-style
  /// inverse in the polar bands.
  ///
  /// # Errors
  /// [Error::DomainError] if `|y| >= pi / 2`.
  pub fn to_sphere_coordinate(&self) -> Result<SphereCoordinate, Error> {
    let abs_y = self.y.abs();
    if abs_y >= FRAC_PI_2 {
      return Err(Error::DomainError { y: self.y });
    }
    if abs_y <= FRAC_PI_4 {
      let z = (8.0 / (3.0 * PI)) * self.y;
      let colatitude = z.acos();
      Ok(SphereCoordinate {
        latitude: FRAC_PI_2 - colatitude,
        colatitude,
        longitude: self.x,
      })
    } else {
      let tt = self.x % FRAC_PI_2;
      let longitude = self.x - ((abs_y - FRAC_PI_4) / (abs_y - FRAC_PI_2)) * (tt - FRAC_PI_4);
      let zz = 2.0 - 4.0 * abs_y / PI;
      let z = (1.0 - zz * zz / 3.0) * (self.y / abs_y);
      let colatitude = z.acos();
      Ok(SphereCoordinate {
        latitude: FRAC_PI_2 - colatitude,
        colatitude,
        longitude,
      })
    }
  }

  /// The index of the pixel containing this position in the requested
  /// numbering scheme.
  pub fn pixel_id(&self, hpx: &Resolution, scheme: Scheme) -> u64 {
    match scheme {
      Scheme::Ring => self.to_ring_pixel(hpx).0,
      Scheme::Nested => self.to_nest_pixel(hpx).0,
    }
  }
}

/// A position on the unit sphere. Latitude is 0 at the equator and
/// `+-pi / 2` at the poles; the colatitude `pi / 2 - latitude` is kept
/// alongside it since most of the pixelization arithmetic prefers it;
/// longitude grows eastward in `[0, 2 pi)`. All components in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCoordinate {
  latitude: f64,
  colatitude: f64,
  longitude: f64,
}

impl SphereCoordinate {
  /// Builds the position from its latitude and longitude.
  #[inline]
  pub fn from_lat_lon(latitude: f64, longitude: f64) -> SphereCoordinate {
    SphereCoordinate {
      latitude,
      colatitude: FRAC_PI_2 - latitude,
      longitude,
    }
  }

  /// Builds the position from its colatitude and longitude.
  #[inline]
  pub fn from_colat_lon(colatitude: f64, longitude: f64) -> SphereCoordinate {
    SphereCoordinate {
      latitude: FRAC_PI_2 - colatitude,
      colatitude,
      longitude,
    }
  }

  #[inline]
  pub const fn latitude(&self) -> f64 {
    self.latitude
  }

  #[inline]
  pub const fn colatitude(&self) -> f64 {
    self.colatitude
  }

  #[inline]
  pub const fn longitude(&self) -> f64 {
    self.longitude
  }

  /// Projects the position onto the plane: cylindrical equal-area in the
  /// equatorial zone `|sin(lat)| <= 2 / 3`, Collignon-style otherwise.
  pub fn to_projection_coordinate(&self) -> ProjectionCoordinate {
    let z = self.colatitude.cos();
    if z.abs() <= 2.0 / 3.0 {
      ProjectionCoordinate::new(self.longitude, 3.0 * (PI / 8.0) * z)
    } else {
      let facet_x = self.longitude % FRAC_PI_2;
      let mut sigma = 2.0 - (3.0 * (1.0 - z.abs())).sqrt();
      if z < 0.0 {
        sigma = -sigma;
      }
      let y = FRAC_PI_4 * sigma;
      let x = self.longitude - (sigma.abs() - 1.0) * (facet_x - FRAC_PI_4);
      ProjectionCoordinate::new(x, y)
    }
  }

  pub fn to_face_pixel(&self, hpx: &Resolution) -> FacePixel {
    self.to_projection_coordinate().to_face_pixel(hpx)
  }

  pub fn to_ring_coordinate(&self, hpx: &Resolution) -> RingCoordinate {
    self
      .to_projection_coordinate()
      .to_face_pixel(hpx)
      .to_ring_coordinate(hpx)
  }

  pub fn to_ring_pixel(&self, hpx: &Resolution) -> RingPixel {
    self
      .to_projection_coordinate()
      .to_face_pixel(hpx)
      .to_ring_coordinate(hpx)
      .to_ring_pixel(hpx)
  }

  pub fn to_nest_pixel(&self, hpx: &Resolution) -> NestPixel {
    self
      .to_projection_coordinate()
      .to_face_pixel(hpx)
      .to_nest_pixel(hpx)
  }

  /// The index of the pixel containing this position in the requested
  /// numbering scheme.
  pub fn pixel_id(&self, hpx: &Resolution, scheme: Scheme) -> u64 {
    match scheme {
      Scheme::Ring => self.to_ring_pixel(hpx).0,
      Scheme::Nested => self.to_nest_pixel(hpx).0,
    }
  }
}

/// A position in any of the six representations.
///
/// Dispatch is by `match` on the variant; every conversion available on the
/// concrete types is available here, which lets heterogeneous positions flow
/// through APIs such as [crate::query::neighbor] unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coord {
  Ring(RingPixel),
  Nest(NestPixel),
  Face(FacePixel),
  RingCoord(RingCoordinate),
  Projection(ProjectionCoordinate),
  Sphere(SphereCoordinate),
}

impl Coord {
  pub fn to_face_pixel(&self, hpx: &Resolution) -> FacePixel {
    match self {
      Coord::Ring(p) => p.to_face_pixel(hpx),
      Coord::Nest(p) => p.to_face_pixel(hpx),
      Coord::Face(p) => *p,
      Coord::RingCoord(p) => p.to_face_pixel(hpx),
      Coord::Projection(p) => p.to_face_pixel(hpx),
      Coord::Sphere(p) => p.to_face_pixel(hpx),
    }
  }

  pub fn to_ring_pixel(&self, hpx: &Resolution) -> RingPixel {
    match self {
      Coord::Ring(p) => *p,
      Coord::Nest(p) => p.to_ring_pixel(hpx),
      Coord::Face(p) => p.to_ring_pixel(hpx),
      Coord::RingCoord(p) => p.to_ring_pixel(hpx),
      Coord::Projection(p) => p.to_ring_pixel(hpx),
      Coord::Sphere(p) => p.to_ring_pixel(hpx),
    }
  }

  pub fn to_nest_pixel(&self, hpx: &Resolution) -> NestPixel {
    match self {
      Coord::Ring(p) => p.to_nest_pixel(hpx),
      Coord::Nest(p) => *p,
      Coord::Face(p) => p.to_nest_pixel(hpx),
      Coord::RingCoord(p) => p.to_nest_pixel(hpx),
      Coord::Projection(p) => p.to_nest_pixel(hpx),
      Coord::Sphere(p) => p.to_nest_pixel(hpx),
    }
  }

  pub fn to_ring_coordinate(&self, hpx: &Resolution) -> RingCoordinate {
    match self {
      Coord::Ring(p) => p.to_ring_coordinate(hpx),
      Coord::Nest(p) => p.to_ring_coordinate(hpx),
      Coord::Face(p) => p.to_ring_coordinate(hpx),
      Coord::RingCoord(p) => *p,
      Coord::Projection(p) => p.to_ring_coordinate(hpx),
      Coord::Sphere(p) => p.to_ring_coordinate(hpx),
    }
  }

  pub fn to_projection_coordinate(&self, hpx: &Resolution) -> ProjectionCoordinate {
    match self {
      Coord::Ring(p) => p.to_projection_coordinate(hpx),
      Coord::Nest(p) => p.to_projection_coordinate(hpx),
      Coord::Face(p) => p.to_projection_coordinate(hpx),
      Coord::RingCoord(p) => p.to_projection_coordinate(hpx),
      Coord::Projection(p) => *p,
      Coord::Sphere(p) => p.to_projection_coordinate(),
    }
  }

  /// # Errors
  /// [Error::DomainError] for a projection-plane position with
  /// `|y| >= pi / 2`.
  pub fn to_sphere_coordinate(&self, hpx: &Resolution) -> Result<SphereCoordinate, Error> {
    match self {
      Coord::Ring(p) => Ok(p.to_sphere_coordinate(hpx)),
      Coord::Nest(p) => Ok(p.to_sphere_coordinate(hpx)),
      Coord::Face(p) => Ok(p.to_sphere_coordinate(hpx)),
      Coord::RingCoord(p) => Ok(p.to_sphere_coordinate(hpx)),
      Coord::Projection(p) => p.to_sphere_coordinate(),
      Coord::Sphere(p) => Ok(*p),
    }
  }

  /// The index of the designated pixel in the requested numbering scheme.
  pub fn pixel_id(&self, hpx: &Resolution, scheme: Scheme) -> u64 {
    match self {
      Coord::Ring(p) => p.pixel_id(hpx, scheme),
      Coord::Nest(p) => p.pixel_id(hpx, scheme),
      Coord::Face(p) => p.pixel_id(hpx, scheme),
      Coord::RingCoord(p) => p.pixel_id(hpx, scheme),
      Coord::Projection(p) => p.pixel_id(hpx, scheme),
      Coord::Sphere(p) => p.pixel_id(hpx, scheme),
    }
  }
}

impl From<RingPixel> for Coord {
  fn from(p: RingPixel) -> Coord {
    Coord::Ring(p)
  }
}
impl From<NestPixel> for Coord {
  fn from(p: NestPixel) -> Coord {
    Coord::Nest(p)
  }
}
impl From<FacePixel> for Coord {
  fn from(p: FacePixel) -> Coord {
    Coord::Face(p)
  }
}
impl From<RingCoordinate> for Coord {
  fn from(p: RingCoordinate) -> Coord {
    Coord::RingCoord(p)
  }
}
impl From<ProjectionCoordinate> for Coord {
  fn from(p: ProjectionCoordinate) -> Coord {
    Coord::Projection(p)
  }
}
impl From<SphereCoordinate> for Coord {
  fn from(p: SphereCoordinate) -> Coord {
    Coord::Sphere(p)
  }
}
