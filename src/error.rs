use thiserror::Error;

/// Errors raised at the boundaries of the library.
///
/// Every fallible operation returns one of the kinds below; the library never
/// substitutes a silently wrong value for an invalid input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
  /// Order or nside outside the range supported on this machine.
  #[error("invalid resolution: {value} is not a valid order or nside on this machine")]
  InvalidResolution { value: u64 },
  /// Ring index outside `[0, n_rings)`.
  #[error("invalid ring index {index}: expected value in [0, {n_rings})")]
  InvalidRing { index: u32, n_rings: u32 },
  /// Asked for a base-cell neighbour in a direction that does not exist
  /// (beyond a pole).
  #[error("face {face} has no neighbour in direction ({x_off}, {y_off})")]
  NoSuchNeighbor { face: u8, x_off: i8, y_off: i8 },
  /// Projection-plane y coordinate outside the un-projectable band.
  #[error("projection y coordinate {y} out of domain: expected |y| < pi/2")]
  DomainError { y: f64 },
  /// Pixel index outside `[0, 12 * nside^2)` for the chosen resolution.
  #[error("pixel index {pixel} out of range: expected value in [0, {n_pixels})")]
  OutOfRange { pixel: u64, n_pixels: u64 },
}
