use clap::Parser;
use log::debug;

use hpxidx::{Error, Resolution, MAX_NSIDE, MAX_ORDER};

/// Print the derived quantities of a HEALPix pixelization.
///
/// Without arguments, prints the limits supported on this machine.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
  /// Resolution order, i.e. log2(nside)
  #[arg(long, conflicts_with = "nside")]
  order: Option<u8>,
  /// Number of pixels along a base-cell side (a power of two)
  #[arg(long)]
  nside: Option<u32>,
}

const EARTH_RADIUS_M: f64 = 6_371_000.0;

fn main() -> Result<(), Error> {
  env_logger::init();
  let args = Args::parse();
  let hpx = match (args.order, args.nside) {
    (None, None) => {
      println!("Machine limits:");
      println!("  max order: {}", MAX_ORDER);
      println!("  max nside: {}", MAX_NSIDE);
      return Ok(());
    }
    (Some(order), _) => Resolution::from_order(order)?,
    (None, Some(nside)) => Resolution::from_nside(nside)?,
  };
  debug!(
    "descriptor built: order={}, nside={}",
    hpx.order(),
    hpx.nside()
  );
  println!("order:               {}", hpx.order());
  println!("nside:               {}", hpx.nside());
  println!("face pixels:         {}", hpx.face_pixels());
  println!("total pixels:        {}", hpx.n_pixels());
  println!("polar region pixels: {}", hpx.polar_region_pixels());
  println!("rings:               {}", hpx.n_rings());
  println!("equator ring:        {}", hpx.equator_ring());
  println!("pixel area:          {:.18} sr", hpx.pixel_area());
  println!("angular resolution:  {:.18} rad", hpx.angular_resolution());
  println!(
    "pixel area (Earth):  {:.3} m^2",
    hpx.pixel_surface_area(EARTH_RADIUS_M)
  );
  Ok(())
}
