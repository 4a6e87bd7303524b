//! Print every region of a pitch.
//!
//! ```text
//! cargo run --example regions --features tracing -- vertical left
//! ```

use pitchgeo::{HalfSelection, Orientation, Outline, PitchConfig, PitchGeometry};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let orientation: Orientation = args.next().as_deref().unwrap_or("horizontal").parse()?;
    let half: HalfSelection = args.next().as_deref().unwrap_or("both").parse()?;

    let config = PitchConfig::new()
        .with_orientation(orientation)
        .with_half(half);
    let pitch = PitchGeometry::new(&config)?;

    for (name, region) in pitch.regions() {
        let area = region.area();
        println!(
            "{:<22} {:?} ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            name.as_str(),
            region.primitive(),
            area.x0,
            area.y0,
            area.x1,
            area.y1
        );
    }
    Ok(())
}
