//! Draw a pitch with a short passing move on a 0..100 data grid and dump
//! the recorded commands.

use glam::dvec2;
use pitchgeo::{
    DefaultTheme, Figure, FigureItem, LineOptions, Pitch, PitchOptions, PointStyle, StrokeOptions,
    Theme,
};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let options = PitchOptions::new()
        .with_length_range(0.0, 100.0)
        .with_width_range(0.0, 100.0);
    let theme = DefaultTheme::dark();
    let mut pitch = Pitch::with_canvas(&options, Figure::new(), theme)?;

    let passer = dvec2(35.0, 40.0);
    let receiver = dvec2(62.0, 70.0);
    pitch.add_point(passer, PointStyle::default().with_number(8));
    pitch.add_point(
        receiver,
        PointStyle::default()
            .with_number(10)
            .with_color(theme.away_team()),
    );
    pitch.add_line(passer, receiver, LineOptions::default().with_width(4.0).gradient());
    pitch.add_annotation(receiver, dvec2(88.0, 52.0), StrokeOptions::default());

    let layout = pitch.layout(None, None);
    println!("figure {:.0} x {:.0} px", layout.width, layout.height);
    println!("pitch axes   x {:?} y {:?}", layout.pitch_x.as_tuple(), layout.pitch_y.as_tuple());
    println!("overlay axes x {:?} y {:?}", layout.overlay_x.as_tuple(), layout.overlay_y.as_tuple());

    for item in pitch.canvas().items() {
        match item {
            FigureItem::Shape(shape) => println!("shape {:?}", shape.region),
            FigureItem::Trace(trace) => println!("trace {} points, opacity {:.2}", trace.points.len(), trace.opacity),
            FigureItem::Annotation(arrow) => println!("arrow {} -> {}", arrow.start, arrow.end),
        }
    }
    Ok(())
}
