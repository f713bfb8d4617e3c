use std::fs;

use aerogeo::ids::SequentialIds;
use aerogeo::plot::{PlotOptions, render_planform};
use aerogeo::surface::{Surface, SurfaceParams, SurfaceRole};

#[test]
fn planform_plot_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png_path = dir.path().join("plots/vert0.png");
    let surface = Surface::new(
        SurfaceParams {
            role: SurfaceRole::VerticalStabilizer,
            span_m: 1.2,
            root_chord_m: 0.4,
            ..SurfaceParams::default()
        },
        &SequentialIds::new(),
    )
    .expect("fin");

    render_planform(
        &surface,
        &png_path,
        &PlotOptions {
            width: 400,
            height: 300,
            samples: 50,
        },
    )
    .expect("plot renders");

    let metadata = fs::metadata(&png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}
