use rand::rngs::StdRng;
use rand::SeedableRng;
use segment_painter::image::{Pixel, RgbaImage};
use segment_painter::{SegmentationParams, Segmenter};

fn main() {
    // Demo stub: segments a synthetic two-tone buffer
    let w = 64usize;
    let h = 48usize;
    let mut img = RgbaImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let v = if x < w / 2 { 40 } else { 200 };
            img.set_pixel(x, y, Pixel::new(v, v, v, 255));
        }
    }

    let segmenter = Segmenter::new(SegmentationParams::default());
    let mut rng = StdRng::seed_from_u64(0);
    match segmenter.process(&img, &mut rng) {
        Ok(report) => println!("components={}", report.components),
        Err(err) => eprintln!("Error: {err}"),
    }
}
