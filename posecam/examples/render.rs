use posecam::{
    image::{Rgba, RgbaImage},
    skeleton, Canvas, Keypoint, KeypointIndex, Person,
};

const WIDTH: u32 = 240;
const HEIGHT: u32 = 360;

// A standing figure with a raised right arm; the left ankle is occluded.
const FIGURE: [(f32, f32, f32); KeypointIndex::COUNT] = [
    (120., 60., 0.95),
    (128., 52., 0.9),
    (112., 52., 0.9),
    (138., 58., 0.7),
    (102., 58., 0.7),
    (150., 110., 0.9),
    (90., 110., 0.9),
    (162., 160., 0.85),
    (70., 70., 0.8),
    (168., 205., 0.8),
    (60., 25., 0.75),
    (140., 200., 0.9),
    (100., 200., 0.9),
    (145., 260., 0.8),
    (95., 260., 0.8),
    (148., 320., 0.3),
    (92., 320., 0.7),
];

fn main() -> anyhow::Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "skeleton.png".to_string());

    let keypoints = FIGURE
        .iter()
        .map(|&(x, y, score)| Keypoint::new(x, y, score))
        .collect::<Vec<_>>();
    let person = Person::try_from(keypoints)?;

    let background = RgbaImage::from_pixel(WIDTH, HEIGHT, Rgba([240, 240, 240, 255]));
    let mut canvas = RgbaImage::new(WIDTH, HEIGHT);
    canvas.clear();
    canvas.draw_frame(&background)?;
    skeleton::render(&person, &mut canvas);

    canvas.save(&path)?;
    println!("wrote {path}");
    Ok(())
}
