use crate::{Error, Point, Result};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};

pub type Color = Rgba<u8>;

/// Geometric primitives the skeleton renderer draws with.
pub trait Surface {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);
    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color);
}

/// A surface that also shows video frames of type `F` underneath the overlay.
pub trait Canvas<F: ?Sized>: Surface {
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn draw_frame(&mut self, frame: &F) -> Result<()>;
}

impl Surface for RgbaImage {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let center = (center.x.round() as i32, center.y.round() as i32);
        draw_filled_circle_mut(self, center, radius.round() as i32, color);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f32, color: Color) {
        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let len = dx.hypot(dy);
        let (nx, ny) = if len > f32::EPSILON {
            (-dy / len, dx / len)
        } else {
            (0., 0.)
        };
        // one 1px segment per unit of width, spread along the normal
        let passes = width.round().max(1.) as i32;
        for pass in 0..passes {
            let offset = pass as f32 - (passes - 1) as f32 / 2.;
            let (ox, oy) = (nx * offset, ny * offset);
            draw_line_segment_mut(
                self,
                (from.x + ox, from.y + oy),
                (to.x + ox, to.y + oy),
                color,
            );
        }
    }
}

impl Canvas<RgbaImage> for RgbaImage {
    fn resize(&mut self, width: u32, height: u32) {
        if self.dimensions() != (width, height) {
            *self = RgbaImage::new(width, height);
        }
    }

    fn clear(&mut self) {
        self.pixels_mut().for_each(|px| *px = Rgba([0, 0, 0, 0]));
    }

    fn draw_frame(&mut self, frame: &RgbaImage) -> Result<()> {
        if frame.dimensions() != self.dimensions() {
            return Err(Error::Render(format!(
                "frame is {:?}, canvas is {:?}",
                frame.dimensions(),
                self.dimensions()
            )));
        }
        image::imageops::replace(self, frame, 0, 0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Rgba([255, 0, 0, 255]);
    const BLUE: Color = Rgba([0, 0, 255, 255]);

    #[test]
    fn circle_is_filled_around_center() {
        let mut img = RgbaImage::new(32, 32);
        img.fill_circle(Point { x: 10., y: 10. }, 5., RED);
        assert_eq!(img[(10, 10)], RED);
        assert_eq!(img[(14, 10)], RED);
        assert_eq!(img[(10, 17)], Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn line_has_width() {
        let mut img = RgbaImage::new(40, 40);
        img.stroke_line(Point { x: 2., y: 20. }, Point { x: 30., y: 20. }, 2., BLUE);
        let covered = (17..24).filter(|&y| img[(15, y)] == BLUE).count();
        assert!(covered >= 2, "covered {covered} rows");
        assert_eq!(img[(35, 20)], Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn degenerate_line_does_not_panic() {
        let mut img = RgbaImage::new(8, 8);
        let p = Point { x: 3., y: 3. };
        img.stroke_line(p, p, 2., BLUE);
        assert_eq!(img[(3, 3)], BLUE);
    }

    #[test]
    fn frame_is_copied_and_cleared() {
        let mut canvas = RgbaImage::new(1, 1);
        canvas.resize(4, 3);
        assert_eq!(canvas.dimensions(), (4, 3));

        let frame = RgbaImage::from_pixel(4, 3, Rgba([9, 9, 9, 255]));
        canvas.draw_frame(&frame).unwrap();
        assert_eq!(canvas, frame);

        canvas.clear();
        assert!(canvas.pixels().all(|px| px.0 == [0, 0, 0, 0]));

        let small = RgbaImage::new(2, 2);
        assert!(matches!(canvas.draw_frame(&small), Err(Error::Render(_))));
    }
}
