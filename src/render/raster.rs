use nalgebra::Vector2;
use sdl2::{pixels::Color, render::Canvas, video::Window};

/// Anything that can plot single pixels in a current draw color.
pub trait PointSink {
    fn set_color(&mut self, color: Color);
    fn plot(&mut self, x: i32, y: i32) -> Result<(), String>;
}

impl PointSink for Canvas<Window> {
    fn set_color(&mut self, color: Color) {
        self.set_draw_color(color);
    }

    fn plot(&mut self, x: i32, y: i32) -> Result<(), String> {
        self.draw_point((x, y))
    }
}

/// A filled circle waiting to be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub center: Vector2<i32>,
    pub radius: i32,
    pub color: Color,
}

/// Plots every pixel of the 2r-wide box around the center that lies within radius.
/// Nothing is drawn for a non-positive radius.
pub fn fill_circle<S: PointSink + ?Sized>(
    sink: &mut S,
    center_x: i32,
    center_y: i32,
    radius: i32,
) -> Result<(), String> {
    let r2 = radius * radius;
    for dy in (1 - radius)..=radius {
        for dx in (1 - radius)..=radius {
            if dx * dx + dy * dy <= r2 {
                sink.plot(center_x + dx, center_y + dy)?;
            }
        }
    }
    Ok(())
}

pub fn fill_disc<S: PointSink + ?Sized>(sink: &mut S, disc: &Disc) -> Result<(), String> {
    sink.set_color(disc.color);
    fill_circle(sink, disc.center.x, disc.center.y, disc.radius)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    pub struct RecordingSink {
        pub color: Option<Color>,
        pub points: Vec<(i32, i32, Color)>,
    }

    impl PointSink for RecordingSink {
        fn set_color(&mut self, color: Color) {
            self.color = Some(color);
        }

        fn plot(&mut self, x: i32, y: i32) -> Result<(), String> {
            let color = self.color.ok_or("no draw color")?;
            self.points.push((x, y, color));
            Ok(())
        }
    }

    fn touched(cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32)> {
        let mut sink = RecordingSink::default();
        sink.set_color(Color::WHITE);
        fill_circle(&mut sink, cx, cy, radius).unwrap();
        sink.points.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    #[test]
    fn touches_exactly_the_pixels_within_radius() {
        for &radius in &[1, 2, 3, 7, 20] {
            let (cx, cy) = (50, 40);
            let points = touched(cx, cy, radius);
            let set: HashSet<_> = points.iter().cloned().collect();
            assert_eq!(set.len(), points.len(), "duplicate plots at r={}", radius);

            let mut expected = HashSet::new();
            for y in (cy + 1 - radius)..=(cy + radius) {
                for x in (cx + 1 - radius)..=(cx + radius) {
                    if (x - cx).pow(2) + (y - cy).pow(2) <= radius * radius {
                        expected.insert((x, y));
                    }
                }
            }
            assert_eq!(set, expected, "r={}", radius);
        }
    }

    #[test]
    fn unit_radius() {
        let set: HashSet<_> = touched(0, 0, 1).into_iter().collect();
        let expected: HashSet<_> = vec![(0, 0), (1, 0), (0, 1)].into_iter().collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn non_positive_radius_draws_nothing() {
        assert!(touched(10, 10, 0).is_empty());
        assert!(touched(10, 10, -4).is_empty());
    }

    #[test]
    fn disc_uses_its_color() {
        let mut sink = RecordingSink::default();
        let color = Color::RGBA(1, 2, 3, 4);
        fill_disc(
            &mut sink,
            &Disc {
                center: Vector2::new(5, 5),
                radius: 3,
                color,
            },
        )
        .unwrap();
        assert!(!sink.points.is_empty());
        assert!(sink.points.iter().all(|&(_, _, c)| c == color));
    }

    #[test]
    fn plot_errors_propagate() {
        let mut sink = RecordingSink::default();
        assert!(fill_circle(&mut sink, 0, 0, 2).is_err());
    }
}
