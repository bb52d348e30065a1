use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::{color::hsv_to_rgb, color::to_channel, render::raster::Disc};

pub const TRAIL_LENGTH: usize = 30;

/// Recent ball positions, newest first, never longer than its capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    points: VecDeque<Vector2<i32>>,
    capacity: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Trail::new(TRAIL_LENGTH)
    }
}

impl Trail {
    pub fn new(capacity: usize) -> Trail {
        Trail {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vector2<i32>) {
        self.points.push_front(point);
        self.drop_excess();
    }

    fn drop_excess(&mut self) {
        while self.points.len() > self.capacity {
            self.points.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn newest(&self) -> Option<&Vector2<i32>> {
        self.points.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2<i32>> {
        self.points.iter()
    }

    /// Newest to oldest: each disc shrinks and fades linearly with age while the
    /// hue sweeps a full rainbow over the trail's capacity.
    pub fn discs(&self, ball_radius: i32, hue_offset: f32) -> impl Iterator<Item = Disc> + '_ {
        let n = self.capacity as f32;
        self.points.iter().enumerate().map(move |(i, point)| {
            let factor = 1. - i as f32 / n;
            let radius = ((ball_radius as f32 * factor).round() as i32).max(1);
            let hue = (i as f32 * (360. / n) + hue_offset) % 360.;
            let mut color = hsv_to_rgb(hue, 1., 1.);
            color.a = to_channel(factor);
            Disc {
                center: *point,
                radius,
                color,
            }
        })
    }
}
