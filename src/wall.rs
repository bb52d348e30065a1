use crate::ball::Ball;

/// The drawable area the ball bounces inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Walls {
    pub width: i32,
    pub height: i32,
}

impl Walls {
    pub fn new(width: i32, height: i32) -> Walls {
        Walls { width, height }
    }

    /// Negates each velocity component whose axis touches or crosses a wall.
    /// Overshoot is not corrected; the ball heads back in on the next frame.
    pub fn reflect(&self, ball: &mut Ball) {
        if touches(ball.position.x, ball.radius, self.width) {
            ball.velocity.x = -ball.velocity.x;
        }
        if touches(ball.position.y, ball.radius, self.height) {
            ball.velocity.y = -ball.velocity.y;
        }
    }
}

fn touches(center: i32, radius: i32, extent: i32) -> bool {
    center - radius <= 0 || center + radius >= extent
}
