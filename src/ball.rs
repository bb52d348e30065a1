use nalgebra::Vector2;

use crate::wall::Walls;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: Vector2<i32>,
    pub velocity: Vector2<i32>,
    pub radius: i32,
}

impl Ball {
    /// Moves one frame, then reflects off any wall the ball now touches.
    pub fn advance(&mut self, walls: &Walls) {
        self.position += self.velocity;
        walls.reflect(self);
    }
}
