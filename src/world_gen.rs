use legion::{Entity, World};
use nalgebra::Vector2;

use crate::{ball::Ball, trail::Trail};

pub const BALL_START: (i32, i32) = (100, 100);
pub const BALL_VELOCITY: (i32, i32) = (5, 5);
pub const BALL_RADIUS: i32 = 20;

pub fn init_world(world: &mut World) -> Entity {
    init_ball(world)
}

fn init_ball(world: &mut World) -> Entity {
    let ball = Ball {
        position: Vector2::new(BALL_START.0, BALL_START.1),
        velocity: Vector2::new(BALL_VELOCITY.0, BALL_VELOCITY.1),
        radius: BALL_RADIUS,
    };
    world.push((ball, Trail::default()))
}
