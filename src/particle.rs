use nalgebra::Vector2;
use rand::Rng;

use crate::{color::hsv_to_rgb, color::to_channel, render::raster::Disc};

pub const PARTICLES_PER_FRAME: usize = 30;
pub const PARTICLE_RADIUS: i32 = 3;
const PARTICLE_SPEED: f32 = 4.;
const MIN_LIFE: i32 = 30;
const MAX_LIFE: i32 = 50;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub life: i32,
    pub max_life: i32,
    pub base_hue: f32,
}

impl Particle {
    /// A particle scattered around `center`, no further than `radius` on either axis.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, center: Vector2<i32>, radius: i32) -> Particle {
        let spread = radius.max(1);
        let dx = rng.gen_range(0..spread) - spread / 2;
        let dy = rng.gen_range(0..spread) - spread / 2;
        let life = rng.gen_range(MIN_LIFE..MAX_LIFE);
        Particle {
            position: Vector2::new((center.x + dx) as f32, (center.y + dy) as f32),
            velocity: Vector2::new(
                rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
                rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
            ),
            life,
            max_life: life,
            base_hue: rng.gen_range(0.0..360.),
        }
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.life -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn disc(&self, hue_offset: f32) -> Disc {
        let mut color = hsv_to_rgb((self.base_hue + hue_offset) % 360., 1., 1.);
        color.a = to_channel(self.life as f32 / self.max_life as f32);
        Disc {
            center: Vector2::new(self.position.x as i32, self.position.y as i32),
            radius: PARTICLE_RADIUS,
            color,
        }
    }
}

/// Every live particle. Order only affects draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particles {
    pub particles: Vec<Particle>,
}

impl Particles {
    pub fn spawn_around<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        center: Vector2<i32>,
        radius: i32,
        count: usize,
    ) {
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::spawn(rng, center, radius));
        }
    }

    /// Steps every particle once and drops the ones that ran out of life.
    pub fn advance(&mut self) {
        self.particles.retain_mut(|particle| {
            particle.advance();
            particle.is_alive()
        });
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn discs(&self, hue_offset: f32) -> impl Iterator<Item = Disc> + '_ {
        self.particles.iter().map(move |p| p.disc(hue_offset))
    }
}
