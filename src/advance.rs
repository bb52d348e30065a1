use legion::*;
use rand_pcg::Pcg64;

use crate::{
    ball::Ball,
    particle::{Particles, PARTICLES_PER_FRAME},
    trail::Trail,
    wall::Walls,
};

#[system(par_for_each)]
pub fn advance_balls(ball: &mut Ball, #[resource] walls: &Walls) {
    ball.advance(walls);
}

#[system(for_each)]
pub fn record_trails(ball: &Ball, trail: &mut Trail) {
    trail.push(ball.position);
}

#[system(for_each)]
pub fn spawn_particles(
    ball: &Ball,
    #[resource] particles: &mut Particles,
    #[resource] rng: &mut Pcg64,
) {
    particles.spawn_around(rng, ball.position, ball.radius, PARTICLES_PER_FRAME);
}

#[system]
pub fn advance_particles(#[resource] particles: &mut Particles) {
    particles.advance();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        simulation::{init_simulation, SimulationConfig},
        trail::TRAIL_LENGTH,
        world_gen::init_world,
    };
    use nalgebra::Vector2;

    fn setup(seed: u64) -> (World, Resources, Schedule) {
        let mut world = World::default();
        init_world(&mut world);
        let mut resources = Resources::default();
        init_simulation(
            &mut resources,
            SimulationConfig {
                width: 640,
                height: 480,
                seed,
            },
        );
        let schedule = Schedule::builder()
            .add_system(advance_balls_system())
            .add_system(record_trails_system())
            .add_system(spawn_particles_system())
            .add_system(advance_particles_system())
            .build();
        (world, resources, schedule)
    }

    fn ball_and_trail(world: &World) -> (Ball, Trail) {
        let mut query = <(&Ball, &Trail)>::query();
        let mut rows: Vec<(Ball, Trail)> = query
            .iter(world)
            .map(|(ball, trail)| (*ball, trail.clone()))
            .collect();
        assert_eq!(rows.len(), 1);
        rows.remove(0)
    }

    #[test]
    fn one_frame() {
        let (mut world, mut resources, mut schedule) = setup(9);
        schedule.execute(&mut world, &mut resources);

        let (ball, trail) = ball_and_trail(&world);
        assert_eq!(ball.position, Vector2::new(105, 105));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.newest(), Some(&ball.position));

        let particles = resources.get::<Particles>().unwrap();
        assert_eq!(particles.len(), PARTICLES_PER_FRAME);
        assert!(particles.particles.iter().all(|p| p.life == p.max_life - 1));
    }

    #[test]
    fn trail_follows_the_ball_and_caps() {
        let (mut world, mut resources, mut schedule) = setup(9);
        for frame in 1..=45 {
            schedule.execute(&mut world, &mut resources);
            let (ball, trail) = ball_and_trail(&world);
            assert_eq!(trail.len(), std::cmp::min(frame, TRAIL_LENGTH));
            assert_eq!(trail.newest(), Some(&ball.position));
        }
    }

    #[test]
    fn bounces_off_the_right_wall() {
        let (mut world, mut resources, mut schedule) = setup(9);
        for _ in 0..103 {
            schedule.execute(&mut world, &mut resources);
        }
        let (ball, _) = ball_and_trail(&world);
        assert_eq!((ball.position.x, ball.velocity.x), (615, 5));

        schedule.execute(&mut world, &mut resources);
        let (ball, _) = ball_and_trail(&world);
        assert_eq!((ball.position.x, ball.velocity.x), (620, -5));
    }

    #[test]
    fn same_seed_same_particles() {
        let (mut world_a, mut resources_a, mut schedule_a) = setup(1234);
        let (mut world_b, mut resources_b, mut schedule_b) = setup(1234);
        for _ in 0..10 {
            schedule_a.execute(&mut world_a, &mut resources_a);
            schedule_b.execute(&mut world_b, &mut resources_b);
        }
        let a = resources_a.get::<Particles>().unwrap();
        let b = resources_b.get::<Particles>().unwrap();
        assert_eq!(a.len(), 10 * PARTICLES_PER_FRAME);
        assert_eq!(*a, *b);
    }
}
