extern crate sdl2;

pub mod advance;
pub mod ball;
pub mod color;
pub mod error;
pub mod particle;
pub mod render;
pub mod simulation;
pub mod trail;
pub mod wall;
pub mod world_gen;

use error::InitError;
use legion::*;
use log::{error, info, LevelFilter};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use render::DisplayConfig;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use simulation::SimulationConfig;
use std::time::{SystemTime, UNIX_EPOCH};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const TITLE: &str = "Bouncing Ball with Dynamic Colors";

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d} {l} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Window close and Escape end the program; every other event is ignored.
fn is_quit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            }
    )
}

fn run() -> Result<(), InitError> {
    // Setup.
    let graphics = render::init_graphics(&DisplayConfig {
        title: TITLE,
        width: WIDTH,
        height: HEIGHT,
    })?;
    let mut event_pump = graphics
        .sdl_context
        .event_pump()
        .map_err(InitError::EventPump)?;

    let mut world = World::default();
    world_gen::init_world(&mut world);
    let mut resources = Resources::default();
    simulation::init_simulation(
        &mut resources,
        SimulationConfig {
            width: WIDTH,
            height: HEIGHT,
            seed: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default(),
        },
    );
    resources.insert(graphics);

    let mut schedule = Schedule::builder()
        .add_system(simulation::advance_time_system())
        .add_system(advance::advance_balls_system())
        .add_system(advance::record_trails_system())
        .add_system(advance::spawn_particles_system())
        .add_system(advance::advance_particles_system())
        .add_thread_local(render::render_scene_system())
        .add_thread_local(simulation::pace_frame_system())
        .build();

    'running: loop {
        for event in event_pump.poll_iter() {
            if is_quit_event(&event) {
                info!("Quit requested: {:?}", event);
                break 'running;
            }
        }
        schedule.execute(&mut world, &mut resources);
    }

    info!("Shutting down");
    Ok(())
}

pub fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Logging unavailable: {}", e);
    }
    if let Err(e) = run() {
        error!("{}", e);
        if !log::log_enabled!(log::Level::Error) {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
