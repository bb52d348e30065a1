pub mod raster;

use legion::IntoQuery;
use legion::{system, world::SubWorld};
use log::{info, warn};
use sdl2::{pixels::Color, render::BlendMode, render::Canvas, video::Window};

use crate::{
    ball::Ball, color::hsv_to_rgb, error::InitError, particle::Particles,
    simulation::FrameClock, trail::Trail,
};
use raster::{fill_disc, Disc, PointSink};

pub struct DisplayConfig {
    pub title: &'static str,
    pub width: u32,
    pub height: u32,
}

pub struct Graphics {
    pub canvas: Canvas<Window>,
    pub sdl_context: sdl2::Sdl,
}

/// Brings up SDL video, a centered window and a v-synced, alpha-blending canvas.
pub fn init_graphics(display_config: &DisplayConfig) -> Result<Graphics, InitError> {
    let sdl_context = sdl2::init().map_err(InitError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(InitError::Sdl)?;

    let window = video_subsystem
        .window(
            display_config.title,
            display_config.width,
            display_config.height,
        )
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().accelerated().present_vsync().build()?;
    canvas.set_blend_mode(BlendMode::Blend);
    info!(
        "Opened \"{}\" at {}x{}",
        display_config.title, display_config.width, display_config.height
    );

    Ok(Graphics {
        canvas,
        sdl_context,
    })
}

/// Everything drawn in one frame, back to front: trails, particles, balls.
pub fn scene_discs<'a>(
    balls: &'a [(Ball, &'a Trail)],
    particles: &'a Particles,
    hue_offset: f32,
) -> impl Iterator<Item = Disc> + 'a {
    let trails = balls
        .iter()
        .flat_map(move |(ball, trail)| trail.discs(ball.radius, hue_offset));
    let balls = balls.iter().map(move |(ball, _)| Disc {
        center: ball.position,
        radius: ball.radius,
        color: hsv_to_rgb(hue_offset, 1., 1.),
    });
    trails.chain(particles.discs(hue_offset)).chain(balls)
}

pub fn draw_scene<S: PointSink + ?Sized>(
    sink: &mut S,
    discs: impl Iterator<Item = Disc>,
) -> Result<(), String> {
    for disc in discs {
        fill_disc(sink, &disc)?;
    }
    Ok(())
}

#[system]
#[read_component(Ball)]
#[read_component(Trail)]
pub fn render_scene(
    world: &mut SubWorld,
    #[resource] graphics: &mut Graphics,
    #[resource] particles: &Particles,
    #[resource] clock: &FrameClock,
) {
    let mut query = <(&Ball, &Trail)>::query();
    let balls: Vec<(Ball, &Trail)> = query
        .iter(world)
        .map(|(ball, trail)| (*ball, trail))
        .collect();

    graphics.canvas.set_draw_color(Color::RGBA(0, 0, 0, 255));
    graphics.canvas.clear();
    if let Err(e) = draw_scene(
        &mut graphics.canvas,
        scene_discs(&balls, particles, clock.hue_offset),
    ) {
        warn!("Frame drawn partially: {}", e);
    }
    graphics.canvas.present();
}
