use sdl2::{video::WindowBuildError, IntegerOrSdlError};
use thiserror::Error;

/// Fatal failures while bringing up the window. Each names the failed step.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("SDL video initialization failed: {0}")]
    Sdl(String),
    #[error("window creation failed: {0}")]
    Window(#[from] WindowBuildError),
    #[error("renderer creation failed: {0}")]
    Renderer(#[from] IntegerOrSdlError),
    #[error("event pump creation failed: {0}")]
    EventPump(String),
}
