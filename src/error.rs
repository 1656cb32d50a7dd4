use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// SDL2 reports most failures as plain strings.
    #[error("sdl error: {0}")]
    Sdl(String),
    #[error("could not create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),
    #[error("2D rendering context is not supported: {0}")]
    Canvas(#[from] sdl2::IntegerOrSdlError),
    #[error("could not create texture: {0}")]
    Texture(#[from] sdl2::render::TextureValueError),
    #[error("could not upload frame: {0}")]
    UpdateTexture(#[from] sdl2::render::UpdateTextureError),
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::Sdl(message)
    }
}
