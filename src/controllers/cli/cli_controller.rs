use std::error::Error;
use std::fmt;
use std::path::Path;

use log::info;

use crate::controllers::interactive::{ExplorerConfig, ExplorerController, RenderError};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug)]
pub enum CliError {
    NoFrame,
    Render(RenderError),
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFrame => write!(f, "no frame has been rendered for the current view"),
            Self::Render(err) => write!(f, "{}", err),
            Self::Io(err) => write!(f, "failed to write image: {}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoFrame => None,
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Renders a single frame of the configured view and hands it to a file
/// presenter.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    explorer: ExplorerController,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, config: ExplorerConfig, width: u32, height: u32) -> Self {
        let mut explorer = ExplorerController::new(config);
        let _ = explorer.resize(width, height);

        Self {
            presenter,
            explorer,
        }
    }

    pub fn generate(&mut self) -> Result<&PixelBuffer, CliError> {
        let viewport = self.explorer.viewport();

        info!(
            "rendering {}x{} around {} + {}i at magnification {} with {} iterations",
            self.explorer.request().width,
            self.explorer.request().height,
            viewport.center().real,
            viewport.center().imag,
            viewport.magnification(),
            viewport.max_iterations()
        );

        Ok(self.explorer.render()?)
    }

    /// Writes the last generated frame. Fails with [`CliError::NoFrame`]
    /// before [`Self::generate`].
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), CliError> {
        if self.explorer.is_stale() {
            return Err(CliError::NoFrame);
        }

        self.presenter.present(self.explorer.current_buffer(), filepath)?;

        Ok(())
    }
}
