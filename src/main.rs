use std::fs;
use std::path::Path;

use log::info;
use mandelbrot_explorer::{CliController, ExplorerConfig, PpmFilePresenter};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const OUTPUT: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    if let Some(dir) = Path::new(OUTPUT).parent() {
        fs::create_dir_all(dir)?;
    }

    let mut controller =
        CliController::new(PpmFilePresenter::new(), ExplorerConfig::default(), WIDTH, HEIGHT);

    controller.generate()?;
    controller.write(OUTPUT)?;

    info!("wrote {}", OUTPUT);

    Ok(())
}
