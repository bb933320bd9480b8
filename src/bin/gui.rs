fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    mandelbrot_explorer::run_gui(mandelbrot_explorer::ExplorerConfig::default())
}
