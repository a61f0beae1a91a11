#[cfg(not(windows))]
mod headless;

use render::{Presenter, PresenterConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let presenter = Presenter::new(PresenterConfig::default());
    let result = run(presenter);
    if let Err(error) = &result {
        log::error!("{:#}", error);
    }
    result
}

#[cfg(windows)]
fn run(mut presenter: Presenter) -> anyhow::Result<()> {
    use platform::{
        time,
        window::{self, Window, WindowConfig, WindowEvent},
    };

    let config = WindowConfig::default();
    let window = Window::create(&config);
    let client = window.client_dimensions();
    presenter.on_window_created(client.width, client.height)?;

    loop {
        let frame_counter = time::Counter::start();

        if !window::dispatch_messages() {
            break;
        }
        for event in window.drain_events() {
            match event {
                WindowEvent::Resized(dim) => presenter.on_window_resized(dim.width, dim.height)?,
                WindowEvent::PaintNeeded(dirty) => presenter.on_paint_needed(&mut window.surface(), dirty),
            }
        }
        presenter.on_frame_tick(&mut window.surface());

        let frame_ms_elapsed = frame_counter.end().as_ms();
        log::trace!("frame: {:.3} ms, offsets: {:?}", frame_ms_elapsed, presenter.offsets());
        window.set_title(&format!(
            "{} | frame: {:>3.3} ms, {:>2.2} fps",
            config.title,
            frame_ms_elapsed,
            1000.0 / frame_ms_elapsed,
        ));
    }

    log::info!("quit requested");
    Ok(())
}

#[cfg(not(windows))]
fn run(presenter: Presenter) -> anyhow::Result<()> {
    let config = headless::HeadlessConfig::default();
    log::info!("no window system available, running {} frames headless", config.frames);
    let surface = headless::run(presenter, &config)?;
    let corner = surface.pixel(0, 0);
    log::info!("last frame top-left pixel: b={} g={} r={}", corner.b, corner.g, corner.r);
    Ok(())
}
