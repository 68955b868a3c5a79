use lifegrid::config::LifeConfig;
use lifegrid::constants::{FPS_UPDATE_INTERVAL_SECS, WINDOW_TITLE};
use lifegrid::controller::{Command, Controller, Signal};
use lifegrid::renderer::Renderer;
use lifegrid::simulation::GridSimulation;
use std::{sync::Arc, time::Instant};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = LifeConfig::default();
    let (num_rows, num_cols) = config.grid_dimensions()?;
    let mut simulation =
        GridSimulation::new(num_rows, num_cols)?.with_alive_probability(config.alive_probability)?;
    simulation.randomize(simulation.active_index(), config.alive_probability)?;
    log::info!(
        "Starting {}x{} board ({} cells alive), at most {:.1} updates/s",
        num_rows,
        num_cols,
        simulation.population(),
        config.max_updates_per_second
    );

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(config.screen_width, config.screen_height))
            .with_resizable(false)
            .build(&event_loop)?,
    );
    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        &config,
        num_rows * num_cols,
    ))?;
    let mut controller = Controller::new(config.min_update_interval());

    let mut last_fps_update_time = Instant::now();
    let mut frames_since_last_fps_update = 0;
    let mut current_fps = 0.0;

    event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| match event {
        Event::AboutToWait => {
            if controller.tick(&mut simulation, Instant::now()) {
                window.request_redraw();
            }
            elwt.set_control_flow(match controller.next_wake() {
                Some(deadline) => ControlFlow::WaitUntil(deadline),
                None => ControlFlow::Wait,
            });
        }
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => {
                controller.apply(Command::Quit, &mut simulation);
                elwt.exit();
            }
            WindowEvent::Resized(physical_size) => {
                renderer.resize(physical_size);
                window.request_redraw();
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state != ElementState::Pressed || key_event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = key_event.physical_key else {
                    return;
                };
                if let Some(command) = Command::from_key(code) {
                    match controller.apply(command, &mut simulation) {
                        Signal::Stop => elwt.exit(),
                        Signal::Continue => window.request_redraw(),
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                frames_since_last_fps_update += 1;
                let now = Instant::now();
                let elapsed_secs = now.duration_since(last_fps_update_time).as_secs_f64();
                if elapsed_secs >= FPS_UPDATE_INTERVAL_SECS {
                    current_fps = frames_since_last_fps_update as f64 / elapsed_secs;
                    last_fps_update_time = now;
                    frames_since_last_fps_update = 0;
                }

                match renderer.render(simulation.active_grid()) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("Surface lost, reconfiguring");
                        renderer.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("WGPU Error: OutOfMemory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("WGPU Error: {:?}", e),
                }

                let paused_text = if controller.is_paused() { " [PAUSED]" } else { "" };
                window.set_title(&format!(
                    "{} - Gen: {}, Alive: {} - FPS: {:.1}{}",
                    WINDOW_TITLE,
                    simulation.generation(),
                    simulation.population(),
                    current_fps,
                    paused_text
                ));
            }
            _ => {}
        },
        _ => {}
    })?;
    Ok(())
}
