use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cube_sphere::animation::RadiusTween;
use cube_sphere::camera::OrbitCamera;
use cube_sphere::cli::Cli;
use cube_sphere::frame::FrameClock;
use cube_sphere::placer;
use cube_sphere::renderer::Renderer;
use cube_sphere::scene::Sphere;
use cube_sphere::timer::FixedHz;

// === Constants ===

/// Whole-scene spin rate, radians per second of elapsed time
const ROTATION_SPEED: f32 = 0.1;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Frame driver state: `Stopped` is terminal and entered only when a tick
/// fails, freezing the scene on the last rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    Running,
    Stopped,
}

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: OrbitCamera,
    sphere: Sphere,
    radius_tween: Option<RadiusTween>,
    clock: FrameClock,
    frame_cap: FixedHz,
    last_poll: Instant,
    state: DriverState,
}

impl App {
    fn new(cli: Cli) -> Self {
        let frame_cap = FixedHz::new(cli.fps);
        Self {
            cli,
            window: None,
            renderer: None,
            camera: OrbitCamera::new(INITIAL_WINDOW_WIDTH as f32 / INITIAL_WINDOW_HEIGHT as f32),
            sphere: Sphere::default_scene(),
            radius_tween: None,
            clock: FrameClock::new(),
            frame_cap,
            last_poll: Instant::now(),
            state: DriverState::Running,
        }
    }

    /// One animation tick: camera damping, radius tween, placement, render
    fn tick(&mut self) -> anyhow::Result<()> {
        let frame = self.clock.tick();

        self.camera.update();

        if let Some(tween) = &mut self.radius_tween {
            self.sphere.set_radius(tween.advance(frame.delta));
            if tween.finished() {
                self.radius_tween = None;
            }
        }

        placer::place(&mut self.sphere);

        let rotation_y = frame.time * ROTATION_SPEED;
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            let response = renderer.render(
                window,
                &self.camera,
                &mut self.sphere,
                rotation_y,
                !self.cli.no_ui,
            )?;

            // A new toggle cancels and supersedes any tween in flight
            if response.toggle_clicked {
                self.radius_tween = Some(RadiusTween::toggle(self.sphere.radius()));
            }
        }

        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Cube Sphere")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let cube_count = self.sphere.cube_count();
            let renderer = match pollster::block_on(Renderer::new(window.clone(), cube_count)) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("failed to initialize renderer: {e:#}");
                    event_loop.exit();
                    return;
                }
            };

            let size = window.inner_size();
            self.camera.set_aspect(size.width, size.height);

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // The panel gets first claim on input events
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                // Camera aspect and surface dimensions change together,
                // before the next frame renders
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
                self.camera.set_aspect(size.width, size.height);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.camera.process_mouse_button(button, state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.camera.process_cursor(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.camera.process_scroll(delta);
            }
            WindowEvent::RedrawRequested => {
                if self.state == DriverState::Stopped {
                    return;
                }

                let now = Instant::now();
                let delta = now.duration_since(self.last_poll).as_secs_f32();
                self.last_poll = now;
                if !self.frame_cap.tick(delta) {
                    return;
                }

                if let Err(e) = self.tick() {
                    // Fail-stop: a broken frame is worse than a frozen one
                    log::error!("frame tick failed: {e:#}; animation stopped");
                    self.state = DriverState::Stopped;
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.state == DriverState::Running {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("Cube Sphere - drag to orbit, scroll to zoom, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
