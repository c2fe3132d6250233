// Re-export core crate modules so crate::state, crate::action, etc. resolve throughout the binary
pub use vizdeck_core::action;
pub use vizdeck_core::config;
pub use vizdeck_core::dispatch;
pub use vizdeck_core::simulation;
pub use vizdeck_core::state;

mod global_actions;
mod panes;
mod setup;
mod ui;

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use global_actions::{handle_global_action, GlobalResult};
use simulation::SimClock;
use state::AppState;
use ui::{AppEvent, Frame, RatatuiBackend};

/// Minimum time between redraws (~30fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> std::io::Result<()> {
    let (config, config_err) = config::Config::load_or_default();
    setup::init_logging(&config);
    if let Some(e) = config_err {
        log::warn!("ignoring config override: {}", e);
    }
    log::info!("vizdeck starting (tick {}ms, {} audio bars)", config.tick_ms, config.audio_bars);

    let mut backend = RatatuiBackend::new()?;
    backend.start()?;

    let result = run(&mut backend, &config);

    backend.stop()?;
    if let Err(e) = &result {
        log::error!("terminated with error: {}", e);
    }
    log::info!("vizdeck stopped");
    result
}

fn run(backend: &mut RatatuiBackend, config: &config::Config) -> std::io::Result<()> {
    let mut state = AppState::new_with_defaults(&config.defaults());
    let (global_keymap, mut panes) = setup::build_panes(&state);
    let app_frame = Frame::new();

    let mut clock = SimClock::new(config.tick_interval());
    clock.sync(state.live, Instant::now());
    let mut rng = StdRng::from_os_rng();

    let mut dirty = true;
    let mut last_render = Instant::now()
        .checked_sub(FRAME_INTERVAL)
        .unwrap_or_else(Instant::now);

    loop {
        if let Some(app_event) = backend.poll_event(Duration::from_millis(10))? {
            match app_event {
                AppEvent::Resize(..) => dirty = true,
                AppEvent::Key(event) => {
                    let pane_action = match global_keymap.lookup(&event) {
                        Some(action) => match handle_global_action(action, &mut panes) {
                            GlobalResult::Quit => break,
                            GlobalResult::Handled(action) => action,
                            GlobalResult::NotHandled => {
                                panes.active_mut().handle_input(&event, &state)
                            }
                        },
                        None => panes.active_mut().handle_input(&event, &state),
                    };

                    panes.process_nav(&pane_action);

                    let result = dispatch::dispatch_action(
                        &pane_action,
                        &mut state,
                        &mut clock,
                        Instant::now(),
                    );
                    if result.quit {
                        break;
                    }
                    dirty = true;
                }
            }
        }

        let now = Instant::now();
        if clock.poll(now, &mut state, &mut rng) {
            dirty = true;
        }
        if state.status.is_some() {
            state.expire_status(now);
            dirty |= state.status.is_none();
        }

        if dirty && now.duration_since(last_render) >= FRAME_INTERVAL {
            last_render = now;
            dirty = false;

            let tabs = panes.tabs();
            let active = panes.active().id();
            backend.draw(|area, buf| {
                app_frame.render_buf(area, buf, &state, &tabs, active);
                panes.render(app_frame.content_area(area), buf, &state);
            })?;
        }
    }

    Ok(())
}
