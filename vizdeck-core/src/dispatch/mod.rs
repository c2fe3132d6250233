mod dashboard;

use std::time::Instant;

use crate::action::{Action, DispatchResult};
use crate::simulation::SimClock;
use crate::state::AppState;

/// Dispatch an action against the dashboard state.
pub fn dispatch_action(
    action: &Action,
    state: &mut AppState,
    clock: &mut SimClock,
    now: Instant,
) -> DispatchResult {
    match action {
        Action::Quit => {
            log::info!("quit requested");
            return DispatchResult::with_quit();
        }
        Action::Dashboard(a) => dashboard::dispatch_dashboard(a, state, clock, now),
        Action::Nav(_) => {} // Handled by PaneManager
        Action::None => {}
    }
    DispatchResult::none()
}
