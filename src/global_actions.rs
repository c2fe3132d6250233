use crate::panes::HelpPane;
use crate::ui::{Action, DashboardAction, NavAction, PaneManager};

pub(crate) enum GlobalResult {
    Quit,
    /// Resolved to an action that still goes through nav + dispatch
    Handled(Action),
    NotHandled,
}

/// Actions bound in the global layer, checked before the active pane's keymap.
pub(crate) fn handle_global_action(action: &'static str, panes: &mut PaneManager) -> GlobalResult {
    if let Some(target) = action.strip_prefix("switch:") {
        return GlobalResult::Handled(Action::Nav(NavAction::SwitchPane(target)));
    }
    match action {
        "quit" => GlobalResult::Quit,
        "next_pane" => GlobalResult::Handled(Action::Nav(NavAction::NextPane)),
        "prev_pane" => GlobalResult::Handled(Action::Nav(NavAction::PrevPane)),
        "toggle_live" => GlobalResult::Handled(Action::Dashboard(DashboardAction::ToggleLive)),
        "help" => {
            if panes.active().id() == "help" {
                return GlobalResult::Handled(Action::Nav(NavAction::Back));
            }
            let title = panes.active().title();
            let keymap = panes.active().keymap().clone();
            if let Some(help) = panes.get_pane_mut::<HelpPane>("help") {
                help.set_context(title, &keymap);
            }
            GlobalResult::Handled(Action::Nav(NavAction::SwitchPane("help")))
        }
        _ => GlobalResult::NotHandled,
    }
}
