use super::{Input, Step, open, reload};
use crate::nav::{NavigationState, PageKey, PageState};

pub(super) fn on_input(nav: &mut NavigationState, input: Input) -> Step {
    match input {
        Input::Enter => {
            let PageState::Projects(listing) = nav.page() else {
                return Step::default();
            };
            let Some(project) = listing.current().map(|p| p.name.clone()) else {
                return Step::default();
            };
            open(nav, PageKey::Repositories { project })
        }
        Input::Reload => reload(nav),
        // Root page: nothing to go back to, nothing to select.
        Input::Back | Input::ToggleSelect | Input::ClearSelection | Input::DeleteSelected => {
            Step::default()
        }
        // Shared across pages; PageController::on_input consumes these before dispatch.
        Input::Up | Input::Down | Input::ToggleTimestamps | Input::Quit => Step::default(),
    }
}
