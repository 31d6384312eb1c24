use super::{Input, Step, back, open, reload};
use crate::nav::{NavigationState, PageKey, PageState};

pub(super) fn on_input(nav: &mut NavigationState, input: Input) -> Step {
    match input {
        Input::Enter => {
            let PageState::Repositories { project, listing } = nav.page() else {
                return Step::default();
            };
            let Some(repository) = listing.current().map(|r| r.name.clone()) else {
                return Step::default();
            };
            let key = PageKey::Artifacts {
                project: project.clone(),
                repository,
            };
            open(nav, key)
        }
        Input::Back => back(nav),
        Input::Reload => reload(nav),
        Input::ToggleSelect | Input::ClearSelection | Input::DeleteSelected => Step::default(),
        // Shared across pages; PageController::on_input consumes these before dispatch.
        Input::Up | Input::Down | Input::ToggleTimestamps | Input::Quit => Step::default(),
    }
}
