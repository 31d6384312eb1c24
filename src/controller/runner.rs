use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::{Completion, Event, Task};
use crate::deletion::safe_delete;
use crate::nav::PageKey;
use crate::remote::RegistryGateway;
use crate::usage::UsageChecker;

/// Runs tasks on the tokio runtime and posts their completions back to the UI loop.
pub struct TaskRunner {
    registry: Arc<dyn RegistryGateway>,
    checker: Arc<UsageChecker>,
    events: UnboundedSender<Event>,
    runtime: Handle,
}

impl TaskRunner {
    pub fn new(
        registry: Arc<dyn RegistryGateway>,
        checker: Arc<UsageChecker>,
        events: UnboundedSender<Event>,
        runtime: Handle,
    ) -> Self {
        Self {
            registry,
            checker,
            events,
            runtime,
        }
    }

    pub fn spawn(&self, task: Task) {
        let registry = Arc::clone(&self.registry);
        let checker = Arc::clone(&self.checker);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let completion = execute(task, registry.as_ref(), &checker).await;
            if events.send(Event::Completed(completion)).is_err() {
                debug!("event loop closed; completion dropped");
            }
        });
    }
}

/// Performs one task. Remote errors become completion payloads, never task failures.
pub async fn execute(
    task: Task,
    registry: &dyn RegistryGateway,
    checker: &UsageChecker,
) -> Completion {
    match task {
        Task::Fetch { ticket } => match ticket.key.clone() {
            PageKey::Projects => Completion::Projects {
                result: registry.list_projects().await.map_err(render),
                ticket,
            },
            PageKey::Repositories { project } => Completion::Repositories {
                result: registry.list_repositories(&project).await.map_err(render),
                ticket,
            },
            PageKey::Artifacts {
                project,
                repository,
            } => Completion::Artifacts {
                result: registry
                    .list_artifacts(&project, &repository)
                    .await
                    .map_err(render),
                ticket,
            },
        },
        Task::SafeDelete {
            ticket,
            batch,
            target,
        } => {
            let outcome = safe_delete(registry, checker, &target).await;
            Completion::Deletion {
                ticket,
                batch,
                digest: target.digest,
                outcome,
            }
        }
    }
}

fn render(err: anyhow::Error) -> String {
    format!("{:#}", err)
}
