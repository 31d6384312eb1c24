use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::RegistryGateway;
use super::http_client::{build_client, ensure_ok, first_page, join_url};
use super::types::{ArtifactRecord, ProjectRecord, RepositoryRecord};
use crate::config::ServiceAccess;
use crate::model::{Artifact, Digest, Project, RepoName, Repository};

/// Harbor v2.0 API client using basic auth on every call.
pub struct RegistryClient {
    access: ServiceAccess,
    client: reqwest::Client,
}

impl RegistryClient {
    pub fn new(access: ServiceAccess) -> Result<Self> {
        Ok(Self {
            access,
            client: build_client()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.access.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.access.base_url, &format!("/api/v2.0{}", path))
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.access.username, Some(&self.access.password))
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&first_page())
    }
}

fn project_segment(project: &str) -> String {
    urlencoding::encode(project).into_owned()
}

#[async_trait]
impl RegistryGateway for RegistryClient {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let url = self.url("/projects");
        debug!(%url, "fetching projects");
        let resp = self.get(url).send().await.context("list projects")?;
        let records: Vec<ProjectRecord> = ensure_ok(resp, "list projects")?
            .json()
            .await
            .context("parse projects")?;
        debug!(count = records.len(), "projects fetched");
        Ok(records.into_iter().map(Project::from).collect())
    }

    async fn list_repositories(&self, project: &str) -> Result<Vec<Repository>> {
        let url = self.url(&format!("/projects/{}/repositories", project_segment(project)));
        debug!(%url, project, "fetching repositories");
        let resp = self.get(url).send().await.context("list repositories")?;
        let records: Vec<RepositoryRecord> = ensure_ok(resp, "list repositories")?
            .json()
            .await
            .context("parse repositories")?;
        debug!(project, count = records.len(), "repositories fetched");
        Ok(records
            .into_iter()
            .filter_map(|r| r.into_repository(project))
            .collect())
    }

    async fn list_artifacts(&self, project: &str, repository: &RepoName) -> Result<Vec<Artifact>> {
        let url = self.url(&format!(
            "/projects/{}/repositories/{}/artifacts",
            project_segment(project),
            repository.as_routable()
        ));
        debug!(%url, project, %repository, "fetching artifacts");
        let resp = self.get(url).send().await.context("list artifacts")?;
        let records: Vec<ArtifactRecord> = ensure_ok(resp, "list artifacts")?
            .json()
            .await
            .context("parse artifacts")?;
        debug!(project, %repository, count = records.len(), "artifacts fetched");
        Ok(records
            .into_iter()
            .map(|a| a.into_artifact(project, repository))
            .collect())
    }

    async fn delete_artifact(
        &self,
        project: &str,
        repository: &RepoName,
        digest: &Digest,
    ) -> Result<()> {
        let url = self.url(&format!(
            "/projects/{}/repositories/{}/artifacts/{}",
            project_segment(project),
            repository.as_routable(),
            digest.as_str()
        ));
        debug!(%url, "deleting artifact");
        let resp = self
            .client
            .delete(url)
            .basic_auth(&self.access.username, Some(&self.access.password))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .context("delete artifact")?;
        ensure_ok(resp, "delete artifact")?;
        debug!(digest = digest.short(), "artifact deleted");
        Ok(())
    }
}
