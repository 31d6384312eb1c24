use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::http_client::{build_client, ensure_ok, join_url};
use super::types::{AuthRequest, AuthResponse, ContainerRecord, EndpointRecord};
use super::{FleetGateway, SessionToken};
use crate::config::ServiceAccess;
use crate::model::{Endpoint, RunningContainer};

/// Portainer API client. Stateless: the session token is owned by the caller.
pub struct FleetClient {
    access: ServiceAccess,
    client: reqwest::Client,
}

impl FleetClient {
    pub fn new(access: ServiceAccess) -> Result<Self> {
        Ok(Self {
            access,
            client: build_client()?,
        })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.access.base_url, &format!("/api{}", path))
    }

    fn get(&self, url: String, session: &SessionToken) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, session.bearer())
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

#[async_trait]
impl FleetGateway for FleetClient {
    async fn authenticate(&self) -> Result<SessionToken> {
        debug!(base_url = %self.access.base_url, "authenticating against fleet manager");
        let resp = self
            .client
            .post(self.url("/auth"))
            .json(&AuthRequest {
                username: &self.access.username,
                password: &self.access.password,
            })
            .send()
            .await
            .context("authenticate")?;
        let auth: AuthResponse = ensure_ok(resp, "authenticate")?
            .json()
            .await
            .context("parse auth response")?;
        if auth.jwt.is_empty() {
            anyhow::bail!("authenticate: empty session token");
        }
        Ok(SessionToken::new(auth.jwt))
    }

    async fn list_endpoints(&self, session: &SessionToken) -> Result<Vec<Endpoint>> {
        let resp = self
            .get(self.url("/endpoints"), session)
            .send()
            .await
            .context("list endpoints")?;
        let records: Vec<EndpointRecord> = ensure_ok(resp, "list endpoints")?
            .json()
            .await
            .context("parse endpoints")?;
        debug!(count = records.len(), "endpoints fetched");
        Ok(records.into_iter().map(Endpoint::from).collect())
    }

    async fn list_running_containers(
        &self,
        session: &SessionToken,
        endpoint: i64,
    ) -> Result<Vec<RunningContainer>> {
        let url = self.url(&format!("/endpoints/{}/docker/containers/json", endpoint));
        let resp = self
            .get(url, session)
            .send()
            .await
            .with_context(|| format!("list containers on endpoint {}", endpoint))?;
        let records: Vec<ContainerRecord> =
            ensure_ok(resp, &format!("list containers on endpoint {}", endpoint))?
                .json()
                .await
                .context("parse containers")?;
        debug!(endpoint, count = records.len(), "containers fetched");
        Ok(records
            .into_iter()
            .filter_map(|c| c.into_running(endpoint))
            .collect())
    }
}
