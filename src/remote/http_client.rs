use anyhow::{Context, Result};
use reqwest::StatusCode;

pub(super) const USER_AGENT: &str = concat!("regdash/", env!("CARGO_PKG_VERSION"));

pub(super) fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("build reqwest client")
}

pub(super) fn ensure_ok(resp: reqwest::Response, label: &str) -> Result<reqwest::Response> {
    let status = resp.status();
    if status == StatusCode::UNAUTHORIZED {
        anyhow::bail!("{}: unauthorized (check username/password)", label);
    }
    if status == StatusCode::FORBIDDEN {
        anyhow::bail!("{}: forbidden (insufficient permissions)", label);
    }
    if status == StatusCode::NOT_FOUND {
        anyhow::bail!("{}: not found", label);
    }
    if !status.is_success() {
        anyhow::bail!("{}: status code {}", label, status.as_u16());
    }
    Ok(resp)
}

pub(super) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

pub(super) fn first_page() -> [(&'static str, String); 2] {
    [
        ("page", "1".to_string()),
        ("page_size", super::PAGE_SIZE.to_string()),
    ]
}
