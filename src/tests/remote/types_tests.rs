use super::*;

#[test]
fn artifact_takes_first_tag_as_display_name() -> anyhow::Result<()> {
    let record: ArtifactRecord = serde_json::from_value(serde_json::json!({
        "digest": "sha256:abc",
        "size": 2097152,
        "pull_time": "2026-01-25T00:00:00Z",
        "push_time": "2026-01-20T00:00:00Z",
        "tags": [{ "name": "v2" }, { "name": "latest" }],
        "extra_attrs": { "architecture": "amd64" }
    }))?;
    let repo = RepoName::from_path("web");
    let artifact = record.into_artifact("alpha", &repo);
    assert_eq!(artifact.display_name, "v2");
    assert_eq!(artifact.digest, Digest::new("sha256:abc"));
    assert_eq!(artifact.project, "alpha");
    assert_eq!(artifact.repository, repo);
    assert!((artifact.size_mib() - 2.0).abs() < f64::EPSILON);
    assert!(!artifact.selected);
    Ok(())
}

#[test]
fn untagged_artifact_gets_placeholder_name() -> anyhow::Result<()> {
    for tags in [serde_json::Value::Null, serde_json::json!([])] {
        let record: ArtifactRecord = serde_json::from_value(serde_json::json!({
            "digest": "sha256:def",
            "tags": tags,
        }))?;
        let artifact = record.into_artifact("alpha", &RepoName::from_path("web"));
        assert_eq!(artifact.display_name, UNTAGGED);
        assert_eq!(artifact.pulled_at, None);
    }
    Ok(())
}

#[test]
fn repository_record_without_path_is_skipped() -> anyhow::Result<()> {
    let ok: RepositoryRecord =
        serde_json::from_value(serde_json::json!({ "name": "alpha/team/api", "artifact_count": 4 }))?;
    let repo = ok.into_repository("alpha").expect("repository kept");
    assert_eq!(repo.name.display(), "team/api");
    assert_eq!(repo.artifact_count, 4);

    let bare: RepositoryRecord = serde_json::from_value(serde_json::json!({ "name": "alpha" }))?;
    assert!(bare.into_repository("alpha").is_none());
    Ok(())
}

#[test]
fn endpoint_and_container_use_engine_field_names() -> anyhow::Result<()> {
    let endpoint: EndpointRecord =
        serde_json::from_value(serde_json::json!({ "Id": 7, "Name": "edge", "Type": 2 }))?;
    assert_eq!(Endpoint::from(endpoint), Endpoint { id: 7, name: "edge".to_string() });

    let running: ContainerRecord = serde_json::from_value(serde_json::json!({
        "Id": "c1",
        "Image": "registry/app:1@sha256:abc",
        "State": "running"
    }))?;
    let c = running.into_running(7).expect("running container kept");
    assert_eq!(c.endpoint, 7);
    assert_eq!(c.image_digest(), Some("sha256:abc"));

    let exited: ContainerRecord =
        serde_json::from_value(serde_json::json!({ "Image": "app@sha256:abc", "State": "exited" }))?;
    assert!(exited.into_running(7).is_none());
    Ok(())
}

#[test]
fn paused_and_restarting_containers_still_hold_their_image() -> anyhow::Result<()> {
    for state in ["restarting", "paused", "Running"] {
        let record: ContainerRecord = serde_json::from_value(serde_json::json!({
            "Image": "registry/app@sha256:abc",
            "State": state
        }))?;
        let c = record.into_running(3).expect("container kept");
        assert_eq!(c.image_digest(), Some("sha256:abc"), "{}", state);
    }
    let stateless: ContainerRecord =
        serde_json::from_value(serde_json::json!({ "Image": "registry/app@sha256:abc" }))?;
    assert!(stateless.into_running(3).is_some());

    for state in ["exited", "dead", "created", "removing"] {
        let record: ContainerRecord = serde_json::from_value(serde_json::json!({
            "Image": "registry/app@sha256:abc",
            "State": state
        }))?;
        assert!(record.into_running(3).is_none(), "{}", state);
    }
    Ok(())
}

#[test]
fn image_digest_splits_on_last_separator() {
    let c = |r: &str| RunningContainer {
        endpoint: 1,
        image_reference: r.to_string(),
    };
    assert_eq!(c("img@sha256:abc").image_digest(), Some("sha256:abc"));
    assert_eq!(c("a@b@sha256:abc").image_digest(), Some("sha256:abc"));
    assert_eq!(c("nginx:latest").image_digest(), None);
    assert_eq!(c("nginx@").image_digest(), None);
}
