use super::*;

#[test]
fn listing_name_drops_project_and_displays_decoded() {
    let name = RepoName::from_listing("proj/a/b%2Fc").expect("repo path present");
    assert_eq!(name.display(), "a/b%2Fc");
}

#[test]
fn routable_form_is_escaped_twice() {
    let name = RepoName::from_path("team/api");
    assert_eq!(name.as_routable(), "team%252Fapi");
    assert_eq!(name.display(), "team/api");
}

#[test]
fn plain_names_pass_through_unchanged() {
    let name = RepoName::from_listing("library/nginx").expect("repo path present");
    assert_eq!(name.as_routable(), "nginx");
    assert_eq!(name.to_string(), "nginx");
}

#[test]
fn listing_without_repo_path_is_rejected() {
    assert!(RepoName::from_listing("library").is_none());
    assert!(RepoName::from_listing("library/").is_none());
    assert!(RepoName::from_listing("").is_none());
}

#[test]
fn digest_short_drops_algorithm_prefix() {
    let d = Digest::new("sha256:0123456789abcdef0123");
    assert_eq!(d.short(), "0123456789ab");
    assert_eq!(Digest::new("sha256:abc").short(), "abc");
    assert_eq!(Digest::new("plain").short(), "plain");
}
