use super::*;

#[test]
fn fragment_link_yields_id() {
    assert_eq!(fragment_target("#projects"), Some("projects"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_target("#"), None);
}

#[test]
fn non_fragment_links_are_ignored() {
    assert_eq!(fragment_target("/about#team"), None);
    assert_eq!(fragment_target(""), None);
}
