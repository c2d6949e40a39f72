use super::*;

#[test]
fn ownership_list_adds_without_duplicates() {
    assert_eq!(with_owned("", "color"), "color");
    assert_eq!(with_owned("color", "background-color"), "color background-color");
    assert_eq!(with_owned("color background-color", "color"), "color background-color");
}

#[test]
fn ownership_list_removes_single_entry() {
    assert_eq!(without_owned("color background-color", "color"), "background-color");
    assert_eq!(without_owned("color", "color"), "");
    assert_eq!(without_owned("color", "border-color"), "color");
}

#[test]
fn ownership_match_is_exact() {
    assert!(is_owned("color border-color", "color"));
    assert!(!is_owned("border-color", "color"));
    assert!(!is_owned("", "color"));
}

#[test]
fn apply_claims_unset_or_owned_properties() {
    assert_eq!(apply_ownership("", "", "color").as_deref(), Some("color"));
    assert_eq!(
        apply_ownership("color", "#e6e8ee", "color").as_deref(),
        Some("color")
    );
    assert_eq!(
        apply_ownership("color", "", "background-color").as_deref(),
        Some("color background-color")
    );
}

#[test]
fn apply_leaves_author_inline_value_alone() {
    assert_eq!(apply_ownership("", "red", "background-color"), None);
    assert_eq!(apply_ownership("backdrop-filter", "red", "background-color"), None);
}

#[test]
fn revert_removes_only_owned_properties() {
    assert_eq!(revert_ownership(None, "color"), Revert::Keep);
    assert_eq!(revert_ownership(Some("border-color"), "color"), Revert::Keep);
    assert_eq!(
        revert_ownership(Some("color"), "color"),
        Revert::Remove { remaining: None }
    );
    assert_eq!(
        revert_ownership(Some("color border-color"), "color"),
        Revert::Remove {
            remaining: Some("border-color".to_owned())
        }
    );
}

#[test]
fn author_header_background_round_trips() {
    // Dark: author red is not claimed; light: nothing to remove.
    let owned = apply_ownership("", "red", "background-color");
    assert_eq!(owned, None);
    assert_eq!(revert_ownership(None, "background-color"), Revert::Keep);
}

#[cfg(not(feature = "csr"))]
#[test]
fn document_surface_is_noop_but_callable() {
    use crate::state::theme::DARK_FIXUPS;

    let mut surface = DocumentSurface;
    surface.set_marker(Theme::Dark);
    surface.set_token("--color-bg", "#000000");
    surface.set_chrome_color("#000000");
    for fixup in DARK_FIXUPS {
        surface.apply_fixup(fixup);
        surface.revert_fixup(fixup);
    }
    surface.set_transitions(true);
}
