//! End-to-end inspection scenarios through the full built-in rule list.
//!
//! These tests exercise the public `inspect_default` API the way the audit
//! run loop uses it: one owned input per link, no network (probe responses
//! are injected where a scenario needs one).

use site_audit::{inspect_default, InspectionInput, ProbeResponse, Scope, SiteConfig};

fn site(trailing_slash: bool) -> SiteConfig {
    SiteConfig::new("https://example.com", trailing_slash).unwrap()
}

#[test]
fn trailing_slash_warning() {
    let input = InspectionInput::new("/about")
        .with_text("About us")
        .with_site(site(true));
    let result = inspect_default(&input);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].name, "trailing-slash");
    assert_eq!(result.fix, "/about/");
    assert!(result.errors.is_empty());
}

#[test]
fn double_slash_collapse() {
    let input = InspectionInput::new("/this/is//a/test")
        .with_text("Test page")
        .with_site(site(false));
    let result = inspect_default(&input);
    assert_eq!(result.fix, "/this/is/a/test");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].name, "no-double-slashes");
}

#[test]
fn broken_anchor_with_suggestion() {
    let input = InspectionInput::new("/about#tem")
        .with_text("Our team")
        .with_from_path("/about")
        .with_ids(["foo", "bar", "team"])
        .with_site(site(false));
    let result = inspect_default(&input);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].name, "missing-hash");
    assert_eq!(result.fix, "/about#team");
    assert!(!result.passes());
}

#[test]
fn duplicate_query_param() {
    let input = InspectionInput::new("/page?filter=red&filter=red")
        .with_text("Red things")
        .with_site(site(false));
    let result = inspect_default(&input);
    assert_eq!(result.fix, "/page?filter=red");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].name, "no-duplicate-query-params");
}

#[test]
fn non_ascii_path() {
    let input = InspectionInput::new("/café/menu")
        .with_text("Menu")
        .with_site(site(false));
    let result = inspect_default(&input);
    assert!(!result.passes());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].name, "no-non-ascii-chars");
    assert_eq!(result.fix, "/caf%C3%A9/menu");
}

#[test]
fn javascript_pseudo_link() {
    let input = InspectionInput::new("javascript:history.back()")
        .with_text("Back")
        .with_site(site(false));
    let result = inspect_default(&input);
    assert!(!result.passes());
    assert_eq!(result.errors.len(), 1);
    let report = &result.errors[0];
    assert_eq!(report.name, "no-javascript");
    assert_eq!(report.scope, Scope::Error);
    assert!(report.fix.is_none());
    assert_eq!(result.fix, "javascript:history.back()");
}

#[test]
fn passing_links_are_fixed_points() {
    // For any passing link, re-inspecting its fix changes nothing.
    for link in [
        "/about",
        "/docs/install",
        "/downloads/report.pdf",
        "https://other.com/Whatever_Case//x", // external: style rules skip
        "mailto:hello@example.com",
        "/search?q=rust",
    ] {
        let input = InspectionInput::new(link)
            .with_text("A descriptive label")
            .with_site(site(false));
        let result = inspect_default(&input);
        assert!(result.passes(), "{link} should pass");
        assert_eq!(result.fix, link);

        let again = inspect_default(
            &InspectionInput::new(result.fix.clone())
                .with_text("A descriptive label")
                .with_site(site(false)),
        );
        assert!(again.passes());
        assert_eq!(again.fix, result.fix);
    }
}

#[test]
fn fix_chaining_matches_manual_composition() {
    // Running the full list once equals applying the first fix by hand and
    // re-running from there.
    let input = InspectionInput::new("/Guide//Setup")
        .with_text("Setup guide")
        .with_site(site(false));
    let chained = inspect_default(&input);
    assert_eq!(chained.fix, "/guide/setup");

    // Manual first step: collapse the slashes only.
    let manual_first = "/Guide/Setup";
    let second = inspect_default(
        &InspectionInput::new(manual_first)
            .with_text("Setup guide")
            .with_site(site(false)),
    );
    assert_eq!(second.fix, chained.fix);
}

#[test]
fn probe_response_drives_error_and_redirect_rules() {
    let not_found = InspectionInput::new("/missing")
        .with_text("Missing")
        .with_site(site(false))
        .with_response(ProbeResponse::with_status(404, "Not Found"));
    let result = inspect_default(&not_found);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].name, "no-error-response");

    let moved = InspectionInput::new("/old")
        .with_text("Old page")
        .with_site(site(false))
        .with_response(
            ProbeResponse::with_status(301, "Moved Permanently").with_header("location", "/new"),
        );
    let result = inspect_default(&moved);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].name, "redirects");
    assert_eq!(result.fix, "/new");
}

#[test]
fn skip_set_disables_rules_by_name() {
    let input = InspectionInput::new("/about")
        .with_text("About us")
        .with_site(site(true))
        .with_skip(["trailing-slash"]);
    let result = inspect_default(&input);
    assert!(result.passes());
    assert_eq!(result.fix, "/about");
}

#[test]
fn document_relative_link_chains_into_style_rules() {
    // Relative resolution happens first, so the trailing-slash rule sees the
    // root-relative form.
    let input = InspectionInput::new("Setup_Guide")
        .with_text("Setup guide")
        .with_from_path("/docs/")
        .with_site(site(false));
    let result = inspect_default(&input);
    assert_eq!(result.fix, "/docs/setup-guide");
    let names: Vec<_> = result.warnings.iter().map(|w| w.name).collect();
    assert_eq!(
        names,
        vec!["no-baseless", "no-uppercase-chars", "no-underscores"]
    );
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clean_paths_always_pass(segments in prop::collection::vec("[a-z0-9-]{1,10}", 1..5)) {
            let link = format!("/{}", segments.join("/"));
            let input = InspectionInput::new(link.clone())
                .with_text("A descriptive label")
                .with_site(site(false));
            let result = inspect_default(&input);
            prop_assert!(result.passes(), "{} was flagged", link);
            prop_assert_eq!(result.fix, link);
        }

        #[test]
        fn fixes_are_idempotent(segments in prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..5)) {
            let link = format!("/{}", segments.join("/"));
            let input = InspectionInput::new(link)
                .with_text("A descriptive label")
                .with_site(site(false));
            let first = inspect_default(&input);

            let again = InspectionInput::new(first.fix.clone())
                .with_text("A descriptive label")
                .with_site(site(false));
            let second = inspect_default(&again);
            prop_assert!(second.passes());
            prop_assert_eq!(second.fix, first.fix);
        }
    }
}
