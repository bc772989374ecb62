//! Pull-request title validation against a list of allowed prefix tags.

mod error;
mod tags;

pub use error::TitleCheckError;
pub use tags::TagList;

use crate::data::report::TitleCheckReport;

/// Environment variable that holds the newline-separated tag list by default.
pub const TAGS_ENV_VAR: &str = "TAGS";

/// Strips surrounding whitespace from a raw title.
pub fn normalize_title(raw: &str) -> &str {
    raw.trim()
}

/// Returns the first tag the (already normalized) title starts with.
pub fn validate_title<'a>(title: &str, tags: &'a TagList) -> Result<&'a str, TitleCheckError> {
    tags.find_prefix_of(title)
        .ok_or_else(|| TitleCheckError::NoTagMatched {
            title: title.to_string(),
        })
}

/// Runs the whole title check.
///
/// `title` is the positional argument as received and `raw_tags` the value of the
/// tags variable, `None` when it is unset. Inputs are checked in order (title first,
/// then tags) and the first failure ends the check. A tags value holding only blank
/// lines is present but yields no tags, so the title fails to match.
pub fn check_title(title: Option<&str>, raw_tags: Option<&str>) -> TitleCheckReport {
    let Some(raw_title) = title else {
        tracing::debug!("No title argument supplied");
        return TitleCheckReport::failed(None, TagList::default(), TitleCheckError::MissingTitle);
    };
    let title = normalize_title(raw_title);

    let raw_tags = match raw_tags {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            tracing::debug!(unset = raw_tags.is_none(), "Tags variable unset or empty");
            return TitleCheckReport::failed(
                Some(title),
                TagList::default(),
                TitleCheckError::MissingTags,
            );
        }
    };

    // Blank-only input parses to no tags, which then matches nothing
    let tags = TagList::parse(raw_tags);
    tracing::debug!("Parsed {} tags", tags.len());

    match validate_title(title, &tags) {
        Ok(tag) => {
            tracing::debug!("Title matched tag {tag:?}");
            let tag = tag.to_string();
            TitleCheckReport::passed(title, tags, tag)
        }
        Err(err) => TitleCheckReport::failed(Some(title), tags, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_title_passes() {
        let report = check_title(Some("feat: add login"), Some("feat:\nfix:"));
        assert!(report.passes);
        assert_eq!(report.matched_tag.as_deref(), Some("feat:"));
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn unmatched_title_fails() {
        let report = check_title(Some("docs: update readme"), Some("feat:\nfix:"));
        assert!(!report.passes);
        assert_eq!(
            report.error,
            Some(TitleCheckError::NoTagMatched {
                title: "docs: update readme".to_string()
            })
        );
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn missing_title_wins_over_tags_state() {
        for tags in [Some("feat:"), Some(""), None] {
            let report = check_title(None, tags);
            assert_eq!(report.error, Some(TitleCheckError::MissingTitle));
            assert!(report.title.is_none());
            assert_eq!(report.exit_code(), 1);
        }
    }

    #[test]
    fn unset_tags_is_missing_tags() {
        let report = check_title(Some("feat: x"), None);
        assert_eq!(report.error, Some(TitleCheckError::MissingTags));
        assert_eq!(report.title.as_deref(), Some("feat: x"));
    }

    #[test]
    fn empty_tags_is_missing_tags() {
        let report = check_title(Some("feat: x"), Some(""));
        assert_eq!(report.error, Some(TitleCheckError::MissingTags));
    }

    #[test]
    fn blank_tags_fail_as_no_match() {
        let blank = check_title(Some("feat: x"), Some("\n  \n"));
        let empty = check_title(Some("feat: x"), Some(""));
        assert_eq!(blank.exit_code(), empty.exit_code());
        assert!(blank.tags.is_empty());
        assert_eq!(
            blank.error,
            Some(TitleCheckError::NoTagMatched {
                title: "feat: x".to_string()
            })
        );
    }

    #[test]
    fn single_space_tags_fail_as_no_match() {
        let report = check_title(Some("feat: x"), Some(" "));
        assert!(matches!(
            report.error,
            Some(TitleCheckError::NoTagMatched { .. })
        ));
    }

    #[test]
    fn title_is_trimmed_before_matching() {
        let report = check_title(Some("  feat: x  "), Some("feat:"));
        assert!(report.passes);
        assert_eq!(report.title.as_deref(), Some("feat: x"));
    }

    #[test]
    fn blank_tag_lines_are_ignored() {
        let report = check_title(Some("fix: y"), Some("feat:\n\nfix:"));
        assert!(report.passes);
        assert_eq!(report.matched_tag.as_deref(), Some("fix:"));
    }

    #[test]
    fn leading_whitespace_in_tags_is_trimmed() {
        let report = check_title(Some("chore: bump"), Some("  feat:\n  chore:  "));
        assert!(report.passes);
    }

    #[test]
    fn validate_title_reports_title_on_failure() {
        let tags = TagList::parse("feat:");
        let err = validate_title("docs: x", &tags).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wrong title format. None of correct tags found in 'docs: x'"
        );
    }

    // ── property tests ────────────────────────────────────────────

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn passes_iff_title_starts_with_some_tag(
                tags in proptest::collection::vec("[a-z]{1,4}:?", 1..6),
                title in "[ a-z:]{0,16}",
            ) {
                let raw = tags.join("\n");
                let report = check_title(Some(&title), Some(&raw));
                let expected = tags.iter().any(|tag| title.trim().starts_with(tag.as_str()));
                prop_assert_eq!(report.passes, expected);
                prop_assert_eq!(report.exit_code() == 0, expected);
            }

            #[test]
            fn blank_tag_input_never_matches(raw in "[ \t\n]+", title in ".*") {
                let report = check_title(Some(&title), Some(&raw));
                prop_assert_eq!(report.exit_code(), 1);
                prop_assert_eq!(
                    report.error,
                    Some(TitleCheckError::NoTagMatched { title: title.trim().to_string() })
                );
            }

            #[test]
            fn missing_title_ignores_tags(raw in proptest::option::of(".*")) {
                let report = check_title(None, raw.as_deref());
                prop_assert_eq!(report.error, Some(TitleCheckError::MissingTitle));
            }
        }
    }
}
