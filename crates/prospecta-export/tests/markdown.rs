use prospecta_export::markdown::normalize;

#[test]
fn strips_heading_markers_and_asterisks() {
    let text = "## Overview\nThe **market** is *growing*.\n### Next steps\n- expand";
    assert_eq!(
        normalize(text),
        "Overview\nThe market is growing.\nNext steps\n- expand"
    );
}

#[test]
fn only_line_leading_hashes_are_removed() {
    assert_eq!(normalize("Item #1 ranks #2"), "Item #1 ranks #2");
    assert_eq!(normalize("#hashtag"), "hashtag");
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(normalize("\n\n  plain prose  \n"), "plain prose");
}

#[test]
fn heading_marker_swallows_following_blank_lines() {
    // `\s*` after the marker matches newlines too.
    assert_eq!(normalize("#\n\nBody"), "Body");
}

#[test]
fn normalize_is_idempotent() {
    let samples = [
        "",
        "   ",
        "plain",
        "# Title\nbody",
        "# # nested marker",
        "*# hidden marker",
        "  # indented marker",
        "**bold** and *em*",
        "##\n##\n## stacked",
        "a | b\n---|---\n1 | 2",
        "line one\n   \n#### deep\n* bullet *",
        "***",
        "#*#*# x",
    ];

    for sample in samples {
        let once = normalize(sample);
        assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        assert!(!once.contains('*'), "{sample:?} -> {once:?}");
    }
}
