use prospecta_extract::context::{build_context, has_usable_text};

#[test]
fn each_text_is_followed_by_a_newline() {
    let context = build_context(["first file", "second file"]);
    assert_eq!(context, "first file\nsecond file\n");
}

#[test]
fn no_files_gives_empty_context() {
    let context = build_context(Vec::<String>::new());
    assert_eq!(context, "");
    assert!(!has_usable_text(&context));
}

#[test]
fn empty_extractions_are_not_usable() {
    let context = build_context(["", "  \t", ""]);
    assert_eq!(context, "\n  \t\n\n");
    assert!(!has_usable_text(&context));
}

#[test]
fn any_visible_character_is_usable() {
    assert!(has_usable_text(&build_context(["", "x"])));
}
