use cardshow_core::{click_advances, is_interactive_tag};

#[test]
fn interactive_tags_match_any_case() {
    for tag in ["a", "A", "button", "BUTTON", "Input"] {
        assert!(is_interactive_tag(tag), "{}", tag);
    }
    for tag in ["DIV", "SPAN", "VIDEO", "abbr", "SECTION"] {
        assert!(!is_interactive_tag(tag), "{}", tag);
    }
}

#[test]
fn plain_click_while_presenting_advances() {
    assert!(click_advances(true, ["P", "DIV", "SECTION", "BODY", "HTML"]));
}

#[test]
fn nothing_advances_when_not_presenting() {
    assert!(!click_advances(false, ["DIV", "BODY", "HTML"]));
    assert!(!click_advances(false, Vec::<String>::new()));
}

#[test]
fn click_inside_a_link_in_the_active_step_is_not_routed() {
    // <span> inside <a> inside the step
    let ancestry = vec![
        "SPAN".to_string(),
        "A".to_string(),
        "DIV".to_string(),
        "SECTION".to_string(),
        "BODY".to_string(),
    ];
    assert!(!click_advances(true, &ancestry));
}

#[test]
fn controls_themselves_are_not_routed() {
    assert!(!click_advances(true, ["BUTTON", "DIV", "BODY"]));
    assert!(!click_advances(true, ["INPUT", "FORM", "BODY"]));
}

#[test]
fn target_without_element_ancestry_advances() {
    assert!(click_advances(true, Vec::<&str>::new()));
}
