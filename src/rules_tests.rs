use super::*;

fn rule<'a>(rules: &'a RuleSet, name: &str) -> &'a Rule {
    rules
        .rules()
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("missing rule: {name}"))
}

#[test]
fn tabs_rule_matches_any_tab() {
    let rules = RuleSet::default();
    let tabs = rule(&rules, "tabs");
    assert!(tabs.matches("\tint x;"));
    assert!(tabs.matches("int\tx;"));
    assert!(!tabs.matches("    int x;"));
    assert_eq!(tabs.severity, Severity::Warning);
}

#[test]
fn comma_rule_requires_trailing_space() {
    let rules = RuleSet::default();
    let comma = rule(&rules, "comma-space");
    assert!(comma.matches("foo(a,b)"));
    assert!(!comma.matches("foo(a, b)"));
    // Comma at end of line has nothing after it to complain about.
    assert!(!comma.matches("int a,"));
    assert_eq!(comma.severity, Severity::Error);
}

#[test]
fn operator_rule_matches_tight_operators() {
    let rules = RuleSet::default();
    let op = rule(&rules, "operator-space");
    assert!(op.matches("x+y"));
    assert!(op.matches("x-y"));
    assert!(op.matches("x*y"));
    assert!(op.matches("i<n"));
    assert!(op.matches("a=b"));
    assert!(op.matches("a==b"));
    assert!(op.matches("a<=b"));
    assert!(op.matches("a>=b"));
    assert!(!op.matches("x + y"));
    assert!(!op.matches("a == b"));
}

#[test]
fn operator_rule_is_comment_exempt() {
    let rules = RuleSet::default();
    assert!(rule(&rules, "operator-space").skips_comment_lines());
    assert!(!rule(&rules, "tabs").skips_comment_lines());
}

#[test]
fn open_comment_rule_allows_space_and_star() {
    let rules = RuleSet::default();
    let open = rule(&rules, "open-comment-space");
    assert!(open.matches("/*no space"));
    assert!(!open.matches("/* spaced"));
    assert!(!open.matches("/** doc opener"));
}

#[test]
fn close_comment_rule_allows_space_and_star() {
    let rules = RuleSet::default();
    let close = rule(&rules, "close-comment-space");
    assert!(close.matches("no space*/"));
    assert!(!close.matches("spaced */"));
    assert!(!close.matches("**/"));
}

#[test]
fn line_comment_rule_is_a_warning() {
    let rules = RuleSet::default();
    let line_comment = rule(&rules, "line-comment-space");
    assert!(line_comment.matches("//no space"));
    assert!(!line_comment.matches("// spaced"));
    assert!(!line_comment.matches("//* banner"));
    assert_eq!(line_comment.severity, Severity::Warning);
}

#[test]
fn paren_brace_rule_matches_adjacency_only() {
    let rules = RuleSet::default();
    let paren = rule(&rules, "paren-brace-space");
    assert!(paren.matches("if (x){"));
    assert!(!paren.matches("if (x) {"));
}

#[test]
fn semicolon_rule_ignores_trailing_whitespace() {
    let rules = RuleSet::default();
    let semi = rule(&rules, "semicolon-space");
    assert!(semi.matches("for (i = 0;i < n; i++)"));
    assert!(!semi.matches("int x = 0; int y = 1;"));
    assert!(!semi.matches("int x = 0;"));
    assert!(!semi.matches("int x = 0;\t"));
}

#[test]
fn comment_line_detection() {
    let rules = RuleSet::default();
    assert!(rules.is_comment_line("// i<n is fine here"));
    assert!(rules.is_comment_line("  /* i<n is fine here */  "));
    assert!(!rules.is_comment_line("int x = 0; // trailing comment"));
    assert!(!rules.is_comment_line("/* unterminated opener"));
}

#[test]
fn severity_labels() {
    assert_eq!(Severity::Warning.label(), "Warning");
    assert_eq!(Severity::Error.label(), "Error");
}
