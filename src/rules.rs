use regex::Regex;

/// Maximum allowed line length, in characters.
pub const MAX_LINE_LENGTH: usize = 200;

/// Classification of a detected style issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A single regex-driven style rule.
///
/// Rules match against lines that have already had their terminator stripped,
/// so none of the patterns need to anchor on `\n`.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    pattern: Regex,
    /// Suppress this rule on lines that are entirely a comment.
    skip_comment_lines: bool,
}

impl Rule {
    fn new(
        name: &'static str,
        pattern: &str,
        severity: Severity,
        message: &'static str,
    ) -> Self {
        Self {
            name,
            severity,
            message,
            pattern: Regex::new(pattern).expect("Invalid regex"),
            skip_comment_lines: false,
        }
    }

    fn comment_exempt(mut self) -> Self {
        self.skip_comment_lines = true;
        self
    }

    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    #[must_use]
    pub const fn skips_comment_lines(&self) -> bool {
        self.skip_comment_lines
    }
}

/// The fixed rule table plus the comment-line patterns used for exemptions.
///
/// Adding a rule means adding one entry to [`RuleSet::default`], no new
/// control flow.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
    block_comment_line: Regex,
    line_comment_line: Regex,
}

impl Default for RuleSet {
    fn default() -> Self {
        let rules = vec![
            Rule::new(
                "tabs",
                r"\t+",
                Severity::Warning,
                "Line contains tab characters",
            ),
            Rule::new(
                "comma-space",
                r",[^ ]",
                Severity::Error,
                r#"Place a space after ",""#,
            ),
            // Catching every operator is infeasible without parsing, so this
            // settles for the most common single- and two-character forms.
            Rule::new(
                "operator-space",
                r"(\w(\+|-|\*|<|>|=)\w)|(\w(==|<=|>=)\w)",
                Severity::Error,
                "Place a space around operators",
            )
            .comment_exempt(),
            Rule::new(
                "open-comment-space",
                r"/\*[^ *]",
                Severity::Error,
                r#"Place a space after "/*""#,
            ),
            Rule::new(
                "close-comment-space",
                r"[^ *]\*/",
                Severity::Error,
                r#"Place a space before "*/""#,
            ),
            Rule::new(
                "line-comment-space",
                r"//[^ *]",
                Severity::Warning,
                r#"Place a space after "//""#,
            ),
            Rule::new(
                "paren-brace-space",
                r"\)\{",
                Severity::Error,
                r#"Place a space between ")" and "{""#,
            ),
            Rule::new(
                "semicolon-space",
                r";\S",
                Severity::Error,
                r#"Place a space or newline after ";""#,
            ),
        ];

        Self {
            rules,
            block_comment_line: Regex::new(r"^\s*/\*.*\*/\s*$").expect("Invalid regex"),
            line_comment_line: Regex::new(r"^\s*//.*$").expect("Invalid regex"),
        }
    }
}

impl RuleSet {
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Whether the line is nothing but a comment (`/* ... */` or `// ...`).
    #[must_use]
    pub fn is_comment_line(&self, line: &str) -> bool {
        self.block_comment_line.is_match(line) || self.line_comment_line.is_match(line)
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
