use super::*;

fn rejected(source: &str) -> SyntaxError {
    check_python(source).expect_err("source should be rejected")
}

#[test]
fn test_kind_follows_file_name() {
    assert_eq!(Submission::new("main.py", "").kind(), SubmissionKind::Python);
    assert_eq!(Submission::new("notes.txt", "").kind(), SubmissionKind::PlainText);
    assert_eq!(Submission::new("py", "").kind(), SubmissionKind::PlainText);
}

#[test]
fn test_pasted_is_python() {
    let pasted = Submission::pasted("print('hi')");
    assert_eq!(pasted.name(), "Pasted Code");
    assert_eq!(pasted.kind(), SubmissionKind::Python);
    assert_eq!(pasted.text(), "print('hi')");
}

#[test]
fn test_plain_text_skips_check() {
    let submission = Submission::new("essay.txt", "if (unbalanced:\n\"open");
    assert!(submission.validate().is_ok());
    assert!(submission.is_syntactically_valid());
}

#[test]
fn test_invalid_python_submission() {
    let submission = Submission::new("bad.py", "def f(:\n");
    assert!(!submission.is_syntactically_valid());
}

#[test]
fn test_pasted_prose_is_rejected() {
    let pasted = Submission::pasted("This is an essay about plagiarism");
    assert!(pasted.validate().is_err());
}

#[test]
fn test_empty_and_comment_only_sources_are_valid() {
    assert!(check_python("").is_ok());
    assert!(check_python("\n\n   \n").is_ok());
    assert!(check_python("# just a comment\n").is_ok());
}

#[test]
fn test_accepts_nested_blocks() {
    let source = "\
import os


class Greeter:
    def __init__(self, name):
        self.name = name

    def greet(self):
        if self.name:
            for ch in self.name:
                print(ch)
        else:
            print('nobody')
        return None


def main():
    Greeter('x').greet()
";
    assert!(check_python(source).is_ok());
}

#[test]
fn test_accepts_one_line_compound_statements() {
    assert!(check_python("if x: pass\nwhile y: y -= 1\n").is_ok());
}

#[test]
fn test_accepts_strings_with_prefixes_and_escapes() {
    let source = r#"a = rb'\d+'
b = f"{a!r} \" quoted"
c = ''
d = """multi
line with ' and " inside
"""
e = 'line \
continued'
"#;
    assert!(check_python(source).is_ok());
}

#[test]
fn test_brackets_span_lines_without_indentation_rules() {
    let source = "\
values = [
1,
        2,
  {'k':
 3},
]
total = sum(values[:
    2])
";
    assert!(check_python(source).is_ok());
}

#[test]
fn test_backslash_continuation() {
    assert!(check_python("x = 1 + \\\n        2\ny = x\n").is_ok());
    assert!(check_python("x = 1 \\ 2\n").is_err());
}

#[test]
fn test_crlf_line_endings() {
    assert!(check_python("if x:\r\n    y = 1\r\n").is_ok());
}

#[test]
fn test_rejects_statements_that_only_look_like_python() {
    for source in [
        "print \"hello\"\n",
        "x = = 1\n",
        "def f(a b):\n    return a\n",
        "This is an essay about plagiarism\n",
        "return return\n",
    ] {
        assert!(check_python(source).is_err(), "{source:?} should be rejected");
    }
}

#[test]
fn test_unterminated_string() {
    let err = rejected("a = 1\nb = 'open\nc = 2\n");
    assert_eq!(err.line, 2);
    assert!(!err.message.is_empty());

    assert!(check_python("x = 1\ndoc = \"\"\"starts here\nnever ends\n").is_err());
}

#[test]
fn test_unbalanced_brackets() {
    assert!(check_python("x = 1\nprint(foo(1)\ny = 2\n").is_err());
    assert!(check_python("x = 1)\n").is_err());
    assert!(check_python("x = [1, 2)\n").is_err());
}

#[test]
fn test_missing_indented_block() {
    let err = rejected("def f():\nreturn 1\n");
    assert_eq!(err.line, 2);

    assert!(check_python("x = 1\nif x:\n").is_err());
}

#[test]
fn test_unexpected_indent() {
    let err = rejected("x = 1\n    y = 2\n");
    assert_eq!(err.line, 2);
}

#[test]
fn test_inconsistent_dedent() {
    assert!(check_python("if x:\n        y = 1\n    z = 2\n").is_err());
}

#[test]
fn test_error_display_includes_line() {
    let err = rejected("x = = 1\n");
    assert_eq!(err.line, 1);
    assert!(err.to_string().starts_with("line 1: "));
}
