//! Tag snippet
//!
//! Builds the shell commands that tag and push a release. The snippet is only
//! ever printed for the user to copy.

/// Build a two-command snippet that tags `tag` with `message` and pushes tags.
///
/// The message is trimmed and quoted for POSIX shells. The tag is left bare
/// unless it contains characters the shell would split or expand.
pub fn tag_snippet(tag: &str, message: &str) -> String {
    format!(
        "git tag {} --message {} --message {} && \\\ngit push --tags",
        shell_word(tag),
        shell_quote(tag),
        shell_quote(message.trim()),
    )
}

fn shell_word(value: &str) -> String {
    let bare = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-' | '/'));
    if bare {
        value.to_string()
    } else {
        shell_quote(value)
    }
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
