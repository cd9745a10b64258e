//! Command Line Tokenizer
//!
//! Lines are split on whitespace, except for `echo "<content>" > <name>`,
//! whose content may itself contain spaces.

use super::types::ParseError;

/// A verb and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub name: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self { name: name.into(), args }
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// For `echo` the arguments are `[content, file_name]`. Quoted content runs
/// to the closing `"` that is followed by `>`, so it may contain `>` itself.
/// Unquoted content runs to the first `>`.
pub fn parse_line(line: &str) -> Result<Option<CommandLine>, ParseError> {
    let trimmed = line.trim();
    let mut words = trimmed.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };

    if name == "echo" {
        return parse_echo(&trimmed[name.len()..]).map(Some);
    }

    let args = words.map(String::from).collect();
    Ok(Some(CommandLine::new(name, args)))
}

fn parse_echo(rest: &str) -> Result<CommandLine, ParseError> {
    let (content, target) = split_quoted(rest.trim_start())
        .or_else(|| {
            let (content, target) = rest.split_once('>')?;
            let content = content.trim();
            let content = content
                .strip_prefix('"')
                .and_then(|c| c.strip_suffix('"'))
                .unwrap_or(content);
            Some((content, target))
        })
        .ok_or(ParseError::MissingRedirect)?;

    let target = target.trim();
    if target.is_empty() {
        return Err(ParseError::MissingTarget);
    }

    Ok(CommandLine::new(
        "echo",
        vec![content.to_string(), target.to_string()],
    ))
}

/// Split `"<content>" > <target>` at the first closing quote followed by `>`.
fn split_quoted(rest: &str) -> Option<(&str, &str)> {
    let body = rest.strip_prefix('"')?;
    body.match_indices('"').find_map(|(end, _)| {
        let after = body[end + 1..].trim_start().strip_prefix('>')?;
        Some((&body[..end], after))
    })
}

// ============================================================================
// Tests
// ============================================================================
