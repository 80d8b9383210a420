//! Glob helpers: metacharacter detection, brace alternation and matching.
//!
//! Filesystem expansion goes through the `glob` crate, which has no notion of
//! `{a,b}` alternation, so braces are expanded here first. Matching a pattern
//! against an already-resolved path (the exclusion filter's last resort) uses
//! `globset`, which understands alternation natively.

use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

/// Upper bound on the number of alternatives a single pattern may expand to.
///
/// `{a,b}{a,b}{a,b}...` grows exponentially; past this point the remaining
/// alternatives are dropped rather than exhausting memory.
pub const MAX_BRACE_EXPANSIONS: usize = 1024;

/// Returns true if `text` contains `*`, `?`, `[`, or a `{a,b}` alternation.
///
/// # Examples
///
/// ```
/// use sift::pattern::glob::has_glob_meta;
///
/// assert!(has_glob_meta("src/*.php"));
/// assert!(has_glob_meta("packages/{api,web}"));
/// assert!(!has_glob_meta("src/Kernel.php"));
/// assert!(!has_glob_meta("docs/{draft}"));
/// ```
#[must_use]
pub fn has_glob_meta(text: &str) -> bool {
    text.contains(&['*', '?', '['][..])
        || (find_brace_group(text).is_some() && expand_braces(text).len() > 1)
}

/// Expand `{a,b}` alternations into the list of concrete patterns.
///
/// Nested groups are supported, duplicate alternatives are dropped, and an
/// unbalanced `{` is left as literal text. Groups without a comma are kept
/// literally as well.
///
/// # Examples
///
/// ```
/// use sift::pattern::glob::expand_braces;
///
/// assert_eq!(
///     expand_braces("src/{Http,Cli}/*.php"),
///     vec!["src/Http/*.php", "src/Cli/*.php"]
/// );
/// assert_eq!(expand_braces("a/{b,c{d,e}}"), vec!["a/b", "a/cd", "a/ce"]);
/// assert_eq!(expand_braces("broken{"), vec!["broken{"]);
/// ```
#[must_use]
pub fn expand_braces(pattern: &str) -> Vec<String> {
    let mut out = Vec::new();
    expand_into(pattern, &mut out);
    out
}

fn expand_into(pattern: &str, out: &mut Vec<String>) {
    if out.len() >= MAX_BRACE_EXPANSIONS {
        return;
    }

    let Some((open, close)) = find_brace_group(pattern) else {
        push_unique(out, pattern.to_string());
        return;
    };

    let prefix = &pattern[..open];
    let body = &pattern[open + 1..close];
    let suffix = &pattern[close + 1..];
    let alternatives = split_top_level(body);

    if alternatives.len() < 2 {
        // Literal group: keep it verbatim and keep expanding what follows.
        let mut tails = Vec::new();
        expand_into(suffix, &mut tails);
        for tail in tails {
            push_unique(out, format!("{prefix}{{{body}}}{tail}"));
        }
        return;
    }

    for alternative in alternatives {
        expand_into(&format!("{prefix}{alternative}{suffix}"), out);
        if out.len() >= MAX_BRACE_EXPANSIONS {
            log::debug!("brace expansion of '{pattern}' truncated at {MAX_BRACE_EXPANSIONS}");
            return;
        }
    }
}

fn push_unique(out: &mut Vec<String>, value: String) {
    if out.len() < MAX_BRACE_EXPANSIONS && !out.contains(&value) {
        out.push(value);
    }
}

/// Byte offsets of the first balanced `{ ... }` group.
fn find_brace_group(text: &str) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, c) in text.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, i));
                }
            }
            _ => {}
        }
    }

    None
}

/// Split a brace body on commas that are not inside a nested group.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut last = 0usize;

    for (i, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&body[last..i]);
                last = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[last..]);

    parts
}

/// Escape a literal path so it can prefix a glob pattern.
///
/// Metacharacters are wrapped in single-character classes (`[*]`), a form both
/// the `glob` and `globset` crates accept.
///
/// # Examples
///
/// ```
/// use sift::pattern::glob::escape_literal;
/// use std::path::Path;
///
/// assert_eq!(escape_literal(Path::new("/tmp/build[1]")), "/tmp/build[[]1]");
/// ```
#[must_use]
pub fn escape_literal(path: &Path) -> String {
    let text = path.to_string_lossy();
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '*' | '?' | '[' | '{' | '}' => {
                escaped.push('[');
                escaped.push(ch);
                escaped.push(']');
            }
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Compile an absolute glob for matching resolved paths.
///
/// `*` does not cross `/`; `**` does. Returns `None` (after logging) when the
/// pattern is not valid glob syntax, which callers treat as "never matches".
#[must_use]
pub fn compile_matcher(pattern: &str) -> Option<GlobMatcher> {
    match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => Some(glob.compile_matcher()),
        Err(e) => {
            log::debug!("ignoring unparsable glob '{pattern}': {e}");
            None
        }
    }
}

/// Options used for every filesystem expansion.
///
/// Hidden entries must be named explicitly, mirroring shell behavior.
pub(crate) const MATCH_OPTIONS: glob::MatchOptions = glob::MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};
