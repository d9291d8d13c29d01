use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Matches `{{ env.VAR }}` and `{{ env.VAR | default("fallback") }}`
fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*([A-Za-z0-9_.]+)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#).expect("must be valid regex")
    })
}

/// Expand environment placeholders in raw TOML text
///
/// Lines that are TOML comments are copied verbatim so a commented-out
/// setting never requires its variable to be set.
pub fn expand_env(input: &str) -> anyhow::Result<String> {
    let mut lines = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_owned());
        } else {
            lines.push(expand_line(line)?);
        }
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}

fn expand_line(line: &str) -> anyhow::Result<String> {
    let mut expanded = String::with_capacity(line.len());
    let mut copied_up_to = 0;

    for captures in placeholder().captures_iter(line) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        expanded.push_str(&line[copied_up_to..whole.start()]);
        expanded.push_str(&resolve(&captures)?);
        copied_up_to = whole.end();
    }

    expanded.push_str(&line[copied_up_to..]);
    Ok(expanded)
}

fn resolve(captures: &Captures<'_>) -> anyhow::Result<String> {
    let key = captures.get(1).map_or("", |m| m.as_str());
    let fallback = captures.get(2).map(|m| m.as_str());

    let Some(var_name) = key.strip_prefix("env.").filter(|name| !name.contains('.')) else {
        anyhow::bail!("only variables scoped with 'env.' are supported: `{key}`");
    };

    match (std::env::var(var_name), fallback) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(fallback)) => Ok(fallback.to_owned()),
        (Err(_), None) => anyhow::bail!("environment variable not found: `{var_name}`"),
    }
}
