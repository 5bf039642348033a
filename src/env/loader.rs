use super::EnvMap;
use std::fs;
use std::path::Path;

const QUOTES: [char; 2] = ['"', '\''];

/// Loads the env file at `path` into a mapping.
///
/// A missing or unreadable file yields an empty mapping: it only means no
/// configuration exists yet. See [`parse`] for the accepted lines.
pub fn load<P: AsRef<Path>>(path: P) -> EnvMap {
    let path = path.as_ref();
    if !path.is_file() {
        log::debug!("No env file found at: {}", path.display());
        return EnvMap::new();
    }

    match fs::read_to_string(path) {
        Ok(content) => parse(&content),
        Err(e) => {
            log::warn!("Could not read env file {}: {e}", path.display());
            EnvMap::new()
        }
    }
}

/// Parses env file text into a mapping.
///
/// Each `KEY=VALUE` line is split on its first `=` and the value is kept
/// exactly as written, so everything `save` writes loads back unchanged.
/// A value wrapped in matching quotes is handed to `dotenvy`, which resolves
/// the quoting and escapes. Blank lines, `#` comments and lines without a
/// key are skipped; a leading `export ` is ignored.
pub fn parse(content: &str) -> EnvMap {
    let mut values = EnvMap::new();
    for (number, line) in content.lines().enumerate() {
        match parse_line(line) {
            Some((key, value)) => {
                values.insert(key, value);
            }
            None if is_blank_or_comment(line) => {}
            None => log::debug!("Skipping malformed env line {}: {line}", number + 1),
        }
    }
    values
}

fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

fn parse_line(line: &str) -> Option<(String, String)> {
    if is_blank_or_comment(line) {
        return None;
    }

    let line = line.trim_start();
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim_end();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    if is_quoted(value) {
        if let Some(unquoted) = unquote(key, value) {
            return Some((key.to_string(), unquoted));
        }
    }
    Some((key.to_string(), value.to_string()))
}

fn is_quoted(value: &str) -> bool {
    match value.chars().next() {
        Some(quote) if QUOTES.contains(&quote) => value.len() >= 2 && value.ends_with(quote),
        _ => false,
    }
}

fn unquote(key: &str, value: &str) -> Option<String> {
    let line = format!("{key}={value}");
    match dotenvy::from_read_iter(line.as_bytes()).next()? {
        Ok((_, unquoted)) => Some(unquoted),
        Err(e) => {
            log::debug!("Keeping `{key}` verbatim, quoted value did not parse: {e}");
            None
        }
    }
}
