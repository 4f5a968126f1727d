//! Reader for `.properties` files as written by `java.util.Properties`.
//!
//! Keys end at the first unescaped `=`, `:` or whitespace. Values keep
//! trailing whitespace. A line ending in an odd number of backslashes
//! continues on the next line, and `\t`, `\n`, `\r`, `\f`, `\uXXXX` and
//! `\<char>` escapes are decoded in both keys and values.

const WHITESPACE: [char; 3] = [' ', '\t', '\x0c'];

/// Returns entries in file order; later duplicates win when collected.
pub fn parse(contents: &str) -> Vec<(String, String)> {
    logical_lines(contents)
        .iter()
        .map(|line| split_entry(line))
        .collect()
}

fn logical_lines(contents: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;

    for raw in contents.lines() {
        let line = raw.trim_start_matches(WHITESPACE);

        let mut buf = match pending.take() {
            Some(buf) => buf,
            None if line.is_empty() || line.starts_with('#') || line.starts_with('!') => continue,
            None => String::new(),
        };

        if continues(line) {
            buf.push_str(&line[..line.len() - 1]);
            pending = Some(buf);
        } else {
            buf.push_str(line);
            lines.push(buf);
        }
    }

    if let Some(buf) = pending {
        lines.push(buf);
    }
    lines
}

fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (String, String) {
    let mut key_end = line.len();
    let mut escaped = false;

    for (idx, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = idx;
                break;
            }
            c if WHITESPACE.contains(&c) => {
                key_end = idx;
                break;
            }
            _ => {}
        }
    }

    let rest = line[key_end..].trim_start_matches(WHITESPACE);
    let value = rest
        .strip_prefix(|c: char| c == '=' || c == ':')
        .unwrap_or(rest)
        .trim_start_matches(WHITESPACE);

    (unescape(&line[..key_end]), unescape(value))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) if hex.len() == 4 => out.push(decoded),
                    _ => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn whitespace_separates_key_and_value() {
        assert_eq!(
            parse("webhook-link-indicate https://discord.com/api/webhooks/1/t"),
            vec![entry(
                "webhook-link-indicate",
                "https://discord.com/api/webhooks/1/t"
            )]
        );
        assert_eq!(parse("key \t = value"), vec![entry("key", "value")]);
        assert_eq!(parse("key==value"), vec![entry("key", "=value")]);
    }

    #[test]
    fn decodes_escapes_written_by_store() {
        assert_eq!(
            parse(r"webhook-link-indicate=https\://discord.com/api/webhooks/1/t"),
            vec![entry(
                "webhook-link-indicate",
                "https://discord.com/api/webhooks/1/t"
            )]
        );
        assert_eq!(parse(r"a\=b\ c=x\ty"), vec![entry("a=b c", "x\ty")]);
        assert_eq!(parse(r"mode=\u00e9t\u00E9"), vec![entry("mode", "été")]);
        assert_eq!(parse(r"mode=\u12"), vec![entry("mode", r"\u12")]);
    }

    #[test]
    fn joins_continuation_lines() {
        let contents = "webhook-link-indicate=https://discord.com/\\\n    api/webhooks/\\\n\tabc\nnext=1";
        assert_eq!(
            parse(contents),
            vec![
                entry("webhook-link-indicate", "https://discord.com/api/webhooks/abc"),
                entry("next", "1"),
            ]
        );

        // An escaped backslash at the end does not continue the line.
        assert_eq!(
            parse("path=C:\\\\\nnext=1"),
            vec![entry("path", "C:\\"), entry("next", "1")]
        );
    }

    #[test]
    fn keeps_trailing_whitespace_in_values() {
        assert_eq!(parse("   mode =  pvp  "), vec![entry("mode", "pvp  ")]);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        assert_eq!(
            parse("# comment\n  ! other\n\n\r\nkey\n"),
            vec![entry("key", "")]
        );
    }
}
