//! Codec for the serialized subject list column
//!
//! The dataset stores required subjects as a bracketed list of quoted strings,
//! e.g. `['Mathématiques', "Sciences de l'ingénieur"]`. Items may be quoted with
//! either quote character and may themselves contain commas. A plain
//! `;`-separated list without brackets is also accepted.

/// Parse a serialized subject list
///
/// # Errors
/// Returns a message when a bracketed list is unterminated or contains an
/// unquoted item
pub fn parse_subject_list(raw: &str) -> Result<Vec<String>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let Some(inner) = trimmed.strip_prefix('[') else {
        return Ok(trimmed
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect());
    };
    let inner = inner
        .strip_suffix(']')
        .ok_or_else(|| format!("unterminated subject list: {trimmed}"))?;

    let mut subjects = Vec::new();
    let mut chars = inner.chars().peekable();
    loop {
        while chars.next_if(|c| c.is_whitespace() || *c == ',').is_some() {}
        let Some(quote) = chars.next() else {
            break;
        };
        if quote != '\'' && quote != '"' {
            return Err(format!("expected a quoted subject in: {trimmed}"));
        }

        let mut item = String::new();
        let mut closed = false;
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        item.push(escaped);
                    }
                }
                c if c == quote => {
                    closed = true;
                    break;
                }
                c => item.push(c),
            }
        }
        if !closed {
            return Err(format!("unterminated quoted subject in: {trimmed}"));
        }
        subjects.push(item);
    }

    Ok(subjects)
}

/// Serialize subjects in the bracketed form read by [`parse_subject_list`]
///
/// Items are single-quoted unless they contain a single quote, in which case they
/// are double-quoted.
#[must_use]
pub fn format_subject_list<S: AsRef<str>>(subjects: &[S]) -> String {
    let items: Vec<String> = subjects
        .iter()
        .map(|s| {
            let s = s.as_ref();
            if !s.contains('\'') {
                format!("'{s}'")
            } else if s.contains('"') {
                format!("'{}'", s.replace('\'', "\\'"))
            } else {
                format!("\"{s}\"")
            }
        })
        .collect();
    format!("[{}]", items.join(", "))
}
