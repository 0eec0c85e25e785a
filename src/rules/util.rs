//! Shared guards and string helpers used across inspection rules.

/// Schemes (and forms) for which an HTTP probe is meaningless.
const NON_FETCHABLE_PREFIXES: &[&str] = &[
    "javascript:",
    "blob:",
    "data:",
    "mailto:",
    "tel:",
    "vbscript:",
];

/// Whether a link cannot meaningfully be fetched over HTTP.
///
/// True for pseudo-protocol schemes and for fragment-only links. The check is
/// case-insensitive and ignores surrounding whitespace.
pub(crate) fn is_non_fetchable(link: &str) -> bool {
    let trimmed = link.trim();
    if trimmed.starts_with('#') {
        return true;
    }
    let lowered = trimmed.to_ascii_lowercase();
    NON_FETCHABLE_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

/// Collapses runs of consecutive slashes into single slashes.
pub(crate) fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

/// Percent-encodes every character outside the printable ASCII range.
///
/// Characters inside `\u{20}`..=`\u{7f}` pass through untouched, so existing
/// percent-escapes and reserved characters are preserved.
pub(crate) fn encode_non_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut buf = [0u8; 4];
    for c in s.chars() {
        if ('\u{20}'..='\u{7f}').contains(&c) {
            out.push(c);
        } else {
            for byte in c.encode_utf8(&mut buf).as_bytes() {
                out.push_str(&format!("%{byte:02X}"));
            }
        }
    }
    out
}

/// Decodes percent-escapes, tolerating malformed input.
///
/// Invalid escapes are passed through literally; decoded bytes are
/// reinterpreted as UTF-8 with replacement characters on failure.
pub(crate) fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Resolves a document-relative path against the path of the containing page.
///
/// `from_path` is a root-relative page path (`/blog/post`); `relative` is the
/// path portion of the link (`../faq`, `./a`, `section/intro`). `.` and `..`
/// segments are folded; the result is always root-relative.
pub(crate) fn resolve_relative(from_path: &str, relative: &str) -> String {
    if relative.is_empty() {
        return from_path.to_string();
    }

    // Base directory: the page itself when its path ends in '/', otherwise
    // its parent.
    let dir = match from_path.rfind('/') {
        _ if from_path.ends_with('/') => from_path,
        Some(last) => &from_path[..=last],
        None => "/",
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in dir.split('/').chain(relative.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut out = String::from("/");
    out.push_str(&segments.join("/"));
    if relative.ends_with('/') && out.len() > 1 {
        out.push('/');
    }
    out
}

/// Strips trailing slashes for path comparisons; `/` compares as itself.
pub(crate) fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
