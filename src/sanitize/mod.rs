//! Markup sanitization consumed by the shortcode expanders.
//!
//! Three routines cover everything the expanders emit:
//!
//! - [`escape_attribute`] - entity-escape a value for use inside a
//!   double-quoted HTML attribute
//! - [`escape_url`] - make a URL display-safe for an `href`/`src`
//!   attribute: drop characters outside the URL character set and
//!   entity-encode ampersands and single quotes
//! - [`sanitize_post_html`] - permissive allow-list pass over an HTML
//!   fragment, keeping the tags authors are allowed to use in post bodies
//!   and entity-escaping everything else
//!
//! None of these routines parse HTML properly; they are the same
//! display-safety filters the host platform applies to post content, and
//! authors rely on their exact behavior (for example, an allowed tag's
//! attributes pass through verbatim).

/// Tags an author may use inside post-body fragments (`link_before`,
/// `img_after`, link inner content, and so on). Matched case-insensitively
/// against both opening and closing tags.
const ALLOWED_POST_TAGS: &[&str] = &[
    "a", "abbr", "b", "blockquote", "br", "cite", "code", "del", "em", "h1", "h2", "h3", "h4",
    "h5", "h6", "hr", "i", "img", "li", "ol", "p", "pre", "q", "s", "span", "strong", "ul",
];

/// Entity-escape a value for a double-quoted HTML attribute.
///
/// Escapes the five HTML-special characters (`&`, `<`, `>`, `"`, `'`);
/// everything else passes through unchanged.
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Make a URL safe for display inside a double-quoted attribute.
///
/// Characters outside the URL character set are dropped; ampersands and
/// single quotes are entity-encoded so the result cannot break out of the
/// surrounding attribute. An empty input stays empty.
///
/// Note this is display escaping, not validation: no scheme check is
/// performed, and a relative or fragment URL passes through as-is.
pub fn escape_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for ch in url.chars() {
        match ch {
            '&' => out.push_str("&#038;"),
            '\'' => out.push_str("&#039;"),
            _ if is_url_char(ch) => out.push(ch),
            // anything else (spaces, quotes, controls, non-ASCII) is dropped
            _ => {}
        }
    }
    out
}

fn is_url_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            '-' | '_'
                | '.'
                | '~'
                | '!'
                | '*'
                | '('
                | ')'
                | ';'
                | ':'
                | '@'
                | '='
                | '+'
                | '$'
                | ','
                | '/'
                | '?'
                | '#'
                | '['
                | ']'
                | '%'
        )
}

/// Permissive allow-list sanitizer for post-body HTML fragments.
///
/// Tags named in the post-body allow list are kept verbatim, attributes
/// included. Any other tag is entity-escaped in place, so the author sees
/// their literal markup in the rendered page instead of having it execute.
/// Text content is never touched, and a stray `<` that does not open a tag
/// is escaped on its own.
pub fn sanitize_post_html(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let tail = &rest[lt..];
        match scan_tag(tail) {
            Some((tag_src, name)) if is_allowed_tag(&name) => {
                out.push_str(tag_src);
                rest = &tail[tag_src.len()..];
            }
            Some((tag_src, _)) => {
                out.push_str(&html_escape::encode_text(tag_src));
                rest = &tail[tag_src.len()..];
            }
            None => {
                out.push_str("&lt;");
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_allowed_tag(name: &str) -> bool {
    ALLOWED_POST_TAGS.contains(&name)
}

/// Scan a candidate tag starting at the `<` that begins `input`.
///
/// Returns the tag source (both angle brackets included) and the lowercased
/// element name, or `None` when the text after `<` does not form a tag
/// (no element name, or no closing `>`). The closing bracket is searched
/// outside quoted attribute values so `alt="a > b"` stays inside the tag.
fn scan_tag(input: &str) -> Option<(&str, String)> {
    let bytes = input.as_bytes();
    let mut i = 1;

    if i < bytes.len() && bytes[i] == b'/' {
        i += 1;
    }

    let name_start = i;
    while i < bytes.len() && bytes[i].is_ascii_alphanumeric() {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name = input[name_start..i].to_ascii_lowercase();

    let mut quote: Option<u8> = None;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => {
                if b == b'"' || b == b'\'' {
                    quote = Some(b);
                } else if b == b'>' {
                    return Some((&input[..=i], name));
                }
            }
        }
        i += 1;
    }

    None
}
