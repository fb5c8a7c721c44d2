//! GFM extended autolinks: bare `http://`, `https://` and `www.` URLs and
//! email addresses.

use std::sync::OnceLock;

use regex::Regex;

use super::{MdKind, MdNode};

static URL: OnceLock<Option<Regex>> = OnceLock::new();

fn url_regex() -> Option<&'static Regex> {
    URL.get_or_init(|| match Regex::new(
        r"(?i)(?:https?://|www\.)[^\s<]+|[a-z0-9._+-]+@[a-z0-9_-]+(?:\.[a-z0-9_-]+)+",
    ) {
        Ok(regex) => Some(regex),
        Err(err) => {
            log::error!("autolink pattern failed to compile: {err}");
            None
        }
    })
    .as_ref()
}

/// Splits text into plain runs and link nodes.
pub(crate) fn linkify(text: &str) -> Vec<MdNode> {
    let Some(regex) = url_regex() else {
        return vec![MdNode::Text(text.to_string())];
    };
    let mut nodes = Vec::new();
    let mut cursor = 0;

    for m in regex.find_iter(text) {
        if m.start() < cursor || !starts_at_boundary(text, m.start()) {
            continue;
        }
        let (url, href) = if is_web_address(m.as_str()) {
            let url = trim_trailing(m.as_str());
            if !has_host(url) {
                continue;
            }
            (url, href_for(url))
        } else {
            // An address ending in `-` or `_` is not linked at all.
            if m.as_str().ends_with(['-', '_']) {
                continue;
            }
            let address = m.as_str().trim_end_matches('.');
            if !has_domain_dot(address) {
                continue;
            }
            (address, format!("mailto:{address}"))
        };
        if m.start() > cursor {
            nodes.push(MdNode::Text(text[cursor..m.start()].to_string()));
        }
        nodes.push(MdNode::element(
            MdKind::Link {
                href,
                title: String::new(),
            },
            vec![MdNode::Text(url.to_string())],
        ));
        cursor = m.start() + url.len();
    }

    if cursor < text.len() {
        nodes.push(MdNode::Text(text[cursor..].to_string()));
    }
    nodes
}

fn starts_at_boundary(text: &str, start: usize) -> bool {
    match text[..start].chars().next_back() {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '*' | '_' | '~' | '('),
    }
}

/// Drops trailing punctuation and unbalanced closing parentheses.
fn trim_trailing(url: &str) -> &str {
    let mut end = url.len();
    loop {
        let current = &url[..end];
        match current.chars().next_back() {
            Some(c @ ('?' | '!' | '.' | ',' | ':' | '*' | '_' | '~' | '\'' | '"' | ';')) => {
                end -= c.len_utf8();
            }
            Some(')') if current.matches(')').count() > current.matches('(').count() => {
                end -= 1;
            }
            _ => return current,
        }
    }
}

fn is_web_address(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("www.")
}

fn has_domain_dot(address: &str) -> bool {
    address
        .split_once('@')
        .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'))
}

fn has_host(url: &str) -> bool {
    let lower = url.to_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .unwrap_or(&lower);
    !rest.strip_prefix("www.").unwrap_or(rest).is_empty()
}

fn href_for(url: &str) -> String {
    if url.len() >= 4 && url[..4].eq_ignore_ascii_case("www.") {
        format!("http://{url}")
    } else {
        url.to_string()
    }
}
