/// Converts an href found in the document into an absolute URL
///
/// This is a textual transform, not RFC 3986 resolution:
///
/// 1. Hrefs starting with `//`, `http://` or `https://` (any case) are returned unchanged
/// 2. Otherwise a leading `/` is ensured
/// 3. The result is `root_url + href`
///
/// Dot segments and query-only hrefs are not collapsed.
///
/// # Examples
///
/// ```
/// use meta_inspector::url::absolute_path;
///
/// assert_eq!(absolute_path("foo", "http://example.com"), "http://example.com/foo");
/// assert_eq!(absolute_path("//cdn.example.com/x.png", "http://example.com"), "//cdn.example.com/x.png");
/// ```
pub fn absolute_path(href: &str, root_url: &str) -> String {
    if is_network_path(href) {
        return href.to_string();
    }

    if href.starts_with('/') {
        format!("{}{}", root_url, href)
    } else {
        format!("{}/{}", root_url, href)
    }
}

/// Matches `^(http:|https:)?//`, case-insensitively
fn is_network_path(href: &str) -> bool {
    let rest = strip_prefix_ignore_case(href, "https:")
        .or_else(|| strip_prefix_ignore_case(href, "http:"))
        .unwrap_or(href);

    rest.starts_with("//")
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "http://example.com";

    #[test]
    fn test_absolute_path_kept() {
        assert_eq!(absolute_path("/foo", ROOT), "http://example.com/foo");
    }

    #[test]
    fn test_relative_path_gets_slash() {
        assert_eq!(absolute_path("foo", ROOT), "http://example.com/foo");
        assert_eq!(
            absolute_path("img/a.png", ROOT),
            "http://example.com/img/a.png"
        );
    }

    #[test]
    fn test_protocol_relative_unchanged() {
        assert_eq!(
            absolute_path("//cdn.example.com/x.png", ROOT),
            "//cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_full_urls_unchanged() {
        assert_eq!(
            absolute_path("http://other.com/a", ROOT),
            "http://other.com/a"
        );
        assert_eq!(
            absolute_path("HTTPS://other.com/a", ROOT),
            "HTTPS://other.com/a"
        );
    }

    #[test]
    fn test_other_schemes_treated_as_paths() {
        assert_eq!(
            absolute_path("ftp://other.com/a", ROOT),
            "http://example.com/ftp://other.com/a"
        );
    }

    #[test]
    fn test_dot_segments_not_collapsed() {
        assert_eq!(absolute_path("../a", ROOT), "http://example.com/../a");
        assert_eq!(absolute_path("?q=1", ROOT), "http://example.com/?q=1");
    }

    #[test]
    fn test_empty_href() {
        assert_eq!(absolute_path("", ROOT), "http://example.com/");
    }

    #[test]
    fn test_multibyte_href() {
        assert_eq!(absolute_path("é", ROOT), "http://example.com/é");
    }
}
