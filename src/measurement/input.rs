use reqwest::Url;

use crate::models::DisplayFragments;

/// Longest path shown before truncation, in characters.
pub const PATH_MAX_LEN: usize = 10;

const ELLIPSIS: char = '…';

/// Split a measurement `input` into display fragments.
///
/// Returns `None` when there is nothing to show. Input that is not a
/// well-formed URL, or uses a scheme other than `http`/`https`, is shown
/// verbatim. Host and path are taken from the input as typed: no
/// percent-encoding, no dot-segment resolution, explicit ports kept.
pub fn format_input(input: Option<&str>) -> Option<DisplayFragments> {
    let raw = input.filter(|s| !s.is_empty())?;

    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => return Some(raw_fragment(raw)),
    };

    let Some((host, path)) = split_authority(raw.trim()) else {
        return Some(raw_fragment(raw));
    };
    let path = truncate_path(&path);

    let fragments = match url.scheme() {
        "http" => DisplayFragments::Plain { host, path },
        "https" => DisplayFragments::Secure { host, path },
        _ => raw_fragment(raw),
    };
    Some(fragments)
}

fn raw_fragment(raw: &str) -> DisplayFragments {
    DisplayFragments::Raw {
        text: raw.to_string(),
    }
}

/// Host (with any port) and path plus query of `scheme://authority/path?query#fragment`.
///
/// The host is lowercased and user info dropped; the path is returned as
/// written, starting with `/`. `None` when there is no `://` or no host.
fn split_authority(raw: &str) -> Option<(String, String)> {
    let (_, rest) = raw.split_once("://")?;
    let rest = rest.split('#').next().unwrap_or_default();

    let authority_end = rest.find(['/', '?']).unwrap_or(rest.len());
    let (authority, path) = rest.split_at(authority_end);

    let host = authority.rsplit('@').next().unwrap_or(authority);
    if host.is_empty() {
        return None;
    }

    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    Some((host.to_ascii_lowercase(), path))
}

/// Cut `path` to [`PATH_MAX_LEN`] characters and append an ellipsis when longer.
pub fn truncate_path(path: &str) -> String {
    if path.chars().count() <= PATH_MAX_LEN {
        return path.to_string();
    }
    let mut out: String = path.chars().take(PATH_MAX_LEN).collect();
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_or_empty_input() {
        assert_eq!(format_input(None), None);
        assert_eq!(format_input(Some("")), None);
    }

    #[test]
    fn test_http_long_path_truncated() {
        let f = format_input(Some("http://example.com/a/very/long/path")).unwrap();
        assert_eq!(
            f,
            DisplayFragments::Plain {
                host: "example.com".to_string(),
                path: "/a/very/lo…".to_string(),
            }
        );
        assert_eq!(f.to_string(), "example.com/a/very/lo…");
    }

    #[test]
    fn test_https_short_path_kept() {
        let f = format_input(Some("https://www.torproject.org/")).unwrap();
        assert_eq!(
            f,
            DisplayFragments::Secure {
                host: "www.torproject.org".to_string(),
                path: "/".to_string(),
            }
        );
        assert_eq!(f.to_string(), "https://www.torproject.org/");
    }

    #[test]
    fn test_query_counts_towards_path() {
        let f = format_input(Some("http://example.com/?q=abcdefghij")).unwrap();
        match f {
            DisplayFragments::Plain { path, .. } => assert_eq!(path, "/?q=abcdef…"),
            other => panic!("unexpected fragments: {:?}", other),
        }
    }

    #[test]
    fn test_explicit_port_kept_in_host() {
        let f = format_input(Some("http://example.com:8080/x")).unwrap();
        match f {
            DisplayFragments::Plain { host, .. } => assert_eq!(host, "example.com:8080"),
            other => panic!("unexpected fragments: {:?}", other),
        }
    }

    #[test]
    fn test_other_scheme_is_raw() {
        let f = format_input(Some("ftp://example.com/file")).unwrap();
        assert_eq!(
            f,
            DisplayFragments::Raw {
                text: "ftp://example.com/file".to_string()
            }
        );
    }

    #[test]
    fn test_unparsable_is_raw() {
        let f = format_input(Some("not a url")).unwrap();
        assert_eq!(f.to_string(), "not a url");
        let f = format_input(Some("127.0.0.1:443")).unwrap();
        assert!(matches!(f, DisplayFragments::Raw { .. }));
    }

    #[test]
    fn test_non_ascii_path_kept_as_typed() {
        let f = format_input(Some("http://example.com/ééééééééééé")).unwrap();
        assert_eq!(
            f,
            DisplayFragments::Plain {
                host: "example.com".to_string(),
                path: "/ééééééééé…".to_string(),
            }
        );
    }

    #[test]
    fn test_default_port_and_dot_segments_kept() {
        let f = format_input(Some("http://example.com:80/a/../b")).unwrap();
        assert_eq!(
            f,
            DisplayFragments::Plain {
                host: "example.com:80".to_string(),
                path: "/a/../b".to_string(),
            }
        );
    }

    #[test]
    fn test_bare_host_and_fragment() {
        let f = format_input(Some("https://User@Example.COM?x=1#top")).unwrap();
        assert_eq!(
            f,
            DisplayFragments::Secure {
                host: "example.com".to_string(),
                path: "/?x=1".to_string(),
            }
        );
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_path("/abcdefghi"), "/abcdefghi");
        assert_eq!(truncate_path("/ééééééééééé"), "/ééééééééé…");
    }

    #[test]
    fn test_format_is_idempotent() {
        let input = Some("https://example.org/some/long/path");
        assert_eq!(format_input(input), format_input(input));
    }
}
