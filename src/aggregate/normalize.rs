//! Domain and path normalization for redirect keys

/// Lower-case the domain and drop any leading `www.` labels.
///
/// A bare `"www."` is kept as-is so the key never becomes empty.
pub fn normalize_domain(domain: &str) -> String {
    let lower = domain.to_lowercase();
    let mut host = lower.as_str();
    while let Some(rest) = host.strip_prefix("www.") {
        if rest.is_empty() {
            break;
        }
        host = rest;
    }
    host.to_string()
}

/// Map a missing path to `/` and drop any query string.
pub fn normalize_path(path: &str) -> String {
    let without_query = match path.find('?') {
        Some(idx) => &path[..idx],
        None => path,
    };

    if without_query.is_empty() {
        "/".to_string()
    } else {
        without_query.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain_strips_www_and_lowercases() {
        assert_eq!(normalize_domain("WWW.Example.com"), "example.com");
        assert_eq!(normalize_domain("example.com"), "example.com");
        assert_eq!(normalize_domain("Shop.Example.COM"), "shop.example.com");
    }

    #[test]
    fn test_normalize_domain_is_idempotent() {
        for input in ["WWW.Example.com", "www.a.io", "sub.b.org", "www.", "www.www.a.com", "WWW.www.www."] {
            let once = normalize_domain(input);
            assert_eq!(normalize_domain(&once), once, "input {input}");
        }
    }

    #[test]
    fn test_normalize_domain_keeps_bare_www() {
        assert_eq!(normalize_domain("www."), "www.");
        assert_eq!(normalize_domain("www.www."), "www.");
    }

    #[test]
    fn test_normalize_domain_strips_repeated_www() {
        assert_eq!(normalize_domain("www.www.a.com"), "a.com");
        assert_eq!(normalize_domain("WWW.www.A.com"), normalize_domain("a.com"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/foo?x=1"), "/foo");
        assert_eq!(normalize_path("/?x=1"), "/");
        assert_eq!(normalize_path("/a/b.aspx?id=2&y=3"), "/a/b.aspx");
        assert_eq!(normalize_path("/Mixed/Case"), "/Mixed/Case");
    }
}
