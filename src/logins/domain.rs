//! Hostname Parsing
//!
//! Derives the host and base (registrable) domain of a login's hostname.

use url::{Host, ParseError, Url};

/// Host and base domain of a login hostname
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHost {
    /// Full hostname, e.g. `mail.example.co.uk`
    pub host: String,
    /// Registrable domain, e.g. `example.co.uk`
    pub base_domain: String,
}

/// Parse a login hostname.
///
/// Accepts full URLs (`https://www.example.com/login`) as well as bare
/// hosts (`www.example.com`). Returns `None` when no base domain can be
/// derived.
pub fn parse_hostname(hostname: &str) -> Option<ParsedHost> {
    let url = parse_url(hostname.trim())?;

    match url.host()? {
        Host::Ipv4(addr) => Some(ParsedHost::same(addr.to_string())),
        // No base domain to group IPv6 literals under
        Host::Ipv6(_) => None,
        Host::Domain(domain) => parse_domain(domain),
    }
}

impl ParsedHost {
    fn same(host: String) -> Self {
        Self {
            base_domain: host.clone(),
            host,
        }
    }
}

fn parse_url(input: &str) -> Option<Url> {
    if input.is_empty() {
        return None;
    }

    match Url::parse(input) {
        Ok(url) if url.host().is_some() => Some(url),
        // `localhost:8080` parses as scheme `localhost`
        Ok(_) if !input.contains("://") => Url::parse(&format!("https://{}", input)).ok(),
        Ok(_) => None,
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{}", input)).ok()
        }
        Err(_) => None,
    }
}

fn parse_domain(domain: &str) -> Option<ParsedHost> {
    let host = domain.trim_end_matches('.');
    if host.is_empty() {
        return None;
    }

    if !host.contains('.') {
        return Some(ParsedHost::same(host.to_string()));
    }

    // A host that is itself a public suffix (`github.io`) is its own base
    let base = psl::domain_str(host).unwrap_or(host);
    Some(ParsedHost {
        host: host.to_string(),
        base_domain: base.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url() {
        let parsed = parse_hostname("https://www.amazon.com/ap/signin").unwrap();
        assert_eq!(parsed.host, "www.amazon.com");
        assert_eq!(parsed.base_domain, "amazon.com");
    }

    #[test]
    fn test_bare_host() {
        let parsed = parse_hostname("mail.apple.com").unwrap();
        assert_eq!(parsed.host, "mail.apple.com");
        assert_eq!(parsed.base_domain, "apple.com");
    }

    #[test]
    fn test_multi_label_suffix() {
        let parsed = parse_hostname("sub.amazon.co.uk").unwrap();
        assert_eq!(parsed.base_domain, "amazon.co.uk");

        let parsed = parse_hostname("https://www.bbc.co.uk").unwrap();
        assert_eq!(parsed.base_domain, "bbc.co.uk");
    }

    #[test]
    fn test_case_is_normalized() {
        let parsed = parse_hostname("https://WWW.Example.COM").unwrap();
        assert_eq!(parsed.host, "www.example.com");
        assert_eq!(parsed.base_domain, "example.com");
    }

    #[test]
    fn test_single_label_host() {
        let parsed = parse_hostname("http://localhost:8080").unwrap();
        assert_eq!(parsed.base_domain, "localhost");

        let parsed = parse_hostname("localhost:8080").unwrap();
        assert_eq!(parsed.host, "localhost");
    }

    #[test]
    fn test_ip_host() {
        let parsed = parse_hostname("http://192.168.1.1/admin").unwrap();
        assert_eq!(parsed.host, "192.168.1.1");
        assert_eq!(parsed.base_domain, "192.168.1.1");
    }

    #[test]
    fn test_undecipherable() {
        assert!(parse_hostname("not a url").is_none());
        assert!(parse_hostname("").is_none());
        assert!(parse_hostname("   ").is_none());
        assert!(parse_hostname("file:///etc/passwd").is_none());
    }

    #[test]
    fn test_public_suffix_host_is_its_own_base() {
        let parsed = parse_hostname("https://github.io").unwrap();
        assert_eq!(parsed.host, "github.io");
        assert_eq!(parsed.base_domain, "github.io");

        let parsed = parse_hostname("co.uk").unwrap();
        assert_eq!(parsed.base_domain, "co.uk");

        let parsed = parse_hostname("https://octocat.github.io").unwrap();
        assert_eq!(parsed.base_domain, "octocat.github.io");
    }

    #[test]
    fn test_ipv6_host_is_ignored() {
        assert!(parse_hostname("http://[::1]:8080").is_none());
        assert!(parse_hostname("https://[2001:db8::1]/login").is_none());
    }
}
