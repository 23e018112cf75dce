//! RPC endpoint value object

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use url::{Host, Url};

use crate::error::{PipelineError, PipelineResult};

/// An `http`/`https` JSON-RPC endpoint URL.
///
/// Only the shape is checked. Reachability is the deploying tool's problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Endpoint(Cow<'static, str>);

impl Endpoint {
    /// Wrap a literal from the built-in catalog. The catalog tests parse every entry.
    pub(crate) const fn from_static(url: &'static str) -> Self {
        Self(Cow::Borrowed(url))
    }

    /// Validate and wrap a user-supplied URL.
    pub fn parse(url: &str) -> PipelineResult<Self> {
        validate(url).map_err(|reason| PipelineError::InvalidEndpoint {
            url: url.to_string(),
            reason,
        })?;
        Ok(Self(Cow::Owned(url.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `http` or `https`.
    pub fn scheme(&self) -> &str {
        self.0.split("://").next().unwrap_or_default()
    }

    /// Host without port, path or userinfo. IPv6 literals keep their brackets.
    pub fn host(&self) -> Option<String> {
        Url::parse(&self.0)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

fn validate(raw: &str) -> Result<(), String> {
    // Url::parse trims and strips whitespace instead of rejecting it.
    if raw.chars().any(char::is_whitespace) {
        return Err("contains whitespace".to_string());
    }
    let url = Url::parse(raw).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("scheme must be http or https".to_string());
    }
    match url.host() {
        None => Err("missing host".to_string()),
        Some(Host::Domain(domain)) if !is_dns_name(domain) => {
            Err("malformed host".to_string())
        }
        Some(_) => Ok(()),
    }
}

/// Dot-separated labels of letters, digits and inner hyphens.
fn is_dns_name(domain: &str) -> bool {
    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_https_with_path() {
        let endpoint =
            Endpoint::parse("https://goerli.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161")
                .unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host().as_deref(), Some("goerli.infura.io"));
    }

    #[test]
    fn parses_localhost_with_port() {
        let endpoint = Endpoint::parse("http://127.0.0.1:8545").unwrap();
        assert_eq!(endpoint.host().as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn parses_ipv6_literal() {
        let endpoint = Endpoint::parse("http://[::1]:8545/").unwrap();
        assert_eq!(endpoint.host().as_deref(), Some("[::1]"));
    }

    #[test]
    fn rejects_non_http_schemes() {
        let err = Endpoint::parse("ws://node.example:8546").unwrap_err();
        assert!(err.to_string().contains("scheme must be http or https"));
    }

    #[test]
    fn rejects_missing_scheme_and_host() {
        assert!(Endpoint::parse("bsc-dataseed2.binance.org").is_err());
        assert!(Endpoint::parse("https://").is_err());
        assert!(Endpoint::parse("https://:8545").is_err());
    }

    #[test]
    fn rejects_bad_port_and_whitespace() {
        assert!(Endpoint::parse("http://localhost:notaport").is_err());
        assert!(Endpoint::parse("http://localhost:99999").is_err());
        assert!(Endpoint::parse("https://bsc dataseed.org").is_err());
    }

    #[test]
    fn rejects_malformed_hosts() {
        for url in [
            "http://[::1]garbage/",
            "http://[zz]",
            "https://a..b",
            "https://-x-",
            "https://.bsc.org",
            "https://node-.example.org",
        ] {
            let err = Endpoint::parse(url).unwrap_err();
            assert!(
                matches!(err, PipelineError::InvalidEndpoint { .. }),
                "{url}: {err}"
            );
        }
    }

    #[test]
    fn accepts_userinfo_and_query() {
        let endpoint = Endpoint::parse("https://user:pw@rpc.example.org:443/v1?key=abc").unwrap();
        assert_eq!(endpoint.host().as_deref(), Some("rpc.example.org"));
    }

    #[test]
    fn static_and_parsed_compare_equal() {
        let a = Endpoint::from_static("https://rpc.testnet.tomochain.com");
        let b = Endpoint::parse("https://rpc.testnet.tomochain.com").unwrap();
        assert_eq!(a, b);
    }
}
