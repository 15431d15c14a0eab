use std::net::IpAddr;

use reqwest::Url;

use super::error::ForwarderError;

/// A webhook URL split into the parts needed to open a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEndpoint {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Request target. Query and fragment of the configured URL are dropped.
    pub path: String,
}

impl WebhookEndpoint {
    /// Parse a webhook URL.
    ///
    /// Only `https` is accepted, except `http` to a loopback host for local
    /// stubs. The URL must name a host.
    pub fn parse(url: &str) -> Result<Self, ForwarderError> {
        let parsed = Url::parse(url)
            .map_err(|e| ForwarderError::InvalidWebhookUrl(format!("{}: {}", redact(url), e)))?;

        let scheme = parsed.scheme().to_string();
        if scheme != "https" && scheme != "http" {
            return Err(ForwarderError::InvalidWebhookUrl(format!(
                "unsupported scheme '{}'",
                scheme
            )));
        }

        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| {
                ForwarderError::InvalidWebhookUrl(format!("{}: missing host", redact(url)))
            })?
            .to_string();

        if scheme == "http" && !is_loopback(&host) {
            return Err(ForwarderError::InvalidWebhookUrl(format!(
                "{}: plaintext http is only allowed for loopback hosts",
                redact(url)
            )));
        }

        let port = parsed.port_or_known_default().ok_or_else(|| {
            ForwarderError::InvalidWebhookUrl(format!("{}: unknown port", redact(url)))
        })?;

        let path = match parsed.path() {
            "" => "/".to_string(),
            p => p.to_string(),
        };

        Ok(Self {
            scheme,
            host,
            port,
            path,
        })
    }

    /// `host:port` authority the connection is opened against.
    /// IPv6 hosts keep their brackets.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Absolute URL of the POST target; default ports are left implicit
    pub fn request_url(&self) -> String {
        let default_port = matches!(
            (self.scheme.as_str(), self.port),
            ("https", 443) | ("http", 80)
        );
        if default_port {
            format!("{}://{}{}", self.scheme, self.host, self.path)
        } else {
            format!("{}://{}{}", self.scheme, self.authority(), self.path)
        }
    }
}

fn is_loopback(host: &str) -> bool {
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .map(|ip| ip.is_loopback())
        .unwrap_or(false)
}

/// Webhook URLs carry their credential in the path; keep only scheme and host
/// when a URL ends up in an error message or log line.
pub(crate) fn redact(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{}://{}/...", parsed.scheme(), host),
            None => format!("{}:...", parsed.scheme()),
        },
        Err(_) => "<unparseable url>".to_string(),
    }
}
