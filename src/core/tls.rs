//! Pinned TLS trust for the game client's self-issued certificate.

use reqwest::{Certificate, Client};

use crate::core::config::LiveClientConfig;
use crate::Result;

/// Root CA that signs the certificate served on port 2999
/// ("LoL Game Engineering Certificate Authority", Riot Games).
pub const RIOT_GAMES_CA_PEM: &[u8] = include_bytes!("../../certs/riotgames.pem");

pub fn riot_games_certificate() -> Result<Certificate> {
    Ok(Certificate::from_pem(RIOT_GAMES_CA_PEM)?)
}

/// Build the HTTP client used for every request.
///
/// The trust store holds the Riot Games root and nothing else; built-in
/// roots are disabled and certificate verification stays on.
pub fn build_http_client(config: &LiveClientConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("liveclientdata/", env!("CARGO_PKG_VERSION")))
        .timeout(config.timeout)
        .tls_built_in_root_certs(false)
        .add_root_certificate(riot_games_certificate()?)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_ca_is_a_single_pem_certificate() {
        let pem = std::str::from_utf8(RIOT_GAMES_CA_PEM).unwrap();
        assert!(pem.starts_with("-----BEGIN CERTIFICATE-----"));
        assert_eq!(pem.matches("BEGIN CERTIFICATE").count(), 1);
        assert!(pem.trim_end().ends_with("-----END CERTIFICATE-----"));
    }

    #[test]
    fn test_embedded_ca_parses() {
        assert!(riot_games_certificate().is_ok());
    }

    #[test]
    fn test_build_http_client_with_default_config() {
        let client = build_http_client(&LiveClientConfig::default());
        assert!(client.is_ok());
    }
}
