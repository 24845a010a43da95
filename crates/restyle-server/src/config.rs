use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use restyle_model::backend::gemini::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_TIMEOUT_SECS,
};
use restyle_model::GeminiBackend;

#[derive(Debug, Parser)]
#[command(name = "restyle-server", about = "Text rewriting API backed by Gemini")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "RESTYLE_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "RESTYLE_PORT", default_value = "3000")]
    pub port: u16,

    /// Google AI Studio API key
    #[arg(long, env = "GOOGLE_AI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Gemini model name
    #[arg(long, env = "RESTYLE_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub model: String,

    /// Base URL of the Generative Language API
    #[arg(long, env = "RESTYLE_GEMINI_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_url: String,

    /// Timeout for each upstream call (seconds).
    #[arg(long, env = "RESTYLE_UPSTREAM_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub upstream_timeout: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind
            .parse()
            .with_context(|| format!("invalid bind address: {}", self.bind))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn build_backend(&self) -> GeminiBackend {
        GeminiBackend::new(
            &self.gemini_url,
            &self.model,
            self.api_key.clone(),
            Duration::from_secs(self.upstream_timeout),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restyle_model::TextModel;

    #[test]
    fn defaults_without_flags() {
        let config = ServerConfig::try_parse_from(["restyle-server"]).unwrap();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.gemini_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.upstream_timeout, 60);
    }

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "restyle-server",
            "--bind",
            "127.0.0.1",
            "--port",
            "8080",
            "--model",
            "gemini-2.0-flash",
            "--api-key",
            "k",
        ])
        .unwrap();
        assert_eq!(
            config.socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        let backend = config.build_backend();
        assert!(backend.has_api_key());
        assert_eq!(backend.model_hint(), Some("gemini-2.0-flash"));
    }

    #[test]
    fn invalid_bind_is_an_error() {
        let config =
            ServerConfig::try_parse_from(["restyle-server", "--bind", "not-an-ip"]).unwrap();
        let err = config.socket_addr().unwrap_err();
        assert!(err.to_string().contains("not-an-ip"));
    }

    #[test]
    fn invalid_port_rejected_by_parser() {
        assert!(ServerConfig::try_parse_from(["restyle-server", "--port", "99999"]).is_err());
    }
}
