use clap::Parser;

/// Command-line / environment configuration of the host server.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "server", about = "Serves the roster frontend bundle")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "ROSTER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "ROSTER_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Do not open a browser tab on startup.
    #[arg(long, env = "ROSTER_NO_BROWSER")]
    pub no_browser: bool,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;
    use clap::Parser;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "server",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--no-browser",
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(config.no_browser);
        assert_eq!(config.url(), "http://0.0.0.0:9000");
    }

    #[test]
    fn rejects_invalid_port() {
        assert!(ServerConfig::try_parse_from(["server", "--port", "http"]).is_err());
    }
}
