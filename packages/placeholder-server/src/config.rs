use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// PORT 未設定時のポート
pub const DEFAULT_PORT: u16 = 8080;

/// DOCS_URL 未設定時のリンク先（使い方を描いた画像を返す）
pub const DEFAULT_DOCS_URL: &str = "/";

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub docs_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            docs_url: DEFAULT_DOCS_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// 環境変数から ServerConfig を作成する
    ///
    /// 任意の環境変数:
    /// - PORT（"8080" / ":8080" のどちらも可）
    /// - HOST
    /// - DOCS_URL
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の参照関数から ServerConfig を作成する
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
            config.port = port
                .trim_start_matches(':')
                .parse()
                .map_err(|_| format!("PORT is not a valid port: {port:?}"))?;
        }

        if let Some(host) = lookup("HOST").filter(|v| !v.is_empty()) {
            config.host = host
                .parse()
                .map_err(|_| format!("HOST is not a valid IP address: {host:?}"))?;
        }

        if let Some(docs_url) = lookup("DOCS_URL").filter(|v| !v.is_empty()) {
            config.docs_url = docs_url;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
