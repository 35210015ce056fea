use std::env;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use prospecta_core::report_files::{LOGO_FILE, REPORTS_DIR};
use prospecta_llm::openai::DEFAULT_BASE_URL;
use prospecta_llm::settings::DEFAULT_MODEL;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Root of the `/static` tree. Reports are written under `reports/`.
    pub static_dir: PathBuf,
    /// Not validated here; without a key every section degrades.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_timeout: Duration,
    pub max_upload_bytes: usize,
    pub tesseract_bin: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset and empty values take
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            port: parse_or(&get, "PORT", DEFAULT_PORT)?,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_timeout: Duration::from_secs(parse_or(
                &get,
                "OPENAI_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            max_upload_bytes: parse_or(&get, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            tesseract_bin: get("TESSERACT_BIN")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("tesseract")),
        })
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.static_dir.join(REPORTS_DIR)
    }

    pub fn logo_path(&self) -> PathBuf {
        self.static_dir.join(LOGO_FILE)
    }

    /// All interfaces, configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_or<T>(get: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid {key} value {raw:?}: {e}")),
    }
}
