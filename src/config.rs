//!
//! src/config.rs  Andrew Belles  Oct 19th, 2026
//!
//! Loads endpoint, http and logging configuration from the environment
//! (and an optional .env file), falling back to defaults
//!

use url::Url;
use std::time;
use crate::errors::AppError;

/// Default endpoint of the public saavn api
pub const SAAVN_BASE_URL: &str = "https://saavn.dev/api/";

/// Constants for HTTP Config, mirror reqwest's own defaults
pub const HTTP_POOL_MAX_IDLE: usize = usize::MAX;
pub const HTTP_MAX_REDIRECTS: u8 = 10;

pub const LOG_FILTER: &str = "info,saavn_search=debug,reqwest=warn";

/// Reads an optional millisecond duration, rejecting anything non-numeric
fn env_millis(s: &str) -> Result<Option<time::Duration>, AppError> {
    match std::env::var(s) {
        Ok(v) if !v.trim().is_empty() => v.trim()
            .parse::<u64>()
            .map(|ms| Some(time::Duration::from_millis(ms)))
            .map_err(|e| AppError::Config(format!("{s} invalid: {e}"))),
        _ => Ok(None)
    }
}

/// Ensures that url is http(s) and names a host
fn ensure_http(url: &Url) -> Result<(), String> {
    match url.scheme() {
        "http" | "https" => {},
        other => return Err(format!("URL must be http(s), got {other}: {url}"))
    }
    match url.host_str() {
        Some(_) => Ok(()),
        None => Err(format!("URL missing host: {url}"))
    }
}

/// Parses a base url and guarantees the trailing slash `Url::join` needs
/// to keep the last path segment
pub fn parse_base_url(raw: &str) -> Result<Url, AppError> {
    let mut base_url = Url::parse(raw)
        .map_err(|e| AppError::Config(format!("SAAVN_BASE_URL invalid {e}")))?;

    ensure_http(&base_url).map_err(AppError::Config)?;

    if !base_url.path().ends_with('/') {
        let mut path = base_url.path().to_string();
        path.push('/');
        base_url.set_path(&path);
    }
    Ok(base_url)
}

///
/// Configuration for the saavn search endpoint. The url is only set
/// through `parse_base_url`, so it always has a host and a trailing slash
///
#[derive(Debug, Clone)]
pub struct SaavnConfig {
    base_url: Url       // https://saavn.dev/api/
}

impl SaavnConfig {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Ok( Self { base_url: parse_base_url(base_url)? } )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl Default for SaavnConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(SAAVN_BASE_URL)
                .expect("default saavn url is valid")
        }
    }
}

fn build_saavn() -> Result<SaavnConfig, AppError> {
    match std::env::var("SAAVN_BASE_URL") {
        Ok(v) if !v.trim().is_empty() => SaavnConfig::new(v.trim()),
        _ => Ok(SaavnConfig::default())
    }
}

///
/// Configuration for the http transport. Timeouts are left unset unless
/// asked for so the transport's defaults apply
///
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Option<time::Duration>,
    pub connect_timeout: Option<time::Duration>,
    pub pool_max_idle_per_host: usize,
    pub max_redirects: u8
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            connect_timeout: None,
            pool_max_idle_per_host: HTTP_POOL_MAX_IDLE,
            max_redirects: HTTP_MAX_REDIRECTS
        }
    }
}

fn build_http() -> Result<HttpConfig, AppError> {
    let timeout         = env_millis("HTTP_TIMEOUT_MS")?;
    let connect_timeout = env_millis("HTTP_CONNECT_TIMEOUT_MS")?;

    Ok( HttpConfig { timeout, connect_timeout, ..HttpConfig::default() } )
}

///
/// Configuration for Logger
///

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<LogFormat> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json"   => Some(LogFormat::Json),
            _ => None
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter_directives: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub include_file_line: bool,
    pub include_target: bool
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter_directives: LOG_FILTER.to_string(),
            format: LogFormat::Json,
            with_ansi: true,
            include_file_line: true,
            include_target: true
        }
    }
}

fn build_logging() -> Result<LoggingConfig, AppError> {
    let format = match std::env::var("LOG_FORMAT") {
        Ok(v) if !v.trim().is_empty() => LogFormat::parse(&v)
            .ok_or_else(|| AppError::Config(format!("LOG_FORMAT invalid: {v}")))?,
        _ => LogFormat::Json
    };
    Ok( LoggingConfig { format, ..LoggingConfig::default() } )
}

///
/// AppConfig which holds everything the binary needs to issue a search
///
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub saavn: SaavnConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig
}

///
/// Return all environment driven config to caller at program start.
///
pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();

    let saavn   = build_saavn()?;
    let http    = build_http()?;
    let logging = build_logging()?;

    Ok( AppConfig { saavn, http, logging } )
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn default_points_at_public_api() {
        let cfg = SaavnConfig::default();
        assert_eq!(cfg.base_url().as_str(), "https://saavn.dev/api/");
        assert_eq!(
            cfg.base_url().join("search/songs").unwrap().as_str(),
            "https://saavn.dev/api/search/songs"
        );
    }

    #[test]
    fn base_url_gets_trailing_slash() -> Result<(), AppError> {
        let url = parse_base_url("http://127.0.0.1:8080/api")?;
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/");
        Ok(())
    }

    #[test]
    fn base_url_rejects_other_schemes() {
        let err = parse_base_url("ftp://saavn.dev/api/").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn base_url_rejects_garbage() {
        assert!(parse_base_url("not a url").is_err());
    }

    #[test]
    fn base_url_rejects_urls_without_a_path() {
        for raw in ["mailto:help@saavn.dev", "data:text/plain,hi", "http:"] {
            assert!(SaavnConfig::new(raw).is_err(), "{raw} should be rejected");
        }
    }

    /// Env vars are process wide, tests touching them take this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: [&str; 4] = [
        "SAAVN_BASE_URL", "HTTP_TIMEOUT_MS", "HTTP_CONNECT_TIMEOUT_MS", "LOG_FORMAT"
    ];

    /// Runs `f` with exactly `vars` set among the keys this module reads
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        // SAFETY: every test that mutates the environment holds ENV_LOCK
        unsafe {
            for key in ENV_KEYS {
                std::env::remove_var(key);
            }
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
        }
        let out = f();
        unsafe {
            for key in ENV_KEYS {
                std::env::remove_var(key);
            }
        }
        out
    }

    #[test]
    fn unset_env_keeps_defaults() {
        with_env(&[], || {
            let saavn = build_saavn().unwrap();
            let http = build_http().unwrap();
            let logging = build_logging().unwrap();
            assert_eq!(saavn.base_url().as_str(), SAAVN_BASE_URL);
            assert!(http.timeout.is_none());
            assert!(http.connect_timeout.is_none());
            assert_eq!(logging.format, LogFormat::Json);
        });
    }

    #[test]
    fn base_url_override_gets_trailing_slash() {
        with_env(&[("SAAVN_BASE_URL", "http://127.0.0.1:18765/api")], || {
            let saavn = build_saavn().unwrap();
            assert_eq!(saavn.base_url().as_str(), "http://127.0.0.1:18765/api/");
        });
    }

    #[test]
    fn invalid_base_url_override_is_rejected() {
        with_env(&[("SAAVN_BASE_URL", "ftp://saavn.dev/api")], || {
            assert!(matches!(build_saavn(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn timeouts_read_as_millis() {
        let vars = [("HTTP_TIMEOUT_MS", "2500"), ("HTTP_CONNECT_TIMEOUT_MS", " 400 ")];
        with_env(&vars, || {
            let http = build_http().unwrap();
            assert_eq!(http.timeout, Some(time::Duration::from_millis(2500)));
            assert_eq!(http.connect_timeout, Some(time::Duration::from_millis(400)));
            assert_eq!(http.max_redirects, HTTP_MAX_REDIRECTS);
        });
    }

    #[test]
    fn non_numeric_timeout_is_rejected() {
        with_env(&[("HTTP_TIMEOUT_MS", "soon")], || {
            match build_http() {
                Err(AppError::Config(msg)) => assert!(msg.contains("HTTP_TIMEOUT_MS")),
                other => panic!("expected config error, got {other:?}"),
            }
        });
    }

    #[test]
    fn log_format_env_is_parsed_or_rejected() {
        with_env(&[("LOG_FORMAT", "Pretty")], || {
            assert_eq!(build_logging().unwrap().format, LogFormat::Pretty);
        });
        with_env(&[("LOG_FORMAT", "xml")], || {
            assert!(matches!(build_logging(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn load_config_assembles_every_section() {
        let vars = [
            ("SAAVN_BASE_URL", "http://localhost:9000/api/"),
            ("HTTP_TIMEOUT_MS", "1000"),
            ("LOG_FORMAT", "pretty"),
        ];
        with_env(&vars, || {
            let cfg = load_config().unwrap();
            assert_eq!(cfg.saavn.base_url().as_str(), "http://localhost:9000/api/");
            assert_eq!(cfg.http.timeout, Some(time::Duration::from_millis(1000)));
            assert_eq!(cfg.logging.format, LogFormat::Pretty);
        });
    }

    #[test]
    fn http_defaults_set_no_timeouts() {
        let http = HttpConfig::default();
        assert!(http.timeout.is_none());
        assert!(http.connect_timeout.is_none());
        assert_eq!(http.max_redirects, HTTP_MAX_REDIRECTS);
    }

    #[test]
    fn log_format_parses_case_insensitively() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" pretty "), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("xml"), None);
    }
}
