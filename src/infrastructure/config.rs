//! 配置基础设施
//!
//! 配置来源优先级（从高到低）：
//! 1. 环境变量 `HOST` / `PORT`
//! 2. `PRODUCT_API_CONFIG` 指定的文件，或 `config.toml`、`./config/config.toml`
//! 3. 内置默认值

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 显式指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "PRODUCT_API_CONFIG";

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

/// 服务配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 产品存储配置
    pub store: StoreConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
    /// 请求超时时间（秒）
    pub timeout_seconds: u64,
    /// 请求体大小上限（字节）
    pub max_body_size: usize,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 是否输出 target
    pub with_target: bool,
}

/// 产品存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// 启动时是否写入六条示例产品
    pub seed_sample_data: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8000,
            timeout_seconds: 30,
            max_body_size: 1024 * 1024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: false,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}

impl HttpConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 用环境变量覆盖监听地址和端口
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.http.bind_address = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.http.port = port
                .parse()
                .map_err(|_| ConfigError::Validation(format!("无效的 PORT: {}", port)))?;
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP端口必须大于0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }
        if self.http.timeout_seconds == 0 {
            return Err(ConfigError::Validation("超时时间必须大于0".to_string()));
        }
        if self.http.max_body_size == 0 {
            return Err(ConfigError::Validation("请求体上限必须大于0".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 从文件或默认值加载配置，叠加环境变量并校验
///
/// 此时日志尚未初始化，返回值里的 `Option<String>` 是实际使用的配置文件路径，
/// 由调用方在日志就绪后输出。
pub fn load_config() -> Result<(Config, Option<String>), ConfigError> {
    let (mut config, source) = match env::var(CONFIG_PATH_ENV) {
        Ok(path) => (Config::load_from_file(&path)?, Some(path)),
        Err(_) => match DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| Path::new(path).exists())
        {
            Some(path) => (Config::load_from_file(path)?, Some(path.to_string())),
            None => (Config::default(), None),
        },
    };

    config.apply_env_overrides()?;
    config.validate()?;

    Ok((config, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.http.server_address(), "127.0.0.1:8000");
        assert!(config.store.seed_sample_data);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http]\nport = 9100\n\n[store]\nseed_sample_data = false").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.http.port, 9100);
        assert_eq!(config.http.bind_address, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
        assert!(!config.store.seed_sample_data);
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config =
            toml::from_str(include_str!("../../config/config.example.toml")).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.http.max_body_size, 1024 * 1024);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[http\nport = ").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::load_from_file("/nonexistent/product-api.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = Config::default();
        config.http.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.http.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }
}
