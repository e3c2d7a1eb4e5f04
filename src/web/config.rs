//! Web 服务器配置

use crate::env::{EnvConfig, EnvError, EnvResult};

/// Web 服务器配置
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// 绑定地址
    pub bind_addr: String,
    /// 端口
    pub port: u16,
    /// 静态文件目录
    pub static_dir: Option<String>,
    /// 表单默认源语言
    pub default_source_lang: String,
    /// 表单默认目标语言
    pub default_target_lang: String,
}

impl WebConfig {
    /// 从环境变量创建配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self::from_config(&EnvConfig::from_env()?))
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        let static_dir = if config.web_static_dir.is_empty() {
            None
        } else {
            Some(config.web_static_dir.clone())
        };

        Self {
            bind_addr: config.web_bind_address.clone(),
            port: config.web_port,
            static_dir,
            default_source_lang: config.source_lang.clone(),
            default_target_lang: config.target_lang.clone(),
        }
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.bind_addr.is_empty() {
            return Err(EnvError {
                variable: "LINGOVOX_WEB_BIND_ADDRESS".to_string(),
                message: "Bind address cannot be empty".to_string(),
            });
        }

        if self.port == 0 {
            return Err(EnvError {
                variable: "LINGOVOX_WEB_PORT".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if let Some(ref static_dir) = self.static_dir {
            if !std::path::Path::new(static_dir).exists() {
                tracing::warn!("Static directory '{}' does not exist", static_dir);
            }
        }

        Ok(())
    }

    /// 获取完整的监听地址
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_config(&EnvConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let env = EnvConfig {
            web_port: 9000,
            web_static_dir: "public".to_string(),
            target_lang: "fr".to_string(),
            ..EnvConfig::default()
        };
        let config = WebConfig::from_config(&env);

        assert_eq!(config.listen_address(), "127.0.0.1:9000");
        assert_eq!(config.static_dir.as_deref(), Some("public"));
        assert_eq!(config.default_target_lang, "fr");
    }

    #[test]
    fn test_empty_static_dir_disabled() {
        let config = WebConfig::default();
        assert!(config.static_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let config = WebConfig {
            port: 0,
            ..WebConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.variable, "LINGOVOX_WEB_PORT");
    }
}
