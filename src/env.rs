//! 统一的环境变量管理系统
//!
//! 类型安全、可验证的环境变量读取，支持 `.env` 文件

use std::env;
use std::fmt;
use std::time::Duration;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 加载当前目录下的 `.env` 文件（不存在时忽略）
pub fn load_dotenv() {
    if let Ok(path) = dotenv::dotenv() {
        tracing::debug!("已加载环境文件: {}", path.display());
    }
}

/// 核心环境变量定义
pub mod core {
    use super::*;

    /// 日志级别
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "LINGOVOX_LOG_LEVEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("info".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.trim().to_lowercase().as_str() {
                level @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(level.to_string()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!(
                        "Invalid log level '{}'. Use: trace, debug, info, warn, error",
                        value
                    ),
                }),
            }
        }
    }

    /// 禁用颜色输出
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }
}

/// 翻译相关环境变量
pub mod translation {
    use super::*;

    /// 默认源语言
    pub struct SourceLang;
    impl EnvVar<String> for SourceLang {
        const NAME: &'static str = "LINGOVOX_SOURCE_LANG";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("en".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Default source language code";

        fn parse(value: &str) -> EnvResult<String> {
            parse_lang_code(value, Self::NAME)
        }
    }

    /// 默认目标语言
    pub struct TargetLang;
    impl EnvVar<String> for TargetLang {
        const NAME: &'static str = "LINGOVOX_TARGET_LANG";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("es".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Default target language code";

        fn parse(value: &str) -> EnvResult<String> {
            parse_lang_code(value, Self::NAME)
        }
    }

    /// 翻译 API 地址
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "LINGOVOX_TRANSLATE_API_URL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(crate::translation::DEFAULT_TRANSLATE_API_URL.to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Translation API endpoint URL";

        fn parse(value: &str) -> EnvResult<String> {
            parse_http_url(value, Self::NAME)
        }
    }

    /// 翻译请求超时
    pub struct Timeout;
    impl EnvVar<Duration> for Timeout {
        const NAME: &'static str = "LINGOVOX_TRANSLATE_TIMEOUT";
        const DEFAULT: Option<Duration> = Some(Duration::from_secs(10));
        const DESCRIPTION: &'static str = "Translation request timeout in seconds";

        fn parse(value: &str) -> EnvResult<Duration> {
            parse_timeout_secs(value, Self::NAME)
        }
    }
}

/// 缓存相关环境变量
pub mod cache {
    use super::*;

    /// 翻译缓存容量
    pub struct Size;
    impl EnvVar<usize> for Size {
        const NAME: &'static str = "LINGOVOX_CACHE_SIZE";
        const DEFAULT: Option<usize> = Some(crate::cache::DEFAULT_CACHE_CAPACITY);
        const DESCRIPTION: &'static str = "Translation cache capacity (number of entries)";

        fn parse(value: &str) -> EnvResult<usize> {
            parse_positive_usize(value, Self::NAME, 1, 100000)
        }
    }
}

/// 语音合成相关环境变量
pub mod speech {
    use super::*;

    /// 语音合成 API 地址
    pub struct ApiUrl;
    impl EnvVar<String> for ApiUrl {
        const NAME: &'static str = "LINGOVOX_TTS_API_URL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(crate::speech::DEFAULT_TTS_API_URL.to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Speech synthesis API endpoint URL";

        fn parse(value: &str) -> EnvResult<String> {
            parse_http_url(value, Self::NAME)
        }
    }

    /// 语音合成请求超时
    pub struct Timeout;
    impl EnvVar<Duration> for Timeout {
        const NAME: &'static str = "LINGOVOX_TTS_TIMEOUT";
        const DEFAULT: Option<Duration> = Some(Duration::from_secs(15));
        const DESCRIPTION: &'static str = "Speech synthesis request timeout in seconds";

        fn parse(value: &str) -> EnvResult<Duration> {
            parse_timeout_secs(value, Self::NAME)
        }
    }

    /// 默认输出文件
    pub struct OutputFile;
    impl EnvVar<String> for OutputFile {
        const NAME: &'static str = "LINGOVOX_TTS_OUTPUT";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(crate::speech::DEFAULT_OUTPUT_FILE.to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Default audio output file";

        fn parse(value: &str) -> EnvResult<String> {
            let path = value.trim();
            if path.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Output file cannot be empty".to_string(),
                });
            }
            Ok(path.to_string())
        }
    }
}

/// Web服务器相关环境变量
pub mod web {
    use super::*;

    /// 绑定地址
    pub struct BindAddress;
    impl EnvVar<String> for BindAddress {
        const NAME: &'static str = "LINGOVOX_WEB_BIND_ADDRESS";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("127.0.0.1".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Web server bind address";

        fn parse(value: &str) -> EnvResult<String> {
            let addr = value.trim();
            if addr.is_empty() {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Address cannot be empty".to_string(),
                });
            }
            Ok(addr.to_string())
        }
    }

    /// 端口
    pub struct Port;
    impl EnvVar<u16> for Port {
        const NAME: &'static str = "LINGOVOX_WEB_PORT";
        const DEFAULT: Option<u16> = Some(8080);
        const DESCRIPTION: &'static str = "Web server port";

        fn parse(value: &str) -> EnvResult<u16> {
            let port: u16 = value.trim().parse().map_err(|_| EnvError {
                variable: Self::NAME.to_string(),
                message: "Must be a valid port number (1-65535)".to_string(),
            })?;

            if port == 0 {
                return Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: "Port cannot be 0".to_string(),
                });
            }

            Ok(port)
        }
    }

    /// 静态文件目录
    pub struct StaticDir;
    impl EnvVar<String> for StaticDir {
        const NAME: &'static str = "LINGOVOX_WEB_STATIC_DIR";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(String::new()),
            }
        }
        const DESCRIPTION: &'static str = "Static files directory (empty disables static serving)";

        fn parse(value: &str) -> EnvResult<String> {
            Ok(value.trim().to_string())
        }
    }
}

/// 辅助函数
fn parse_positive_usize(value: &str, var_name: &str, min: usize, max: usize) -> EnvResult<usize> {
    let num: usize = value.trim().parse().map_err(|_| EnvError {
        variable: var_name.to_string(),
        message: "Must be a valid positive number".to_string(),
    })?;

    if num < min {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} is below minimum {}", num, min),
        });
    }

    if num > max {
        return Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Value {} exceeds maximum {}", num, max),
        });
    }

    Ok(num)
}

fn parse_timeout_secs(value: &str, var_name: &str) -> EnvResult<Duration> {
    let seconds = parse_positive_usize(value, var_name, 1, 300)?;
    Ok(Duration::from_secs(seconds as u64))
}

fn parse_http_url(value: &str, var_name: &str) -> EnvResult<String> {
    let url = value.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(EnvError {
            variable: var_name.to_string(),
            message: "API URL must start with http:// or https://".to_string(),
        })
    }
}

fn parse_lang_code(value: &str, var_name: &str) -> EnvResult<String> {
    let lang = value.trim();
    let valid = !lang.is_empty()
        && lang.len() <= 10
        && lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(lang.to_string())
    } else {
        Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Invalid language code '{}'", value),
        })
    }
}

/// 环境变量配置汇总
#[derive(Debug, Clone)]
pub struct EnvConfig {
    // 核心配置
    pub log_level: String,
    pub no_color: bool,

    // 翻译配置
    pub source_lang: String,
    pub target_lang: String,
    pub translate_api_url: String,
    pub translate_timeout: Duration,

    // 缓存配置
    pub cache_size: usize,

    // 语音合成配置
    pub tts_api_url: String,
    pub tts_timeout: Duration,
    pub tts_output: String,

    // Web配置
    pub web_bind_address: String,
    pub web_port: u16,
    pub web_static_dir: String,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: core::LogLevel::get()?,
            no_color: core::NoColor::get()?,

            source_lang: translation::SourceLang::get()?,
            target_lang: translation::TargetLang::get()?,
            translate_api_url: translation::ApiUrl::get()?,
            translate_timeout: translation::Timeout::get()?,

            cache_size: cache::Size::get()?,

            tts_api_url: speech::ApiUrl::get()?,
            tts_timeout: speech::Timeout::get()?,
            tts_output: speech::OutputFile::get()?,

            web_bind_address: web::BindAddress::get()?,
            web_port: web::Port::get()?,
            web_static_dir: web::StaticDir::get()?,
        })
    }

    /// 验证配置
    pub fn validate(&self) -> EnvResult<()> {
        if self.web_static_dir.is_empty() {
            return Ok(());
        }

        if !std::path::Path::new(&self.web_static_dir).is_dir() {
            tracing::warn!("Static directory '{}' does not exist", self.web_static_dir);
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("Environment Configuration Summary:");
        println!("  Log Level: {}", self.log_level);
        println!("  Languages: {} -> {}", self.source_lang, self.target_lang);
        println!("  Translation API: {}", self.translate_api_url);
        println!("  Speech API: {}", self.tts_api_url);
        println!("  Cache Size: {}", self.cache_size);
        println!("  Web Server: {}:{}", self.web_bind_address, self.web_port);
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            no_color: false,
            source_lang: "en".to_string(),
            target_lang: "es".to_string(),
            translate_api_url: crate::translation::DEFAULT_TRANSLATE_API_URL.to_string(),
            translate_timeout: Duration::from_secs(10),
            cache_size: crate::cache::DEFAULT_CACHE_CAPACITY,
            tts_api_url: crate::speech::DEFAULT_TTS_API_URL.to_string(),
            tts_timeout: Duration::from_secs(15),
            tts_output: crate::speech::DEFAULT_OUTPUT_FILE.to_string(),
            web_bind_address: "127.0.0.1".to_string(),
            web_port: 8080,
            web_static_dir: String::new(),
        }
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    push_doc::<String, core::LogLevel>(&mut docs, "info");
    push_doc::<bool, core::NoColor>(&mut docs, "unset");

    docs.push_str("\n## Translation Configuration\n\n");
    push_doc::<String, translation::SourceLang>(&mut docs, "en");
    push_doc::<String, translation::TargetLang>(&mut docs, "es");
    push_doc::<String, translation::ApiUrl>(&mut docs, crate::translation::DEFAULT_TRANSLATE_API_URL);
    push_doc::<Duration, translation::Timeout>(&mut docs, "10");

    docs.push_str("\n## Cache Configuration\n\n");
    push_doc::<usize, cache::Size>(&mut docs, "100");

    docs.push_str("\n## Speech Configuration\n\n");
    push_doc::<String, speech::ApiUrl>(&mut docs, crate::speech::DEFAULT_TTS_API_URL);
    push_doc::<Duration, speech::Timeout>(&mut docs, "15");
    push_doc::<String, speech::OutputFile>(&mut docs, crate::speech::DEFAULT_OUTPUT_FILE);

    docs.push_str("\n## Web Server Configuration\n\n");
    push_doc::<String, web::BindAddress>(&mut docs, "127.0.0.1");
    push_doc::<u16, web::Port>(&mut docs, "8080");
    push_doc::<String, web::StaticDir>(&mut docs, "");

    docs
}

fn push_doc<T, V: EnvVar<T>>(docs: &mut String, default: &str) {
    docs.push_str(&format!(
        "- `{}`: {} (default: `{}`)\n",
        V::NAME,
        V::DESCRIPTION,
        default
    ));
}
