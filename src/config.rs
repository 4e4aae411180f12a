//! 全局配置管理,存储所有可配置项

use std::path::PathBuf;

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 目录数据文件路径
    pub data_file_path: PathBuf,
    // 预览图存放目录
    pub images_dir_path: PathBuf,
    // 时间戳所在文档路径
    pub readme_path: PathBuf,
    // 语言接口URL模板（{owner}/{repo}占位符）
    pub languages_api_url: String,
    // 预览图接口URL模板（{owner}/{repo}占位符）
    pub image_preview_url: String,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 时间戳时区（IANA名称）
    pub timezone: String,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            data_file_path: PathBuf::from("data.json"),
            images_dir_path: PathBuf::from("images"),
            readme_path: PathBuf::from("README.md"),
            languages_api_url: "https://api.github.com/repos/{owner}/{repo}/languages".to_string(),
            image_preview_url: "https://opengraph.githubassets.com/main/{owner}/{repo}".to_string(),
            http_timeout: 10,
            timezone: "Asia/Bangkok".to_string(),
            verbose: false,
        }
    }
}

/// 配置管理器（单例）
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn data_file_path(mut self, path: PathBuf) -> Self {
        self.config.data_file_path = path;
        self
    }

    pub fn images_dir_path(mut self, path: PathBuf) -> Self {
        self.config.images_dir_path = path;
        self
    }

    pub fn readme_path(mut self, path: PathBuf) -> Self {
        self.config.readme_path = path;
        self
    }

    pub fn languages_api_url(mut self, url: String) -> Self {
        self.config.languages_api_url = url;
        self
    }

    pub fn image_preview_url(mut self, url: String) -> Self {
        self.config.image_preview_url = url;
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn timezone(mut self, timezone: String) -> Self {
        self.config.timezone = timezone;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
