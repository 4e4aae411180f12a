//! rscatalog - 基于GitHub API的项目目录增强工具
//! 读取本地JSON目录 → 逐条目拉取仓库语言与预览图 → 原子回写 → 更新README时间戳

// 导出全局错误类型
pub use self::error::{RscatalogError, RscResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出目录模块核心接口
pub use self::catalog::{Catalog, CatalogEntry, CatalogStore};

// 导出链接匹配核心接口
pub use self::matcher::{LinkMatcher, RepoRef};

// 导出远程模块核心接口
pub use self::remote::{LanguageFetcher, ImageDownloader};

// 导出增强模块核心接口
pub use self::enricher::CatalogEnricher;

// 导出README时间戳更新接口
pub use self::stamper::{ReadmeStamper, TIMESTAMP_FORMAT};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod catalog;
pub mod matcher;
pub mod remote;
pub mod enricher;
pub mod stamper;
