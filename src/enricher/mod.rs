//! 增强模块：目录条目增强核心逻辑
pub mod enricher;

// 导出核心接口
pub use self::enricher::CatalogEnricher;
