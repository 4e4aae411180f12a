//! 目录模块：负责目录数据模型定义与本地持久化
pub mod model;
pub mod store;

// 导出核心接口
pub use self::model::{Catalog, CatalogEntry};
pub use self::store::CatalogStore;
