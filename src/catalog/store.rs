//! 目录持久化管理
//! 仅处理目录文件的读取（JSON解析）和整体回写

use tracing::debug;

use super::model::Catalog;
use crate::error::{RscResult, RscatalogError};
use crate::config::GlobalConfig;

/// 目录持久化管理器
pub struct CatalogStore;

impl CatalogStore {
    /// 从本地文件加载目录
    /// 文件缺失、不可读或JSON非法均为致命错误，由调用方终止本次运行
    pub async fn load(config: &GlobalConfig) -> RscResult<Catalog> {
        let data_path = &config.data_file_path;
        let raw = tokio::fs::read(data_path).await.map_err(|e| {
            RscatalogError::CatalogLoadError(format!("读取目录文件 {} 失败：{}", data_path.display(), e))
        })?;

        let catalog: Catalog = serde_json::from_slice(&raw).map_err(|e| {
            RscatalogError::CatalogLoadError(format!("解析目录文件 {} 失败：{}", data_path.display(), e))
        })?;

        debug!("目录文件加载成功，条目数：{}", catalog.len());

        Ok(catalog)
    }

    /// 将目录整体回写到本地文件
    /// 输出为2空格缩进的pretty JSON，`&`等字符不做HTML转义，末尾带换行
    pub async fn save(config: &GlobalConfig, catalog: &Catalog) -> RscResult<()> {
        let data_path = &config.data_file_path;

        let mut out = serde_json::to_string_pretty(catalog).map_err(|e| {
            RscatalogError::CatalogSaveError(format!("序列化目录失败：{}", e))
        })?;
        out.push('\n');

        tokio::fs::write(data_path, out).await.map_err(|e| {
            RscatalogError::CatalogSaveError(format!("写入目录文件 {} 失败：{}", data_path.display(), e))
        })?;

        debug!("目录文件写入成功，条目数：{}", catalog.len());
        Ok(())
    }
}
