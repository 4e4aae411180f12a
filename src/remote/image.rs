//! 仓库预览图下载
//! 拉取open graph预览图并以临时文件+原子改名方式落盘

use std::io::Write;
use std::path::Path;
use reqwest::Client;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config::GlobalConfig;
use crate::error::{RscResult, RscatalogError};
use crate::matcher::RepoRef;

/// 预览图下载器
pub struct ImageDownloader;

impl ImageDownloader {
    /// 下载预览图并原子替换目标路径上的旧文件
    ///
    /// 流程：GET → 状态校验 → 读全量body → 创建目标目录 →
    /// 同目录临时文件写入 → 原子rename到dest。
    /// rename之前任何一步失败，dest保持原状（或继续缺失），
    /// 临时文件清理失败仅记录日志，不改变上报的失败原因。
    pub async fn download(
        client: &Client,
        config: &GlobalConfig,
        repo_ref: &RepoRef,
        dest: &Path,
    ) -> RscResult<()> {
        let url = config
            .image_preview_url
            .replace("{owner}", &repo_ref.owner)
            .replace("{repo}", &repo_ref.repo);

        let response = client
            .get(&url)
            .header("User-Agent", "Rscatalog/0.1.0")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RscatalogError::RemoteStatusError(format!(
                "URL {} 返回状态码 {}",
                url,
                response.status()
            )));
        }

        // 截断传输在这里暴露为错误，此时尚未触碰目标路径
        let bytes = response.bytes().await?;

        let parent = dest.parent().unwrap_or_else(|| Path::new("."));
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            RscatalogError::ImageSaveError(format!("创建图片目录 {} 失败：{}", parent.display(), e))
        })?;

        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
            RscatalogError::ImageSaveError(format!("创建临时图片文件失败：{}", e))
        })?;

        if let Err(e) = temp_file.write_all(&bytes) {
            let cause = RscatalogError::ImageSaveError(format!("写入临时图片文件失败：{}", e));
            if let Err(close_err) = temp_file.close() {
                warn!("清理临时图片文件失败：{}", close_err);
            }
            return Err(cause);
        }

        if let Err(persist_err) = temp_file.persist(dest) {
            let cause = RscatalogError::ImageSaveError(format!(
                "替换目标图片 {} 失败：{}",
                dest.display(),
                persist_err.error
            ));
            if let Err(close_err) = persist_err.file.close() {
                warn!("清理临时图片文件失败：{}", close_err);
            }
            return Err(cause);
        }

        debug!("仓库 {}/{} 预览图已写入 {}", repo_ref.owner, repo_ref.repo, dest.display());

        Ok(())
    }
}
