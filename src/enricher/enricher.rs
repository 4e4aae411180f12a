//! 目录增强器
//! 逐条目串行执行：链接匹配 → 预览图下载 → 语言元数据拉取与合并

use std::time::Duration;
use reqwest::Client;
use tracing::{debug, warn};

use crate::catalog::model::{Catalog, CatalogEntry};
use crate::config::GlobalConfig;
use crate::error::RscResult;
use crate::matcher::{LinkMatcher, RepoRef};
use crate::remote::{ImageDownloader, LanguageFetcher};

/// 目录增强器
/// 持有全局配置与共享HTTP客户端（超时在Client构建时统一设置）
pub struct CatalogEnricher {
    config: GlobalConfig,
    client: Client,
}

impl CatalogEnricher {
    /// 创建增强器（按配置构建带超时的HTTP客户端）
    pub fn new(config: GlobalConfig) -> RscResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()?;

        Ok(Self { config, client })
    }

    /// 对整个目录执行增强
    ///
    /// 两段式scatter-gather：只读遍历收集 (键, 更新后条目)，
    /// 遍历结束后统一写回，规避迭代中修改映射的问题。
    /// 任何条目的远程失败都在此边界吸收，不影响其余条目，也不中止运行。
    pub async fn enrich(&self, catalog: &mut Catalog) {
        let mut updates: Vec<(String, CatalogEntry)> = Vec::new();

        for (key, entry) in catalog.iter() {
            let Some(repo_ref) = LinkMatcher::capture(&entry.link) else {
                debug!("条目 {} 的链接不是GitHub仓库链接，跳过增强：{}", entry.name, entry.link);
                continue;
            };

            if let Some(updated) = self.enrich_entry(entry, &repo_ref).await {
                updates.push((key.clone(), updated));
            }
        }

        for (key, updated) in updates {
            catalog.insert(key, updated);
        }
    }

    /// 增强单个条目
    ///
    /// 预览图下载失败即放弃该条目的全部增强（返回None，条目保持原状）；
    /// 下载成功后把image字段同步为派生路径，再拉取语言列表，
    /// 语言拉取失败仅记录并保留原值。
    async fn enrich_entry(&self, entry: &CatalogEntry, repo_ref: &RepoRef) -> Option<CatalogEntry> {
        let image_path = self
            .config
            .images_dir_path
            .join(format!("{}.png", repo_ref.repo));

        if let Err(e) =
            ImageDownloader::download(&self.client, &self.config, repo_ref, &image_path).await
        {
            warn!("条目 {} 预览图下载失败：{}", entry.name, e);
            return None;
        }

        let mut updated = entry.clone();
        updated.image = image_path.to_string_lossy().into_owned();

        match LanguageFetcher::fetch(&self.client, &self.config, repo_ref).await {
            Ok(languages) => updated.languages = languages,
            Err(e) => {
                warn!("条目 {} 语言列表拉取失败，保留原值：{}", entry.name, e);
            }
        }

        debug!("条目 {} 增强完成（{}/{}）", entry.name, repo_ref.owner, repo_ref.repo);

        Some(updated)
    }
}
