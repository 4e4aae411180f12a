//! rscatalog 可执行入口
//! 固定流程：加载目录 → 增强 → 回写目录 → 更新README时间戳
//! 目录与README的读写失败为致命错误，进程以非零码退出

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rscatalog::{CatalogEnricher, CatalogStore, ConfigManager, ReadmeStamper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ConfigManager::get_default();

    let mut catalog = CatalogStore::load(&config).await.context("目录文件加载失败")?;
    info!("目录加载完成，共 {} 个条目", catalog.len());

    let enricher = CatalogEnricher::new(config.clone()).context("HTTP客户端初始化失败")?;
    enricher.enrich(&mut catalog).await;

    CatalogStore::save(&config, &catalog).await.context("目录文件写入失败")?;
    info!("目录回写完成");

    // 时间戳更新只在目录成功持久化之后执行
    ReadmeStamper::update(&config).await.context("README时间戳更新失败")?;

    Ok(())
}
