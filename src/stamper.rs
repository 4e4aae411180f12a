//! README时间戳更新工具
//! 重写文档中唯一的 "Last Updated: <时间戳>" 行，不存在则追加

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use tracing::{info, warn};

use crate::config::GlobalConfig;
use crate::error::{RscResult, RscatalogError};

/// 时间戳行定位正则（进程内编译一次）
static LAST_UPDATED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^Last Updated: .*$").expect("内置时间戳正则必须可编译"));

/// 时间戳渲染格式（UnixDate形态，可被上方正则回读）
/// 例：Last Updated: Sun Jan 19 01:50:38 +0700 2025
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %z %Y";

/// README时间戳更新器
pub struct ReadmeStamper;

impl ReadmeStamper {
    /// 在文档内容中写入时间戳行（纯函数，便于固定时钟测试）
    ///
    /// 已存在 "Last Updated:" 行则整行替换，否则在末尾追加一行
    pub fn stamp(content: &str, now: &DateTime<Tz>) -> String {
        let line = format!("Last Updated: {}", now.format(TIMESTAMP_FORMAT));

        if LAST_UPDATED_RE.is_match(content) {
            LAST_UPDATED_RE
                .replace_all(content, NoExpand(line.as_str()))
                .into_owned()
        } else {
            warn!("文档中未找到 'Last Updated' 时间戳行，追加一行");
            format!("{}\n{}\n", content.trim_end_matches('\n'), line)
        }
    }

    /// 以当前时间更新配置指定的README文件
    /// 读、写失败都是本步骤的致命错误，与目录持久化错误区分上报
    pub async fn update(config: &GlobalConfig) -> RscResult<()> {
        let tz: Tz = config.timezone.parse().map_err(|e| {
            RscatalogError::TimezoneError(format!("无效时区 {}：{}", config.timezone, e))
        })?;
        let now = Utc::now().with_timezone(&tz);

        let readme_path = &config.readme_path;
        let readme = tokio::fs::read_to_string(readme_path).await.map_err(|e| {
            RscatalogError::ReadmeUpdateError(format!("读取 {} 失败：{}", readme_path.display(), e))
        })?;

        let updated = Self::stamp(&readme, &now);

        tokio::fs::write(readme_path, updated).await.map_err(|e| {
            RscatalogError::ReadmeUpdateError(format!("写入 {} 失败：{}", readme_path.display(), e))
        })?;

        info!("README时间戳更新成功：{}", readme_path.display());
        Ok(())
    }
}
