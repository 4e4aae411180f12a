//! 目录数据模型定义
//! 仅存储目录数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// 目录条目
/// `status` 与 `languages` 为空时不参与序列化，其余字段始终输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
}

impl CatalogEntry {
    /// 从名称快速创建（默认值）
    pub fn from_name(name: String) -> Self {
        Self {
            name,
            description: String::new(),
            image: String::new(),
            link: String::new(),
            status: String::new(),
            languages: Vec::new(),
        }
    }
}

/// 目录：唯一字符串键到条目的映射
/// BTreeMap保证键序稳定，重复运行序列化结果一致
pub type Catalog = BTreeMap<String, CatalogEntry>;
