//! 仓库语言元数据拉取
//! 调用托管API的languages端点，返回规范化的语言名称列表

use std::collections::HashMap;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::GlobalConfig;
use crate::error::{RscResult, RscatalogError};
use crate::matcher::RepoRef;

/// 语言元数据拉取器
pub struct LanguageFetcher;

impl LanguageFetcher {
    /// 拉取指定仓库的语言列表
    ///
    /// 单次GET请求，超时由共享Client统一约束；
    /// 响应body为 语言名→字节数 的JSON对象，字节数不使用，
    /// 结果取键集合并排序（保证重复运行输出一致）。
    /// 网络失败、非200状态、JSON非法均返回错误，由调用方在条目边界吸收。
    pub async fn fetch(
        client: &Client,
        config: &GlobalConfig,
        repo_ref: &RepoRef,
    ) -> RscResult<Vec<String>> {
        let url = config
            .languages_api_url
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

        let lang_map: HashMap<String, Value> = response.json().await?;
        let mut languages: Vec<String> = lang_map.into_keys().collect();
        languages.sort();

        debug!("仓库 {}/{} 语言拉取成功：{:?}", repo_ref.owner, repo_ref.repo, languages);

        Ok(languages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::remote::test_support::{http_response, refused_endpoint, serve_once};
    use std::time::Duration;

    fn test_client() -> Client {
        Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    fn config_with_base(base: &str) -> crate::config::GlobalConfig {
        ConfigManager::custom()
            .languages_api_url(format!("{}/repos/{{owner}}/{{repo}}/languages", base))
            .build()
    }

    fn foo_bar() -> RepoRef {
        RepoRef {
            owner: "foo".to_string(),
            repo: "bar".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_sorted_language_keys() {
        // 测试场景：正常响应，取键集合并排序，字节数忽略
        let base = serve_once(http_response(
            "200 OK",
            "application/json",
            br#"{"Shell": 20, "Go": 1000}"#,
        ))
        .await;

        let languages = LanguageFetcher::fetch(&test_client(), &config_with_base(&base), &foo_bar())
            .await
            .unwrap();
        assert_eq!(languages, vec!["Go".to_string(), "Shell".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_non_200_is_error() {
        // 测试场景：404响应应返回RemoteStatusError
        let base = serve_once(http_response("404 Not Found", "application/json", b"{}")).await;

        let result =
            LanguageFetcher::fetch(&test_client(), &config_with_base(&base), &foo_bar()).await;
        assert!(matches!(result, Err(RscatalogError::RemoteStatusError(_))));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body_is_error() {
        // 测试场景：body不是JSON对象，应返回错误
        let base = serve_once(http_response("200 OK", "application/json", b"not json")).await;

        let result =
            LanguageFetcher::fetch(&test_client(), &config_with_base(&base), &foo_bar()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_connection_failure_is_error() {
        // 测试场景：连接被拒绝，应返回HttpError
        let base = refused_endpoint().await;

        let result =
            LanguageFetcher::fetch(&test_client(), &config_with_base(&base), &foo_bar()).await;
        assert!(matches!(result, Err(RscatalogError::HttpError(_))));
    }
}
