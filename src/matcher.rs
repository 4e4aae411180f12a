//! GitHub链接匹配工具
//! 从自由格式的link字段中提取owner/repo二元组

use once_cell::sync::Lazy;
use regex::Regex;

/// GitHub仓库链接匹配正则（进程内编译一次）
/// 字符类取宽松策略：owner/repo允许字母数字、点、下划线、连字符，
/// 多余路径段、查询串、尾部斜杠在两组捕获之后自然截断
static GITHUB_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://github\.com/([A-Za-z0-9._-]+)/([A-Za-z0-9._-]+)")
        .expect("内置GitHub链接正则必须可编译")
});

/// 仓库引用（owner/repo二元组）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

/// 链接匹配工具类
/// 纯无状态匹配：任何输入都不产生错误，不匹配即返回None
pub struct LinkMatcher;

impl LinkMatcher {
    /// 从link字符串中捕获仓库引用
    ///
    /// # 返回值
    /// - `Some(RepoRef)`: 链接符合 `https://github.com/<owner>/<repo>` 形态
    /// - `None`: 空串、非URL、非GitHub链接或路径段不足两个
    pub fn capture(link: &str) -> Option<RepoRef> {
        let caps = GITHUB_LINK_RE.captures(link)?;
        Some(RepoRef {
            owner: caps[1].to_string(),
            repo: caps[2].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_basic_link() {
        // 测试场景：标准GitHub链接，应提取owner/repo
        let repo_ref = LinkMatcher::capture("https://github.com/foo/bar").unwrap();
        assert_eq!(repo_ref.owner, "foo");
        assert_eq!(repo_ref.repo, "bar");
    }

    #[test]
    fn test_capture_trailing_slash_and_query() {
        // 测试场景：尾部斜杠与查询串不影响两组捕获
        let repo_ref = LinkMatcher::capture("https://github.com/foo/bar/").unwrap();
        assert_eq!(repo_ref.repo, "bar");

        let repo_ref = LinkMatcher::capture("https://github.com/foo/bar?tab=readme").unwrap();
        assert_eq!(repo_ref.repo, "bar");
    }

    #[test]
    fn test_capture_extra_path_segments() {
        // 测试场景：多余路径段只影响捕获之后的部分
        let repo_ref = LinkMatcher::capture("https://github.com/foo/bar/tree/main").unwrap();
        assert_eq!(repo_ref.owner, "foo");
        assert_eq!(repo_ref.repo, "bar");
    }

    #[test]
    fn test_capture_dotted_and_underscored_names() {
        // 测试场景：宽松字符类允许点与下划线
        let repo_ref = LinkMatcher::capture("https://github.com/my_org/repo.name-x").unwrap();
        assert_eq!(repo_ref.owner, "my_org");
        assert_eq!(repo_ref.repo, "repo.name-x");
    }

    #[test]
    fn test_capture_non_matching_inputs() {
        // 测试场景：空串、非URL、非GitHub、路径段不足，均返回None
        assert_eq!(LinkMatcher::capture(""), None);
        assert_eq!(LinkMatcher::capture("not a url"), None);
        assert_eq!(LinkMatcher::capture("https://gitlab.com/foo/bar"), None);
        assert_eq!(LinkMatcher::capture("https://github.com/foo"), None);
    }
}
