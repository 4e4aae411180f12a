//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;

#[derive(Error, Debug)]
pub enum RscatalogError {
    // 目录相关错误
    #[error("目录加载失败：{0}")]
    CatalogLoadError(String),
    #[error("目录写入失败：{0}")]
    CatalogSaveError(String),

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),
    #[error("远程接口返回异常状态：{0}")]
    RemoteStatusError(String),

    // 资源持久化错误
    #[error("预览图保存失败：{0}")]
    ImageSaveError(String),

    // 文档相关错误
    #[error("README 更新失败：{0}")]
    ReadmeUpdateError(String),
    #[error("时区解析失败：{0}")]
    TimezoneError(String),

    // 基础错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
}

// 全局Result类型
pub type RscResult<T> = Result<T, RscatalogError>;
