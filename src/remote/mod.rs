//! 远程模块：托管API元数据拉取与预览图下载
pub mod languages;
pub mod image;

// 导出核心接口
pub use self::languages::LanguageFetcher;
pub use self::image::ImageDownloader;
