use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 队列中的待上传文件
///
/// 身份键为 `(文件名, 大小)`，队列中不允许出现重复的身份键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedFile {
    /// 文件名（不含目录）
    pub name: String,
    /// 文件大小（字节）
    pub size: u64,
    /// 本地路径
    pub path: PathBuf,
    /// 根据文件名推断的媒体类型
    pub media_type: Option<String>,
}

impl QueuedFile {
    pub fn new(
        name: impl Into<String>,
        size: u64,
        path: impl Into<PathBuf>,
        media_type: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size,
            path: path.into(),
            media_type,
        }
    }

    /// 文件的身份键，用于去重
    pub fn identity_key(&self) -> (String, u64) {
        (self.name.clone(), self.size)
    }

    /// 判断文件是否被识别为 PDF
    ///
    /// 媒体类型包含 "pdf"，或文件名以 `.pdf` 结尾（不区分大小写）即可
    pub fn is_pdf(&self) -> bool {
        let mime_is_pdf = self
            .media_type
            .as_deref()
            .map(|m| m.to_ascii_lowercase().contains("pdf"))
            .unwrap_or(false);

        mime_is_pdf || self.name.to_ascii_lowercase().ends_with(".pdf")
    }
}
