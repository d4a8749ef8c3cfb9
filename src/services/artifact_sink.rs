//! 结果文件落盘能力 - 业务能力层
//!
//! 下载得到的结果文件通过 `ArtifactSink` 能力接口交给宿主环境保存，
//! 编排层不依赖具体的保存方式

use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 保存结果文件的能力接口
#[async_trait]
pub trait ArtifactSink: Send + Sync {
    /// 保存一份结果文件
    ///
    /// # 参数
    /// - `bytes`: 文件内容
    /// - `suggested_name`: 建议的展示文件名（已去掉会话前缀）
    ///
    /// # 返回
    /// 返回实际保存到的路径
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> AppResult<PathBuf>;
}

/// 保存到本地目录的实现
pub struct FsArtifactSink {
    output_folder: PathBuf,
}

impl FsArtifactSink {
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: output_folder.into(),
        }
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }
}

#[async_trait]
impl ArtifactSink for FsArtifactSink {
    async fn save(&self, bytes: &[u8], suggested_name: &str) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.output_folder)
            .await
            .map_err(|e| {
                AppError::file_write_failed(self.output_folder.display().to_string(), e)
            })?;

        let target = self.output_folder.join(suggested_name);
        fs::write(&target, bytes)
            .await
            .map_err(|e| AppError::file_write_failed(target.display().to_string(), e))?;

        Ok(target)
    }
}
