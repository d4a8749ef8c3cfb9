use crate::error::AppResult;
use crate::models::auth::UserInfo;
use crate::models::queued_file::QueuedFile;
use crate::models::result::ProcessingResult;
use async_trait::async_trait;

/// 提取服务的调用能力
///
/// 流程层只依赖这个接口，不关心底层 HTTP 细节，测试时可以用桩实现替换
#[async_trait]
pub trait ExtractApi: Send + Sync {
    /// 上传一个批次的文件
    ///
    /// # 参数
    /// - `session_id`: 本次运行的会话ID
    /// - `batch`: 批次编号（从 1 开始）
    /// - `total_batches`: 批次总数
    /// - `files`: 本批文件
    async fn upload_batch(
        &self,
        session_id: &str,
        batch: usize,
        total_batches: usize,
        files: &[QueuedFile],
    ) -> AppResult<()>;

    /// 请求服务端提取该会话下所有已上传文件的数据
    async fn trigger_processing(&self, session_id: &str) -> AppResult<ProcessingResult>;

    /// 下载生成的结果文件
    async fn download_artifact(&self, artifact_name: &str) -> AppResult<Vec<u8>>;

    /// 校验当前会话并返回用户信息
    async fn current_user(&self) -> AppResult<UserInfo>;
}
