//! 提取运行流程 - 流程层
//!
//! 核心职责：定义"一次运行"的完整流程
//!
//! 流程顺序：
//! 1. 冻结队列快照、生成新会话
//! 2. 逐批顺序上传（任何一批失败立即中止整次运行）
//! 3. 触发服务端提取
//! 4. 规整结果
//!
//! 批次严格串行：第 N+1 批一定在第 N 批的响应到达之后才发出；
//! 提取请求一定在所有批次确认成功之后才发出

use crate::clients::api::ExtractApi;
use crate::error::{AppError, AppResult, BusinessError};
use crate::models::queued_file::QueuedFile;
use crate::models::result::ProcessingSummary;
use crate::models::run_state::RunState;
use crate::services::progress::ProgressTracker;
use crate::workflow::run_ctx::RunCtx;
use tracing::{error, info};

/// 提取运行流程
///
/// - 编排上传 → 提取 → 规整的完整流程
/// - 独占持有本次运行的进度和状态，失败时统一复位
/// - 不持有任何网络资源，只依赖 `ExtractApi` 能力
pub struct ExtractFlow<'a> {
    api: &'a dyn ExtractApi,
    progress: ProgressTracker,
    state: RunState,
}

impl<'a> ExtractFlow<'a> {
    pub fn new(api: &'a dyn ExtractApi) -> Self {
        Self {
            api,
            progress: ProgressTracker::new(),
            state: RunState::Idle,
        }
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// 执行一次完整的提取运行
    ///
    /// # 参数
    /// - `files`: 当前文件队列（入口处拷贝为快照）
    /// - `batch_size`: 每批文件数量上限
    ///
    /// # 返回
    /// 返回规整后的处理结果
    pub async fn run(
        &mut self,
        files: &[QueuedFile],
        batch_size: usize,
    ) -> AppResult<ProcessingSummary> {
        if !self.state.can_start() {
            return Err(BusinessError::RunInProgress.into());
        }
        if files.is_empty() {
            return Err(BusinessError::EmptyFileQueue.into());
        }

        self.progress.begin();

        let ctx = RunCtx::new(files.to_vec(), batch_size);
        let total_batches = ctx.total_batches();

        info!(
            "🚀 开始处理: {} 个文件，分 {} 批上传 (会话: {})",
            ctx.file_count(),
            total_batches,
            ctx.session_id()
        );

        // ========== 阶段 1: 逐批顺序上传 ==========
        for (index, batch) in ctx.batches().iter().enumerate() {
            let batch_no = index + 1;

            self.state = RunState::Uploading {
                batch: batch_no,
                total: total_batches,
            };
            self.progress.batch_started(batch_no, total_batches);

            info!(
                "📦 正在上传第 {}/{} 批（{} 个文件）...",
                batch_no,
                total_batches,
                batch.len()
            );

            if let Err(e) = self
                .api
                .upload_batch(ctx.session_id(), batch_no, total_batches, batch)
                .await
            {
                return Err(self.fail(e));
            }

            self.progress.batch_uploaded(batch_no, total_batches);
            info!(
                "✓ 第 {}/{} 批上传完成（进度 {}%）",
                batch_no,
                total_batches,
                self.progress.percent()
            );
        }

        // ========== 阶段 2: 触发服务端提取 ==========
        self.state = RunState::Processing;
        self.progress.processing();
        info!("⚙️ 所有批次上传完成，正在提取数据并生成表格...");

        let result = match self.api.trigger_processing(ctx.session_id()).await {
            Ok(result) => result,
            Err(e) => return Err(self.fail(e)),
        };

        // ========== 阶段 3: 规整结果 ==========
        let summary = ProcessingSummary::reconcile(result);
        self.progress.complete();
        self.state = RunState::Succeeded(summary.clone());

        info!(
            "✅ 提取完成: 成功 {}/{}，失败 {}",
            summary.successful_count,
            summary.total_files,
            summary.error_count()
        );

        Ok(summary)
    }

    /// 统一的失败处理：进度归零、记录失败状态、透传错误
    fn fail(&mut self, err: AppError) -> AppError {
        error!("❌ 运行中止: {}", err);
        self.progress.reset();
        self.state = RunState::Failed {
            message: err.to_string(),
        };
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::auth::UserInfo;
    use crate::models::result::ProcessingResult;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// 记录调用序列的桩实现
    #[derive(Default)]
    struct StubApi {
        /// 该编号的批次上传返回失败（模拟 413）
        fail_on_batch: Option<usize>,
        /// 提取请求是否失败
        fail_processing: bool,
        /// 提取成功时返回的结果
        result: Option<ProcessingResult>,
        upload_calls: Mutex<Vec<(usize, usize)>>,
        seen_sessions: Mutex<Vec<String>>,
        process_calls: AtomicUsize,
    }

    impl StubApi {
        fn uploads(&self) -> Vec<(usize, usize)> {
            self.upload_calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExtractApi for StubApi {
        async fn upload_batch(
            &self,
            session_id: &str,
            batch: usize,
            total_batches: usize,
            files: &[QueuedFile],
        ) -> AppResult<()> {
            self.upload_calls.lock().unwrap().push((batch, files.len()));
            self.seen_sessions
                .lock()
                .unwrap()
                .push(session_id.to_string());

            if self.fail_on_batch == Some(batch) {
                return Err(ApiError::UploadFailed {
                    batch,
                    total: total_batches,
                    message: crate::clients::extract_client::upload_error_message(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "",
                        files.len(),
                    ),
                }
                .into());
            }
            Ok(())
        }

        async fn trigger_processing(&self, session_id: &str) -> AppResult<ProcessingResult> {
            self.process_calls.fetch_add(1, Ordering::SeqCst);

            if self.fail_processing {
                return Err(ApiError::ProcessingFailed {
                    message: "提取服务内部错误".to_string(),
                }
                .into());
            }

            let mut result = self.result.clone().expect("桩未配置提取结果");
            result.session_id = Some(session_id.to_string());
            Ok(result)
        }

        async fn download_artifact(&self, _artifact_name: &str) -> AppResult<Vec<u8>> {
            Ok(Vec::new())
        }

        async fn current_user(&self) -> AppResult<UserInfo> {
            unimplemented!("流程测试不涉及认证")
        }
    }

    fn files(n: usize) -> Vec<QueuedFile> {
        (0..n)
            .map(|i| QueuedFile::new(format!("{}.pdf", i), 1, format!("{}.pdf", i), None))
            .collect()
    }

    fn ok_result(total: usize, successful: usize) -> ProcessingResult {
        serde_json::from_str(&format!(
            r#"{{
                "total_files": {total},
                "successful": {successful},
                "processed": [],
                "errors": [],
                "download_ready": true,
                "excel_file": "sess_PO_Extracted.xlsx"
            }}"#
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_successful_run_uploads_all_batches_in_order() {
        let api = StubApi {
            result: Some(ok_result(12, 12)),
            ..Default::default()
        };
        let mut flow = ExtractFlow::new(&api);

        let summary = flow.run(&files(12), 5).await.unwrap();

        // 3 批：5 + 5 + 2，严格按顺序
        assert_eq!(api.uploads(), vec![(1, 5), (2, 5), (3, 2)]);
        assert_eq!(api.process_calls.load(Ordering::SeqCst), 1);

        assert_eq!(flow.progress().percent(), 100);
        assert!(matches!(flow.state(), RunState::Succeeded(_)));
        assert!(summary.download_available());
    }

    #[tokio::test]
    async fn test_upload_failure_aborts_without_further_batches() {
        let api = StubApi {
            fail_on_batch: Some(2),
            result: Some(ok_result(12, 12)),
            ..Default::default()
        };
        let mut flow = ExtractFlow::new(&api);

        let err = flow.run(&files(12), 5).await.unwrap_err();

        // 第 2 批失败后不再上传第 3 批，也不触发提取
        assert_eq!(api.uploads(), vec![(1, 5), (2, 5)]);
        assert_eq!(api.process_calls.load(Ordering::SeqCst), 0);

        assert!(err.is_upload_failure());
        assert!(err.to_string().contains("批次过大"));
        assert_eq!(flow.progress().percent(), 0);
        assert!(flow.state().is_failed());
    }

    #[tokio::test]
    async fn test_processing_failure_resets_progress() {
        let api = StubApi {
            fail_processing: true,
            ..Default::default()
        };
        let mut flow = ExtractFlow::new(&api);

        let err = flow.run(&files(3), 5).await.unwrap_err();

        assert!(err.is_processing_failure());
        assert_eq!(flow.progress().percent(), 0);
        assert!(flow.state().is_failed());
    }

    #[tokio::test]
    async fn test_empty_queue_is_rejected() {
        let api = StubApi::default();
        let mut flow = ExtractFlow::new(&api);

        let err = flow.run(&[], 5).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BusinessError::EmptyFileQueue)
        ));
        assert!(api.uploads().is_empty());
    }

    #[tokio::test]
    async fn test_rerun_after_failure_mints_new_session() {
        let api = StubApi {
            result: Some(ok_result(1, 1)),
            ..Default::default()
        };
        let mut flow = ExtractFlow::new(&api);

        flow.run(&files(1), 5).await.unwrap();
        flow.run(&files(1), 5).await.unwrap();

        // 每次运行都生成新会话
        let sessions = api.seen_sessions.lock().unwrap().clone();
        assert_eq!(sessions.len(), 2);
        assert_ne!(sessions[0], sessions[1]);
    }
}
