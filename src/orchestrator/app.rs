//! 应用编排器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责应用生命周期和一次提取运行的调度。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：写日志文件头、引导认证（令牌校验或账号密码登录）
//! 2. **文件入队**：扫描PDF目录，经入队过滤器去重过滤
//! 3. **运行调度**：把队列交给 ExtractFlow 执行一次完整运行
//! 4. **结果展示**：输出提取统计和每个文件的失败原因
//! 5. **结果下载**：有可下载文件时拉取并通过 ArtifactSink 落盘
//!
//! ## 设计特点
//!
//! - **凭据显式注入**：AuthContext 在初始化时确定，之后只读
//! - **单运行**：同一时刻只有一次运行，入口处空队列直接返回
//! - **向下委托**：流程细节全部委托给 workflow::ExtractFlow

use crate::clients::api::ExtractApi;
use crate::clients::extract_client::ExtractClient;
use crate::config::Config;
use crate::models::loaders::load_candidate_files;
use crate::models::result::{display_artifact_name, ProcessingSummary};
use crate::services::artifact_sink::{ArtifactSink, FsArtifactSink};
use crate::services::intake;
use crate::utils::logging;
use crate::workflow::extract_flow::ExtractFlow;
use anyhow::Result;
use tracing::{debug, error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    client: ExtractClient,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;

        logging::log_startup(&config);

        // 引导认证
        let client = bootstrap_auth(&config).await?;
        let user = &client.auth().user;
        info!("👤 已登录: {} (角色: {})", user.name, user.role);

        Ok(Self { config, client })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 扫描并过滤待上传文件
        let candidates = load_candidate_files(&self.config.pdf_folder).await?;

        let mut queue = Vec::new();
        let admitted = intake::admit_files(&mut queue, candidates);

        if queue.is_empty() {
            warn!("⚠️ 没有找到待处理的PDF文件，程序结束");
            self.shutdown().await;
            return Ok(());
        }

        logging::log_files_admitted(admitted, queue.len(), self.config.batch_size);

        // 执行一次完整的提取运行
        let mut flow = ExtractFlow::new(&self.client);
        let summary = match flow.run(&queue, self.config.batch_size).await {
            Ok(summary) => summary,
            Err(e) => {
                error!("❌ 本次处理失败: {}", e);
                self.shutdown().await;
                return Err(e.into());
            }
        };

        print_summary(&summary);

        // 下载结果文件
        if let Some(artifact) = &summary.artifact_name {
            self.download_artifact(artifact).await?;
        } else {
            info!("ℹ️ 本次处理没有生成可下载的结果文件");
        }

        self.shutdown().await;
        Ok(())
    }

    /// 下载结果文件并落盘
    async fn download_artifact(&self, artifact: &str) -> Result<()> {
        info!("⬇️ 正在下载结果文件: {}", artifact);

        let bytes = self.client.download_artifact(artifact).await?;

        let sink = FsArtifactSink::new(&self.config.output_folder);
        let path = sink.save(&bytes, display_artifact_name(artifact)).await?;

        info!("💾 结果文件已保存至: {}", path.display());
        Ok(())
    }

    /// 退出前尽力使服务端会话失效，失败不影响退出
    async fn shutdown(&self) {
        if let Err(e) = self.client.logout().await {
            debug!("退出登录失败（忽略）: {}", e);
        }
    }
}

/// 引导认证：优先校验已保存的令牌，失效时清除并改用账号密码登录
async fn bootstrap_auth(config: &Config) -> Result<ExtractClient> {
    if !config.user_token.is_empty() {
        match ExtractClient::with_token(config, config.user_token.clone()).await {
            Ok(client) => {
                info!("✓ 已保存的令牌校验通过");
                return Ok(client);
            }
            Err(e) => {
                warn!("⚠️ 已保存的令牌已失效，改用账号密码登录: {}", e);
            }
        }
    }

    Ok(ExtractClient::login(config).await?)
}

// ========== 日志辅助函数 ==========

fn print_summary(summary: &ProcessingSummary) {
    info!("\n{}", "=".repeat(60));
    info!("📊 提取结果统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", summary.successful_count, summary.total_files);
    info!("❌ 失败: {}", summary.error_count());

    for record in &summary.records {
        info!(
            "  ✓ {} | PO: {} | 供应商: {}",
            record.filename,
            record.po_no,
            logging::truncate_text(&record.vendor, 30)
        );
    }
    for failure in &summary.errors {
        info!(
            "  ✗ {} | {}",
            failure.filename,
            logging::truncate_text(&failure.message, 60)
        );
    }
    info!("{}", "=".repeat(60));
}
