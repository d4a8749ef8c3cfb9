//! # PO Batch Extract
//!
//! 一个把本地PDF采购订单批量提交给远端提取服务、
//! 并取回结构化结果表格的 Rust 客户端
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 调用能力层（Clients）
//! - `clients/` - 持有 HTTP 连接，只暴露调用能力
//! - `ExtractApi` - 调用能力接口（上传/提取/下载/认证）
//! - `ExtractClient` - reqwest 实现，统一携带 X-User-Token
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心整体流程
//! - `intake` - 入队过滤能力（PDF识别 + 去重）
//! - `batch_planner` - 批次规划能力（纯函数）
//! - `ProgressTracker` - 进度聚合能力（单调 0-100）
//! - `ArtifactSink` - 结果文件落盘能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次运行"的完整处理流程
//! - `RunCtx` - 上下文封装（队列快照 + 新会话）
//! - `ExtractFlow` - 流程编排（上传 → 提取 → 规整）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 应用生命周期、认证引导、结果展示
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ExtractApi, ExtractClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{
    AuthContext, ProcessingResult, ProcessingSummary, QueuedFile, RunState, Session, UserInfo,
};
pub use orchestrator::App;
pub use services::ProgressTracker;
pub use utils::generate_session_id;
pub use workflow::{ExtractFlow, RunCtx};
