//! 流程层（Workflow Layer）
//!
//! 定义"一次提取运行"的完整处理流程：
//!
//! ```text
//! ExtractFlow (上传 → 提取 → 规整)
//!     ↓
//! services (能力层：批次规划 / 进度聚合)
//!     ↓
//! clients (调用能力：ExtractApi)
//! ```
//!
//! `RunCtx` 封装单次运行的上下文（队列快照 + 新会话），
//! `ExtractFlow` 负责编排并独占持有运行状态和进度

pub mod extract_flow;
pub mod run_ctx;

pub use extract_flow::ExtractFlow;
pub use run_ctx::RunCtx;
