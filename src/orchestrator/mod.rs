//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责应用生命周期和运行调度，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (生命周期 + 认证 + 队列准备 + 结果展示)
//!     ↓
//! workflow::ExtractFlow (一次运行：上传 → 提取 → 规整)
//!     ↓
//! services (能力层：入队过滤 / 批次规划 / 进度聚合 / 落盘)
//!     ↓
//! clients (ExtractApi / ExtractClient)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：App 管生命周期，ExtractFlow 管单次运行
//! 2. **资源隔离**：只有编排层持有 ExtractClient
//! 3. **无业务逻辑**：只做调度和展示，不做具体业务判断

pub mod app;

pub use app::App;
