use crate::models::result::ProcessingSummary;

/// 一次提取运行的状态机
///
/// 用显式的枚举代替一组独立的布尔/可选字段，
/// 让"结果和错误同时存在"这类非法组合无法表达
#[derive(Debug, Clone, PartialEq)]
pub enum RunState {
    /// 空闲，尚未开始
    Idle,
    /// 正在按顺序上传批次
    Uploading { batch: usize, total: usize },
    /// 所有批次已上传，等待服务端提取
    Processing,
    /// 运行成功，持有规整后的结果
    Succeeded(ProcessingSummary),
    /// 运行失败，持有面向用户的错误消息
    Failed { message: String },
}

impl RunState {
    /// 是否允许从当前状态开始新的运行
    ///
    /// 只有空闲/已完成/已失败三种状态可以开始新运行
    pub fn can_start(&self) -> bool {
        !self.is_active()
    }

    /// 运行是否正在进行中
    pub fn is_active(&self) -> bool {
        matches!(self, RunState::Uploading { .. } | RunState::Processing)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RunState::Failed { .. })
    }

    /// 成功结果（仅 Succeeded 状态存在）
    pub fn summary(&self) -> Option<&ProcessingSummary> {
        match self {
            RunState::Succeeded(summary) => Some(summary),
            _ => None,
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        RunState::Idle
    }
}
