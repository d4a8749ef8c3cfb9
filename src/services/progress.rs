//! 进度聚合器 - 业务能力层
//!
//! 把上传/提取两个阶段的完成情况映射为单一的 0-100 进度值和阶段文案。
//! 权重固定：上传阶段占 [0, 60]，按完成批次线性推进；
//! 进入提取阶段跳到 75；提取成功置为 100。
//!
//! 一次运行内进度只增不减，只有失败或开始新运行才会重置。
//! 错误信息走独立的错误通道，不通过阶段文案传递

/// 上传阶段在进度条上占据的上限
pub const UPLOAD_PHASE_CEILING: u8 = 60;
/// 进入提取阶段时显示的固定进度
pub const PROCESSING_PHASE_PERCENT: u8 = 75;
/// 运行成功时的进度
pub const COMPLETE_PERCENT: u8 = 100;

/// 进度状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressTracker {
    percent: u8,
    phase_label: String,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn phase_label(&self) -> &str {
        &self.phase_label
    }

    /// 开始新的运行（显式重置）
    pub fn begin(&mut self) {
        self.percent = 0;
        self.phase_label = "准备上传...".to_string();
    }

    /// 某一批开始上传（只更新文案，进度不变）
    pub fn batch_started(&mut self, batch: usize, total: usize) {
        self.phase_label = format!("正在上传第 {}/{} 批...", batch, total);
    }

    /// 某一批上传完成，按比例推进到上传阶段的对应位置
    pub fn batch_uploaded(&mut self, completed: usize, total: usize) {
        debug_assert!(total > 0 && completed <= total);
        let percent =
            ((completed as f64 / total as f64) * UPLOAD_PHASE_CEILING as f64).round() as u8;
        self.advance(percent, format!("已上传 {}/{} 批", completed, total));
    }

    /// 进入提取阶段
    pub fn processing(&mut self) {
        self.advance(
            PROCESSING_PHASE_PERCENT,
            "正在提取数据并生成表格...".to_string(),
        );
    }

    /// 运行成功
    pub fn complete(&mut self) {
        self.advance(COMPLETE_PERCENT, "完成!".to_string());
    }

    /// 失败或重置时归零，清空文案
    pub fn reset(&mut self) {
        self.percent = 0;
        self.phase_label.clear();
    }

    /// 单调推进：进度值只允许上升
    fn advance(&mut self, percent: u8, label: String) {
        if percent >= self.percent {
            self.percent = percent;
            self.phase_label = label;
        }
    }
}
