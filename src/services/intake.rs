//! 文件入队过滤器 - 业务能力层
//!
//! 对新选择的文件做两层过滤后追加到队列：
//! 1. 只接受被识别为 PDF 的文件（媒体类型或 `.pdf` 后缀）
//! 2. 按身份键 `(文件名, 大小)` 去重，包括与已入队文件的重复
//!
//! 被拒绝的候选文件静默丢弃，不算作错误（宽容策略）

use crate::models::queued_file::QueuedFile;
use std::collections::HashSet;
use tracing::debug;

/// 过滤候选文件并追加到队列
///
/// # 参数
/// - `queue`: 当前文件队列（保持原有顺序）
/// - `candidates`: 新提供的候选文件（按提供顺序追加）
///
/// # 返回
/// 返回实际入队的文件数量
pub fn admit_files(queue: &mut Vec<QueuedFile>, candidates: Vec<QueuedFile>) -> usize {
    let mut seen: HashSet<(String, u64)> = queue.iter().map(|f| f.identity_key()).collect();
    let mut admitted = 0;

    for candidate in candidates {
        if !candidate.is_pdf() {
            debug!("跳过非PDF文件: {}", candidate.name);
            continue;
        }

        let key = candidate.identity_key();
        if seen.contains(&key) {
            debug!("跳过重复文件: {} ({} 字节)", candidate.name, candidate.size);
            continue;
        }

        seen.insert(key);
        queue.push(candidate);
        admitted += 1;
    }

    admitted
}
