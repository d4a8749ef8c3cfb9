//! 批次规划器 - 业务能力层
//!
//! 把文件队列切分为有序、连续、不重叠的定长批次，
//! 最后一批允许不足额。纯函数，作用于运行开始时的队列快照

use crate::models::queued_file::QueuedFile;

/// 默认每批上传的文件数量
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// 计算批次数量 `ceil(total / batch_size)`
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    debug_assert!(batch_size > 0);
    if total == 0 {
        0
    } else {
        (total + batch_size - 1) / batch_size
    }
}

/// 把文件队列切分为连续批次
///
/// # 参数
/// - `files`: 队列快照
/// - `batch_size`: 每批数量上限
///
/// # 返回
/// 返回按顺序排列的批次切片，拼接起来等于原队列
pub fn plan_batches(files: &[QueuedFile], batch_size: usize) -> Vec<&[QueuedFile]> {
    debug_assert!(batch_size > 0);
    files.chunks(batch_size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(n: usize) -> Vec<QueuedFile> {
        (0..n)
            .map(|i| QueuedFile::new(format!("{}.pdf", i), i as u64, format!("{}.pdf", i), None))
            .collect()
    }

    #[test]
    fn test_batch_count() {
        assert_eq!(batch_count(0, 5), 0);
        assert_eq!(batch_count(1, 5), 1);
        assert_eq!(batch_count(5, 5), 1);
        assert_eq!(batch_count(6, 5), 2);
        assert_eq!(batch_count(12, 5), 3);
    }

    #[test]
    fn test_plan_batches_12_files_of_5() {
        let queue = files(12);
        let batches = plan_batches(&queue, 5);

        let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
        assert_eq!(sizes, vec![5, 5, 2]);
    }

    #[test]
    fn test_batches_cover_queue_in_order() {
        for n in 0..=17 {
            let queue = files(n);
            let batches = plan_batches(&queue, 5);

            assert_eq!(batches.len(), batch_count(n, 5));
            assert_eq!(batches.iter().map(|b| b.len()).sum::<usize>(), n);

            // 按顺序拼接后必须等于原队列
            let rejoined: Vec<&QueuedFile> = batches.iter().flat_map(|b| b.iter()).collect();
            let original: Vec<&QueuedFile> = queue.iter().collect();
            assert_eq!(rejoined, original);
        }
    }

    #[test]
    fn test_empty_queue_yields_no_batches() {
        let queue = files(0);
        assert!(plan_batches(&queue, 5).is_empty());
    }
}
