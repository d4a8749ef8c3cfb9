use crate::models::queued_file::QueuedFile;
use crate::models::session::Session;
use crate::services::batch_planner;

/// 一次运行的上下文
///
/// 持有运行开始时的队列快照和新生成的会话，
/// 快照之后队列再怎么变化都不影响进行中的运行
#[derive(Debug, Clone)]
pub struct RunCtx {
    session: Session,
    files: Vec<QueuedFile>,
    batch_size: usize,
}

impl RunCtx {
    pub fn new(files: Vec<QueuedFile>, batch_size: usize) -> Self {
        Self {
            session: Session::new(),
            files,
            batch_size,
        }
    }

    pub fn session_id(&self) -> &str {
        self.session.id()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total_batches(&self) -> usize {
        batch_planner::batch_count(self.files.len(), self.batch_size)
    }

    /// 快照的批次划分
    pub fn batches(&self) -> Vec<&[QueuedFile]> {
        batch_planner::plan_batches(&self.files, self.batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(n: usize) -> Vec<QueuedFile> {
        (0..n)
            .map(|i| QueuedFile::new(format!("{}.pdf", i), 1, format!("{}.pdf", i), None))
            .collect()
    }

    #[test]
    fn test_ctx_freezes_snapshot() {
        let ctx = RunCtx::new(files(12), 5);
        assert_eq!(ctx.file_count(), 12);
        assert_eq!(ctx.total_batches(), 3);
        assert_eq!(ctx.batches().len(), 3);
    }

    #[test]
    fn test_each_run_mints_new_session() {
        let a = RunCtx::new(files(1), 5);
        let b = RunCtx::new(files(1), 5);
        assert_ne!(a.session_id(), b.session_id());
    }
}
