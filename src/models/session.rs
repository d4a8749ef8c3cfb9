use crate::utils::session::generate_session_id;
use chrono::{DateTime, Local};

/// 一次提取运行的会话
///
/// 会话ID关联同一次运行的所有上传和处理请求，
/// 每次开始处理都会生成新的会话，失败重试不复用
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    created_at: DateTime<Local>,
}

impl Session {
    /// 创建新会话（生成新的会话ID）
    pub fn new() -> Self {
        Self {
            id: generate_session_id(),
            created_at: Local::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
