//! 会话ID生成
//!
//! 生成在应用生命周期内以极高概率不重复的不透明令牌：
//! 时间分量（毫秒时间戳）保证跨运行递增，
//! 随机分量（64位）保证同一毫秒内的多次调用也不冲突。
//! 无副作用，不依赖外部协调，也不持久化计数器

/// 生成新的会话ID
///
/// 形如 `m3k1x9a7q1b2c3d4e5`：毫秒时间戳和随机数各自的 base36 编码拼接
pub fn generate_session_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis().max(0) as u64;
    let entropy: u64 = rand::random();
    format!("{}{}", to_base36(millis), to_base36(entropy))
}

/// 把整数编码为 base36 字符串（小写）
fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = String::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    buf.chars().rev().collect()
}
