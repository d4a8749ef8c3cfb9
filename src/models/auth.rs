use serde::{Deserialize, Serialize};

/// 当前登录用户的信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub username: String,
    pub name: String,
    pub role: String,
}

impl UserInfo {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// 认证上下文
///
/// 启动时通过登录或校验已保存令牌获得，
/// 之后作为只读凭据显式注入客户端，附加到每个请求上
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub token: String,
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_info_deserialize() {
        let user: UserInfo =
            serde_json::from_str(r#"{"username":"user","name":"Demo User","role":"user"}"#)
                .unwrap();
        assert_eq!(user.name, "Demo User");
        assert!(!user.is_admin());
    }

    #[test]
    fn test_is_admin() {
        let user: UserInfo =
            serde_json::from_str(r#"{"name":"Administrator","role":"admin"}"#).unwrap();
        assert!(user.is_admin());
        assert!(user.username.is_empty());
    }
}
