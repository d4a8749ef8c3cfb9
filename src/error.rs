use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// API 调用错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 认证相关错误
    #[error("认证错误: {0}")]
    Auth(#[from] AuthError),
    /// 业务逻辑错误
    #[error("业务错误: {0}")]
    Business(#[from] BusinessError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败（包含超时）
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        source: reqwest::Error,
    },
    /// 批次上传失败（整个运行立即中止）
    #[error("第 {batch}/{total} 批上传失败: {message}")]
    UploadFailed {
        batch: usize,
        total: usize,
        message: String,
    },
    /// 提取处理阶段失败（上传全部成功之后）
    #[error("数据提取失败: {message}")]
    ProcessingFailed { message: String },
    /// 结果文件下载失败
    #[error("下载结果文件失败 ({artifact}): HTTP {status}")]
    DownloadFailed { artifact: String, status: u16 },
    /// JSON 解析失败
    #[error("JSON解析失败: {source}")]
    JsonParseFailed {
        #[source]
        source: serde_json::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件或目录不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },
}

/// 认证相关错误
#[derive(Debug, Error)]
pub enum AuthError {
    /// 登录失败
    #[error("登录失败: {message}")]
    LoginFailed { message: String },
    /// 令牌无效或会话已过期（凭据需要清除）
    #[error("会话无效或已过期，请重新登录")]
    SessionInvalid,
    /// 缺少可用的凭据
    #[error("缺少凭据: 请配置 PO_USER_TOKEN 或 PO_USERNAME/PO_PASSWORD")]
    MissingCredentials,
}

/// 业务逻辑错误
#[derive(Debug, Error)]
pub enum BusinessError {
    /// 文件队列为空
    #[error("文件队列为空，没有可处理的PDF文件")]
    EmptyFileQueue,
    /// 已有运行正在进行中
    #[error("当前已有处理流程在运行中")]
    RunInProgress,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量的值无法解析
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无效")]
    EnvVarParseFailed { var_name: String, value: String },
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed { source: err })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 是否属于上传阶段的失败
    pub fn is_upload_failure(&self) -> bool {
        matches!(self, AppError::Api(ApiError::UploadFailed { .. }))
    }

    /// 是否属于提取处理阶段的失败
    pub fn is_processing_failure(&self) -> bool {
        matches!(self, AppError::Api(ApiError::ProcessingFailed { .. }))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
