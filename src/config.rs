/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 提取服务的基础URL
    pub api_base_url: String,
    /// 登录用户名
    pub username: String,
    /// 登录密码
    pub password: String,
    /// 已保存的会话令牌（为空时使用账号密码登录）
    pub user_token: String,
    /// 待上传PDF文件所在目录
    pub pdf_folder: String,
    /// 结果文件保存目录
    pub output_folder: String,
    /// 每批上传的文件数量上限
    pub batch_size: usize,
    /// 单次网络请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            username: "user".to_string(),
            password: "user123".to_string(),
            user_token: String::new(),
            pdf_folder: "input_pdf".to_string(),
            output_folder: "outputs".to_string(),
            batch_size: 5,
            request_timeout_secs: 120,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("PO_API_BASE_URL").unwrap_or(default.api_base_url),
            username: std::env::var("PO_USERNAME").unwrap_or(default.username),
            password: std::env::var("PO_PASSWORD").unwrap_or(default.password),
            user_token: std::env::var("PO_USER_TOKEN").unwrap_or(default.user_token),
            pdf_folder: std::env::var("PDF_FOLDER").unwrap_or(default.pdf_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            batch_size: std::env::var("BATCH_SIZE").ok().and_then(|v| v.parse().ok()).filter(|&v| v > 0).unwrap_or(default.batch_size),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
