//! 提取服务 API 客户端
//!
//! 封装所有与远端提取服务相关的调用逻辑。
//! 所有需要认证的请求通过自定义头 `X-User-Token` 携带令牌
//! （服务端约定，不能改为标准的 Cookie/Bearer 方式）

use crate::clients::api::ExtractApi;
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult, AuthError};
use crate::models::auth::{AuthContext, UserInfo};
use crate::models::queued_file::QueuedFile;
use crate::models::result::ProcessingResult;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// 认证头名称（服务端约定）
pub const USER_TOKEN_HEADER: &str = "X-User-Token";

/// 登录接口的返回结构
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    #[allow(dead_code)]
    success: bool,
    token: String,
    user: UserInfo,
}

/// 提取服务客户端
pub struct ExtractClient {
    http: reqwest::Client,
    base_url: String,
    auth: AuthContext,
}

impl ExtractClient {
    /// 使用账号密码登录并创建客户端
    pub async fn login(config: &Config) -> AppResult<Self> {
        if config.username.is_empty() || config.password.is_empty() {
            return Err(AuthError::MissingCredentials.into());
        }

        let http = build_http(config.request_timeout_secs)?;
        let endpoint = format!("{}/api/auth/login", config.api_base_url);

        let response = http
            .post(&endpoint)
            .json(&json!({
                "username": config.username,
                "password": config.password,
            }))
            .send()
            .await
            .map_err(|e| AppError::request_failed("/api/auth/login", e))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message =
                server_error_message(&body).unwrap_or_else(|| "用户名或密码错误".to_string());
            return Err(AuthError::LoginFailed { message }.into());
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| AppError::request_failed("/api/auth/login", e))?;

        debug!("登录成功，用户: {}", login.user.name);

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            auth: AuthContext {
                token: login.token,
                user: login.user,
            },
        })
    }

    /// 使用已保存的令牌创建客户端
    ///
    /// 通过 `/api/auth/me` 做一次存活校验，令牌无效时返回认证错误，
    /// 调用方应清除该凭据并改用账号密码登录
    pub async fn with_token(config: &Config, token: String) -> AppResult<Self> {
        let client = Self {
            http: build_http(config.request_timeout_secs)?,
            base_url: config.api_base_url.clone(),
            auth: AuthContext {
                token,
                user: UserInfo {
                    username: String::new(),
                    name: String::new(),
                    role: String::new(),
                },
            },
        };

        let user = client.current_user().await?;

        let Self {
            http,
            base_url,
            auth,
        } = client;

        Ok(Self {
            http,
            base_url,
            auth: AuthContext {
                token: auth.token,
                user,
            },
        })
    }

    /// 当前认证上下文
    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// 退出登录（使服务端会话失效）
    pub async fn logout(&self) -> AppResult<()> {
        let endpoint = format!("{}/api/auth/logout", self.base_url);
        self.http
            .post(&endpoint)
            .header(USER_TOKEN_HEADER, &self.auth.token)
            .send()
            .await
            .map_err(|e| AppError::request_failed("/api/auth/logout", e))?;
        Ok(())
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header(USER_TOKEN_HEADER, &self.auth.token)
    }
}

#[async_trait]
impl ExtractApi for ExtractClient {
    async fn upload_batch(
        &self,
        session_id: &str,
        batch: usize,
        total_batches: usize,
        files: &[QueuedFile],
    ) -> AppResult<()> {
        let mut form = Form::new().text("session_id", session_id.to_string());

        for file in files {
            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|e| AppError::file_read_failed(file.path.display().to_string(), e))?;

            let part = Part::bytes(bytes)
                .file_name(file.name.clone())
                .mime_str("application/pdf")
                .map_err(|e| AppError::request_failed("/upload", e))?;
            form = form.part("files[]", part);
        }

        let endpoint = format!("{}/upload", self.base_url);
        let response = self
            .authed(self.http.post(&endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::request_failed("/upload", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UploadFailed {
                batch,
                total: total_batches,
                message: upload_error_message(status, &body, files.len()),
            }
            .into());
        }

        Ok(())
    }

    async fn trigger_processing(&self, session_id: &str) -> AppResult<ProcessingResult> {
        let endpoint = format!("{}/api/process", self.base_url);
        let response = self
            .authed(self.http.post(&endpoint))
            .json(&json!({ "session_id": session_id }))
            .send()
            .await
            .map_err(|e| AppError::request_failed("/api/process", e))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let message =
                server_error_message(&body).unwrap_or_else(|| "处理失败".to_string());
            return Err(ApiError::ProcessingFailed { message }.into());
        }

        response
            .json::<ProcessingResult>()
            .await
            .map_err(|e| AppError::request_failed("/api/process", e))
    }

    async fn download_artifact(&self, artifact_name: &str) -> AppResult<Vec<u8>> {
        let endpoint = format!("{}/download/{}", self.base_url, artifact_name);
        let response = self
            .authed(self.http.get(&endpoint))
            .send()
            .await
            .map_err(|e| AppError::request_failed("/download", e))?;

        if !response.status().is_success() {
            return Err(ApiError::DownloadFailed {
                artifact: artifact_name.to_string(),
                status: response.status().as_u16(),
            }
            .into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::request_failed("/download", e))?;

        Ok(bytes.to_vec())
    }

    async fn current_user(&self) -> AppResult<UserInfo> {
        let endpoint = format!("{}/api/auth/me", self.base_url);
        let response = self
            .authed(self.http.get(&endpoint))
            .send()
            .await
            .map_err(|e| AppError::request_failed("/api/auth/me", e))?;

        if !response.status().is_success() {
            return Err(AuthError::SessionInvalid.into());
        }

        response
            .json::<UserInfo>()
            .await
            .map_err(|e| AppError::request_failed("/api/auth/me", e))
    }
}

/// 创建带统一超时的 HTTP 客户端
///
/// 每个网络步骤都受同一个超时约束，避免挂起的请求让整次运行无限停滞
fn build_http(timeout_secs: u64) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| AppError::request_failed("client", e))
}

/// 从响应体中提取服务端给出的错误消息
///
/// 响应体必须是带 `error` 字段的 JSON，否则返回 None
fn server_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(str::to_string)
}

/// 生成上传失败的用户可见消息
///
/// 优先使用服务端 JSON 里的 `error` 字段；
/// 响应体不可解析时，413 单独映射为批次过大的提示；
/// 其余情况回退到通用消息
pub(crate) fn upload_error_message(status: StatusCode, body: &str, file_count: usize) -> String {
    if let Some(message) = server_error_message(body) {
        return message;
    }

    if status == StatusCode::PAYLOAD_TOO_LARGE {
        return format!(
            "批次过大（服务器限制），本批 {} 个文件，请调小 BATCH_SIZE 后重试",
            file_count
        );
    }

    format!("上传失败 (HTTP {})", status.as_u16())
}
