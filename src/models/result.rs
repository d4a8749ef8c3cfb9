//! 处理结果模型
//!
//! `ProcessingResult` 是服务端返回的原始结构，
//! `ProcessingSummary` 是规整后交给展示层的结果视图

use serde::{Deserialize, Serialize};
use tracing::warn;

/// 单个文件提取出的结构化数据
///
/// 字段内容由服务端决定，本程序只负责透传，不做解释
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub po_no: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub total_pcs: String,
    #[serde(default)]
    pub basic_price: String,
    #[serde(default)]
    pub total_value: String,
}

/// 单个文件的提取失败信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionError {
    pub filename: String,
    #[serde(rename = "error")]
    pub message: String,
}

/// 服务端处理接口返回的原始结果
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcessingResult {
    #[serde(default)]
    pub session_id: Option<String>,
    pub total_files: usize,
    pub successful: usize,
    #[serde(default)]
    pub processed: Vec<ExtractedRecord>,
    #[serde(default)]
    pub errors: Vec<ExtractionError>,
    #[serde(default)]
    pub download_ready: bool,
    #[serde(default)]
    pub excel_file: Option<String>,
}

/// 规整后的处理结果
///
/// 一次运行成功后生成且不再修改，直到下一次运行重置
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSummary {
    pub total_files: usize,
    pub successful_count: usize,
    pub records: Vec<ExtractedRecord>,
    pub errors: Vec<ExtractionError>,
    /// 可下载的结果文件名（服务端命名，带会话前缀）
    ///
    /// 仅当 `download_ready` 为真且服务端给出了文件名时存在
    pub artifact_name: Option<String>,
}

impl ProcessingSummary {
    /// 规整服务端返回的原始结果
    pub fn reconcile(result: ProcessingResult) -> Self {
        // successful + errors == total_files 由服务端保证，
        // 不一致时只告警不中止，数据仍然可以展示
        if result.successful + result.errors.len() != result.total_files {
            warn!(
                "⚠️ 服务端结果计数不一致: 成功 {} + 失败 {} != 总数 {}",
                result.successful,
                result.errors.len(),
                result.total_files
            );
        }

        let artifact_name = if result.download_ready {
            result.excel_file.filter(|name| !name.is_empty())
        } else {
            None
        };

        Self {
            total_files: result.total_files,
            successful_count: result.successful,
            records: result.processed,
            errors: result.errors,
            artifact_name,
        }
    }

    /// 提取失败的文件数量
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// 是否有可下载的结果文件
    pub fn download_available(&self) -> bool {
        self.artifact_name.is_some()
    }

    /// 计数是否满足 成功 + 失败 == 总数
    pub fn is_consistent(&self) -> bool {
        self.successful_count + self.errors.len() == self.total_files
    }
}

/// 去掉服务端文件名中的会话前缀，得到展示用文件名
///
/// 服务端命名形如 `{session_id}_PO_Extracted_xxx.xlsx`，
/// 去掉第一个 `_` 及之前的部分；没有分隔符时原样返回
pub fn display_artifact_name(name: &str) -> &str {
    match name.split_once('_') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ProcessingResult {
        serde_json::from_str(
            r#"{
                "total_files": 3,
                "successful": 2,
                "processed": [
                    {"filename": "a.pdf", "status": "success", "po_no": "PO-1"},
                    {"filename": "b.pdf", "status": "success", "po_no": "PO-2"}
                ],
                "errors": [{"filename": "c.pdf", "error": "unreadable"}],
                "download_ready": true,
                "excel_file": "sess123_output.csv"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_reconcile_partial_failure() {
        let summary = ProcessingSummary::reconcile(sample_result());

        assert_eq!(summary.successful_count, 2);
        assert_eq!(summary.error_count(), 1);
        assert_eq!(summary.records.len(), 2);
        assert!(summary.download_available());
        assert!(summary.is_consistent());
        assert_eq!(summary.artifact_name.as_deref(), Some("sess123_output.csv"));
    }

    #[test]
    fn test_download_gated_on_both_flags() {
        // download_ready 为假时即使有文件名也不提供下载
        let mut result = sample_result();
        result.download_ready = false;
        assert!(!ProcessingSummary::reconcile(result).download_available());

        // 反过来缺少文件名也不提供下载，且不算错误
        let mut result = sample_result();
        result.excel_file = None;
        assert!(!ProcessingSummary::reconcile(result).download_available());

        let mut result = sample_result();
        result.excel_file = Some(String::new());
        assert!(!ProcessingSummary::reconcile(result).download_available());
    }

    #[test]
    fn test_reconcile_inconsistent_counts_not_fatal() {
        let mut result = sample_result();
        result.total_files = 5;
        let summary = ProcessingSummary::reconcile(result);
        assert!(!summary.is_consistent());
        assert_eq!(summary.successful_count, 2);
    }

    #[test]
    fn test_display_artifact_name() {
        assert_eq!(
            display_artifact_name("sess123_PO_Extracted_20240101.xlsx"),
            "PO_Extracted_20240101.xlsx"
        );
        assert_eq!(display_artifact_name("sess123_output.csv"), "output.csv");
        assert_eq!(display_artifact_name("plain.xlsx"), "plain.xlsx");
        assert_eq!(display_artifact_name("trailing_"), "trailing_");
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let result: ProcessingResult =
            serde_json::from_str(r#"{"total_files": 0, "successful": 0}"#).unwrap();
        assert!(result.processed.is_empty());
        assert!(result.errors.is_empty());
        assert!(!result.download_ready);
        assert!(result.excel_file.is_none());
    }
}
