use crate::models::queued_file::QueuedFile;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

/// 从文件夹中扫描所有候选文件
///
/// 只收集普通文件，不递归子目录；是否为 PDF 由入队过滤器判断。
/// 为保证批次划分可复现，按文件名排序
pub async fn load_candidate_files(folder_path: &str) -> Result<Vec<QueuedFile>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut candidates = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();

        let metadata = match entry.metadata().await {
            Ok(m) => m,
            Err(e) => {
                tracing::warn!("读取文件信息失败 {}: {}", path.display(), e);
                continue;
            }
        };
        if !metadata.is_file() {
            continue;
        }

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => {
                tracing::warn!("跳过无法识别文件名的条目: {}", path.display());
                continue;
            }
        };

        let media_type = mime_guess::from_path(&path)
            .first()
            .map(|m| m.essence_str().to_string());

        candidates.push(QueuedFile::new(name, metadata.len(), path, media_type));
    }

    candidates.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::info!("📁 在 {} 中找到 {} 个候选文件", folder_path, candidates.len());

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_candidate_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.pdf"), b"%PDF-1.4").unwrap();
        std::fs::write(dir.path().join("a.pdf"), b"%PDF-1.4 longer").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hi").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let files = load_candidate_files(dir.path().to_str().unwrap())
            .await
            .unwrap();

        // 子目录被忽略，文件按名字排序
        assert_eq!(files.len(), 3);
        assert_eq!(files[0].name, "a.pdf");
        assert_eq!(files[1].name, "b.pdf");
        assert_eq!(files[2].name, "notes.txt");
        assert_eq!(files[1].size, 8);
        assert_eq!(files[0].media_type.as_deref(), Some("application/pdf"));
    }

    #[tokio::test]
    async fn test_missing_folder_is_error() {
        let result = load_candidate_files("/no/such/folder").await;
        assert!(result.is_err());
    }
}
