// 设置存储 - 应用配置的加载与保存

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::warn;

use crate::models::AppSettings;

/// 设置管理器
///
/// 配置整体保存为单个 JSON 文件。文件缺失或内容损坏时回退到
/// 默认值，加载永不失败。保存时整体替换，字段合并由调用方完成。
pub struct SettingsManager {
    path: PathBuf,
    data: RwLock<AppSettings>,
}

impl SettingsManager {
    pub async fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let initial = match tokio::fs::read(&path).await {
            Ok(bytes) if !bytes.is_empty() => match serde_json::from_slice(&bytes) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("设置文件无法解析，使用默认配置: {}", e);
                    AppSettings::default()
                }
            },
            _ => AppSettings::default(),
        };

        Ok(Self {
            path,
            data: RwLock::new(initial),
        })
    }

    /// 读取当前设置
    pub async fn get(&self) -> AppSettings {
        self.data.read().await.clone()
    }

    /// 整体替换并持久化设置
    pub async fn save(&self, settings: AppSettings) -> Result<AppSettings> {
        let mut data = self.data.write().await;

        self.persist(&settings).await?;
        *data = settings.clone();

        Ok(settings)
    }

    /// 恢复默认设置并持久化
    pub async fn reset(&self) -> Result<AppSettings> {
        self.save(AppSettings::default()).await
    }

    async fn persist(&self, settings: &AppSettings) -> Result<()> {
        let json = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::models::ExportFormat;

    #[tokio::test]
    async fn test_defaults_when_never_saved() {
        let dir = tempdir().unwrap();
        let manager = SettingsManager::new(dir.path().join("settings.json"))
            .await
            .unwrap();

        let settings = manager.get().await;
        assert_eq!(settings.api_url, "http://localhost:5500");
        assert_eq!(settings.export_format, ExportFormat::Json);
        assert!(settings.auto_save);
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let manager = SettingsManager::new(path.clone()).await.unwrap();
        manager
            .save(AppSettings {
                api_url: "http://10.0.0.2:8080".to_string(),
                export_format: ExportFormat::Csv,
                auto_save: false,
            })
            .await
            .unwrap();
        drop(manager);

        let reopened = SettingsManager::new(path).await.unwrap();
        let settings = reopened.get().await;
        assert_eq!(settings.api_url, "http://10.0.0.2:8080");
        assert_eq!(settings.export_format, ExportFormat::Csv);
        assert!(!settings.auto_save);
    }

    #[tokio::test]
    async fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "###").unwrap();

        let manager = SettingsManager::new(path).await.unwrap();
        let settings = manager.get().await;
        assert_eq!(settings.api_url, "http://localhost:5500", "损坏内容应回退到默认值");
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let dir = tempdir().unwrap();
        let manager = SettingsManager::new(dir.path().join("settings.json"))
            .await
            .unwrap();

        manager
            .save(AppSettings {
                api_url: "http://example.com".to_string(),
                export_format: ExportFormat::Csv,
                auto_save: false,
            })
            .await
            .unwrap();

        let restored = manager.reset().await.unwrap();
        assert_eq!(restored.api_url, "http://localhost:5500");
        assert!(restored.auto_save);
    }
}
