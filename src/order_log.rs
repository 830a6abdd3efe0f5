use std::{path::PathBuf, sync::Arc};

use chrono::Local;
use serde_json::Value;
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};

use crate::config::LogConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogCategory {
    Orders,
    Spam,
    Errors,
}

impl LogCategory {
    pub fn file_name(&self) -> &'static str {
        match self {
            LogCategory::Orders => "orders.log",
            LogCategory::Spam => "spam.log",
            LogCategory::Errors => "errors.log",
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderLog {
    directory: Option<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl OrderLog {
    pub fn new(config: &LogConfig) -> Self {
        Self {
            directory: config.enabled.then(|| config.directory.clone()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn disabled() -> Self {
        Self {
            directory: None,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.directory.is_some()
    }

    pub async fn write(
        &self,
        category: LogCategory,
        client_ip: &str,
        message: &str,
        data: Option<&Value>,
    ) -> std::io::Result<()> {
        let Some(directory) = &self.directory else {
            return Ok(());
        };

        let line = format_line(
            &Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            client_ip,
            message,
            data,
        );

        let _guard = self.write_lock.lock().await;
        fs::create_dir_all(directory).await?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(directory.join(category.file_name()))
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }

    /// Like [`OrderLog::write`], but a failure only produces a warning.
    pub async fn record(
        &self,
        category: LogCategory,
        client_ip: &str,
        message: &str,
        data: Option<&Value>,
    ) {
        if let Err(err) = self.write(category, client_ip, message, data).await {
            tracing::warn!(error = %err, file = category.file_name(), "order log write failed");
        }
    }
}

pub fn format_line(timestamp: &str, client_ip: &str, message: &str, data: Option<&Value>) -> String {
    let mut line = format!("[{timestamp}] [IP: {client_ip}] {message}");
    if let Some(data) = data {
        line.push_str(" | Data: ");
        line.push_str(&data.to_string());
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn line_with_data() {
        let line = format_line(
            "2025-09-16 14:05:00",
            "10.0.0.1",
            "Order processed successfully - HER20250916-ABC123",
            Some(&json!({ "items_count": 2 })),
        );
        assert_eq!(
            line,
            "[2025-09-16 14:05:00] [IP: 10.0.0.1] Order processed successfully - HER20250916-ABC123 | Data: {\"items_count\":2}\n"
        );
    }

    #[test]
    fn line_without_data() {
        let line = format_line("2025-09-16 14:05:00", "unknown", "Process Order starting", None);
        assert_eq!(line, "[2025-09-16 14:05:00] [IP: unknown] Process Order starting\n");
    }

    #[tokio::test]
    async fn appends_to_category_file() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(&LogConfig {
            enabled: true,
            directory: dir.path().join("nested"),
        });

        log.write(LogCategory::Spam, "1.2.3.4", "first", None).await.unwrap();
        log.write(LogCategory::Spam, "1.2.3.4", "second", Some(&json!({"website": "x"})))
            .await
            .unwrap();

        let contents = std::fs::read_to_string(dir.path().join("nested/spam.log")).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("[IP: 1.2.3.4] first"));
        assert!(lines[1].ends_with("second | Data: {\"website\":\"x\"}"));
    }

    #[tokio::test]
    async fn concurrent_writes_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(&LogConfig {
            enabled: true,
            directory: dir.path().to_path_buf(),
        });

        let mut handles = Vec::new();
        for n in 0..32 {
            let log = log.clone();
            handles.push(tokio::spawn(async move {
                let message = format!("entry-{n}-{}", "x".repeat(512));
                log.write(LogCategory::Orders, "127.0.0.1", &message, None)
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let contents = std::fs::read_to_string(dir.path().join("orders.log")).unwrap();
        assert_eq!(contents.lines().count(), 32);
        assert!(contents.lines().all(|l| l.starts_with('[') && l.ends_with('x')));
    }

    #[tokio::test]
    async fn disabled_log_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let log = OrderLog::new(&LogConfig {
            enabled: false,
            directory: dir.path().to_path_buf(),
        });
        log.write(LogCategory::Errors, "unknown", "boom", None).await.unwrap();
        assert!(!dir.path().join("errors.log").exists());
    }
}
