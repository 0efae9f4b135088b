//! 汇总数据库服务 - 业务能力层
//!
//! 跨学者共享的只追加汇总表：固定表头，每次调用追加一行。
//! 有意不做去重：同一学者重跑一次就多一行。
//! 读-改-写不是原子操作，假定同一时刻只有一个写入者。

use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use tracing::info;

use crate::error::{AppError, AppResult, PersistError};

/// 汇总数据库的固定列模式
pub const LEDGER_HEADER: [&str; 8] = [
    "Name",
    "Affiliation",
    "Homepage",
    "ProfileUrl",
    "Specialization",
    "CitationAll",
    "CitationRecent",
    "DateRecorded",
];

/// 汇总数据库服务
pub struct AggregateStore {
    ledger_path: PathBuf,
}

impl AggregateStore {
    pub fn new(ledger_path: impl Into<PathBuf>) -> Self {
        Self {
            ledger_path: ledger_path.into(),
        }
    }

    /// 追加一行学者基本信息
    ///
    /// 文件不存在时先用固定表头创建；存在时读入全部已有行再整体重写，
    /// 新行固定追加在末尾，已有行顺序不变
    pub fn append(&self, row: &[String]) -> AppResult<()> {
        let path_str = self.ledger_path.display().to_string();

        if let Some(parent) = self.ledger_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| AppError::write_failed(&path_str, e))?;
            }
        }

        let existing_rows = if self.ledger_path.exists() {
            Some(self.read_existing(&path_str)?)
        } else {
            None
        };
        let created = existing_rows.is_none();

        let mut writer = WriterBuilder::new()
            .from_path(&self.ledger_path)
            .map_err(|e| AppError::write_failed(&path_str, e))?;

        writer
            .write_record(LEDGER_HEADER)
            .map_err(|e| AppError::write_failed(&path_str, e))?;
        for record in existing_rows.unwrap_or_default() {
            writer
                .write_record(&record)
                .map_err(|e| AppError::write_failed(&path_str, e))?;
        }
        writer
            .write_record(row)
            .map_err(|e| AppError::write_failed(&path_str, e))?;
        writer
            .flush()
            .map_err(|e| AppError::write_failed(&path_str, e))?;

        if created {
            info!("💾 汇总数据库已创建: {}", path_str);
        } else {
            info!("💾 汇总数据库已更新: {}", path_str);
        }
        Ok(())
    }

    /// 读入已有行并校验表头
    fn read_existing(&self, path_str: &str) -> AppResult<Vec<StringRecord>> {
        let mut reader = ReaderBuilder::new()
            .from_path(&self.ledger_path)
            .map_err(|e| AppError::read_failed(path_str, e))?;

        let headers = reader
            .headers()
            .map_err(|e| AppError::read_failed(path_str, e))?;
        if headers.iter().ne(LEDGER_HEADER) {
            return Err(AppError::Persist(PersistError::SchemaMismatch {
                path: path_str.to_string(),
            }));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            rows.push(result.map_err(|e| AppError::read_failed(path_str, e))?);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(name: &str) -> Vec<String> {
        vec![
            name.to_string(),
            "X University".to_string(),
            "Not available".to_string(),
            format!("https://scholar.google.com/citations?user={}", name),
            "NLP".to_string(),
            "100".to_string(),
            "40".to_string(),
            "2020-08-01".to_string(),
        ]
    }

    fn read_names(path: &std::path::Path) -> Vec<String> {
        let mut reader = ReaderBuilder::new().from_path(path).unwrap();
        reader
            .records()
            .map(|r| r.unwrap().get(0).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_append_preserves_order_and_keeps_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let store = AggregateStore::new(&path);

        store.append(&sample_row("A")).unwrap();
        store.append(&sample_row("B")).unwrap();
        assert_eq!(read_names(&path), vec!["A", "B"]);

        // 重复追加同一学者必须得到第三行，不做去重
        store.append(&sample_row("A")).unwrap();
        assert_eq!(read_names(&path), vec!["A", "B", "A"]);
    }

    #[test]
    fn test_header_written_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        let store = AggregateStore::new(&path);

        store.append(&sample_row("A")).unwrap();
        store.append(&sample_row("B")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Name,Affiliation").count(), 1);
    }

    #[test]
    fn test_schema_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.csv");
        std::fs::write(&path, "Wrong,Header\nfoo,bar\n").unwrap();

        let store = AggregateStore::new(&path);
        let err = store.append(&sample_row("A")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Persist(PersistError::SchemaMismatch { .. })
        ));
    }
}
