use crate::error::{AppError, Result};
use crate::models::{parse_amount, parse_timestamp, SaleRecord};
use crate::services::record_store::RecordStore;
use async_trait::async_trait;
use csv::{Reader, StringRecord};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Record store reading a CSV export of the sales table
///
/// The file needs a header row with `timestamp` and `amount` columns; any
/// other columns (category, region, status, ...) are ignored.
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl RecordStore for CsvRecordStore {
    async fn fetch_sales(&self) -> Result<Vec<SaleRecord>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_sales_csv(&path))
            .await
            .map_err(|e| AppError::Other(format!("CSV reader task failed: {}", e)))?
    }

    async fn fetch_amounts(&self) -> Result<Vec<f64>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || read_sales_amounts(&path))
            .await
            .map_err(|e| AppError::Other(format!("CSV reader task failed: {}", e)))?
    }

    fn backend_type(&self) -> &'static str {
        "csv"
    }
}

fn open_sales_csv(path: &Path) -> Result<(Reader<File>, StringRecord)> {
    let mut reader = Reader::from_path(path)
        .map_err(|e| AppError::Store(format!("Cannot open {}: {}", path.display(), e)))?;
    let headers = reader.headers()?.clone();
    Ok((reader, headers))
}

fn column_index(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| AppError::Parse(format!("{} has no '{}' column", path.display(), name)))
}

/// Parse every row of a sales CSV file
pub fn read_sales_csv(path: &Path) -> Result<Vec<SaleRecord>> {
    let (mut reader, headers) = open_sales_csv(path)?;
    let time_idx = column_index(&headers, "timestamp", path)?;
    let amount_idx = column_index(&headers, "amount", path)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = row + 2;

        let timestamp = parse_timestamp(record.get(time_idx).unwrap_or(""))
            .map_err(|e| AppError::Parse(format!("line {}: {}", line, e)))?;
        let amount = parse_amount(record.get(amount_idx).unwrap_or(""))
            .map_err(|e| AppError::Parse(format!("line {}: {}", line, e)))?;

        records.push(SaleRecord::new(timestamp, amount));
    }

    debug!(rows = records.len(), path = %path.display(), "Read sales CSV");
    Ok(records)
}

/// Parse only the `amount` column of a sales CSV file
pub fn read_sales_amounts(path: &Path) -> Result<Vec<f64>> {
    let (mut reader, headers) = open_sales_csv(path)?;
    let amount_idx = column_index(&headers, "amount", path)?;

    let mut amounts = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let amount = parse_amount(record.get(amount_idx).unwrap_or(""))
            .map_err(|e| AppError::Parse(format!("line {}: {}", row + 2, e)))?;
        amounts.push(amount);
    }

    debug!(rows = amounts.len(), path = %path.display(), "Read sales amounts");
    Ok(amounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_seed_export() {
        let file = write_csv(
            "id,timestamp,amount,category,customer_name,region,status\n\
             0,2024-01-01 09:15:00.123456,120.5,Software,Acme,Europe,completed\n\
             1,2024-01-02 17:40:00,80,Hardware,Globex,Asia,pending\n",
        );

        let records = read_sales_csv(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].amount, 120.5);
        assert_eq!(records[0].date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(records[1].amount, 80.0);
    }

    #[test]
    fn test_missing_amount_column() {
        let file = write_csv("timestamp,total\n2024-01-01,10\n");
        let err = read_sales_csv(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_bad_row_reports_line() {
        let file = write_csv("timestamp,amount\n2024-01-01,10\nnot-a-date,5\n");
        let err = read_sales_csv(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_read_amounts_skips_timestamp_column() {
        let file = write_csv("timestamp,amount\nnot-a-date,5\n,7.5\n");
        assert_eq!(read_sales_amounts(file.path()).unwrap(), vec![5.0, 7.5]);
    }

    #[test]
    fn test_read_amounts_rejects_bad_amount() {
        let file = write_csv("timestamp,amount\n2024-01-01,5\n2024-01-02,oops\n");
        let err = read_sales_amounts(file.path()).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_missing_file_is_store_error() {
        let err = read_sales_csv(Path::new("/nonexistent/sales.csv")).unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }

    #[tokio::test]
    async fn test_fetch_through_trait() {
        let file = write_csv("timestamp,amount\n2024-01-01T10:00:00,10\n2024-01-01T11:00:00,15\n");
        let store = CsvRecordStore::new(file.path().to_path_buf());

        let records = store.fetch_sales().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(store.backend_type(), "csv");
    }
}
