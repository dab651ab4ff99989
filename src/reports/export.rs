// 报告导出 - JSON / CSV 序列化

use anyhow::Result;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::models::ExportFormat;
use crate::storage::AnalysisRecord;

/// 导出内容及保存所需的元信息
///
/// 这里只负责生成内容；真正写盘由前端选好路径后
/// 另行触发。
#[derive(Debug, Clone, Serialize)]
pub struct ExportPayload {
    pub file_name: String,
    pub mime_type: String,
    pub contents: String,
}

/// 导出一组记录
pub fn export_records(records: &[AnalysisRecord], format: ExportFormat) -> Result<ExportPayload> {
    let contents = match format {
        ExportFormat::Json => serde_json::to_string_pretty(records)?,
        ExportFormat::Csv => to_csv(records),
    };

    Ok(ExportPayload {
        file_name: format!(
            "all-feedback-{}.{}",
            Utc::now().timestamp_millis(),
            format.extension()
        ),
        mime_type: format.mime_type().to_string(),
        contents,
    })
}

/// 导出单条记录
pub fn export_record(record: &AnalysisRecord, format: ExportFormat) -> Result<ExportPayload> {
    let contents = match format {
        ExportFormat::Json => serde_json::to_string_pretty(record)?,
        ExportFormat::Csv => to_csv(std::slice::from_ref(record)),
    };

    Ok(ExportPayload {
        file_name: format!("feedback-{}.{}", record.id, format.extension()),
        mime_type: format.mime_type().to_string(),
        contents,
    })
}

/// 生成 CSV 文本：表头加每条记录一行
///
/// 反馈文本整体加引号，内部引号按 CSV 规则成对转义。
fn to_csv(records: &[AnalysisRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push("Feedback,Sentiment,Date".to_string());

    for record in records {
        lines.push(format!(
            "\"{}\",{},{}",
            record.feedback.replace('"', "\"\""),
            record.sentiment.as_str(),
            format_local(&record.timestamp),
        ));
    }

    lines.join("\n")
}

/// 将 ISO-8601 时间戳转为本地时间显示；无法解析时原样输出
fn format_local(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisResult, Sentiment};

    fn record(feedback: &str, sentiment: Sentiment) -> AnalysisRecord {
        AnalysisRecord::from_result(AnalysisResult {
            feedback: feedback.to_string(),
            sentiment,
        })
    }

    #[test]
    fn test_json_roundtrip_single_record() {
        let original = record("很好用", Sentiment::Positive);
        let payload = export_record(&original, ExportFormat::Json).unwrap();

        let parsed: AnalysisRecord = serde_json::from_str(&payload.contents).unwrap();
        assert_eq!(parsed, original, "导出再解析应得到完全相同的记录");
        assert_eq!(payload.mime_type, "application/json");
        assert_eq!(payload.file_name, format!("feedback-{}.json", original.id));
    }

    #[test]
    fn test_json_roundtrip_record_list() {
        let records = vec![
            record("第一条", Sentiment::Positive),
            record("第二条", Sentiment::Negative),
        ];
        let payload = export_records(&records, ExportFormat::Json).unwrap();

        let parsed: Vec<AnalysisRecord> = serde_json::from_str(&payload.contents).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_record() {
        let records = vec![
            record("first", Sentiment::Positive),
            record("second", Sentiment::Neutral),
        ];
        let payload = export_records(&records, ExportFormat::Csv).unwrap();

        let lines: Vec<&str> = payload.contents.lines().collect();
        assert_eq!(lines[0], "Feedback,Sentiment,Date");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("\"first\",positive,"));
        assert_eq!(payload.mime_type, "text/csv");
    }

    #[test]
    fn test_csv_doubles_inner_quotes() {
        let payload =
            export_record(&record("He said \"hi\"", Sentiment::Neutral), ExportFormat::Csv)
                .unwrap();

        let row = payload.contents.lines().nth(1).unwrap();
        assert!(
            row.starts_with("\"He said \"\"hi\"\"\","),
            "内部引号应成对转义: {}",
            row
        );
    }

    #[test]
    fn test_unparseable_timestamp_passes_through() {
        let mut broken = record("x", Sentiment::Positive);
        broken.timestamp = "不是时间".to_string();

        let payload = export_record(&broken, ExportFormat::Csv).unwrap();
        assert!(payload.contents.ends_with("不是时间"));
    }
}
