// 报告视图逻辑 - 筛选、搜索与统计
//
// 这里全部是纯函数，只在内存序列上计算，不触碰存储层

pub mod export;

use crate::models::{Sentiment, SentimentFilter};
use crate::storage::{AnalysisRecord, SentimentStats};

/// 按情感分类和搜索词筛选记录
///
/// 搜索词去除首尾空白后忽略大小写匹配反馈文本或情感标签，
/// 任一字段命中即保留；分类条件与搜索条件同时生效。
/// 结果保持输入顺序（最新在前）。
pub fn filter_and_search(
    records: &[AnalysisRecord],
    filter: SentimentFilter,
    search: &str,
) -> Vec<AnalysisRecord> {
    let term = search.trim().to_lowercase();

    records
        .iter()
        .filter(|record| filter.matches(&record.sentiment))
        .filter(|record| {
            if term.is_empty() {
                return true;
            }
            record.feedback.to_lowercase().contains(&term)
                || record.sentiment.as_str().to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// 单次遍历统计各情感分类的数量
pub fn sentiment_stats(records: &[AnalysisRecord]) -> SentimentStats {
    let mut stats = SentimentStats {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        match &record.sentiment {
            Sentiment::Positive => stats.positive += 1,
            Sentiment::Negative => stats.negative += 1,
            Sentiment::Neutral => stats.neutral += 1,
            // 未知标签只计入总数
            Sentiment::Other(_) => {}
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnalysisResult;

    fn record(feedback: &str, sentiment: Sentiment) -> AnalysisRecord {
        AnalysisRecord::from_result(AnalysisResult {
            feedback: feedback.to_string(),
            sentiment,
        })
    }

    fn sample() -> Vec<AnalysisRecord> {
        vec![
            record("Great product, works perfectly", Sentiment::Positive),
            record("Terrible support experience", Sentiment::Negative),
            record("It is okay I guess", Sentiment::Neutral),
            record("GREAT value for money", Sentiment::Positive),
        ]
    }

    #[test]
    fn test_filter_by_sentiment_preserves_order() {
        let all = sample();
        let positives = filter_and_search(&all, SentimentFilter::Positive, "");

        assert_eq!(positives.len(), 2);
        assert_eq!(positives[0].id, all[0].id, "筛选不应改变相对顺序");
        assert_eq!(positives[1].id, all[3].id);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let all = sample();
        let hits = filter_and_search(&all, SentimentFilter::All, "great");

        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.feedback.to_lowercase().contains("great")));
    }

    #[test]
    fn test_search_matches_sentiment_label() {
        let all = sample();
        // "neg" 命中情感标签 negative
        let hits = filter_and_search(&all, SentimentFilter::All, "neg");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_filter_and_search_compose_with_and() {
        let all = sample();
        let hits = filter_and_search(&all, SentimentFilter::Positive, "value");

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].feedback, "GREAT value for money");
    }

    #[test]
    fn test_blank_search_keeps_everything() {
        let all = sample();
        let hits = filter_and_search(&all, SentimentFilter::All, "   ");

        assert_eq!(hits.len(), all.len());
    }

    #[test]
    fn test_stats_counts_in_one_pass() {
        let mut all = sample();
        all.push(record("whatever", Sentiment::Other("mixed".to_string())));

        let stats = sentiment_stats(&all);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.positive, 2);
        assert_eq!(stats.negative, 1);
        assert_eq!(stats.neutral, 1);
    }

    #[test]
    fn test_stats_on_empty_list() {
        assert_eq!(sentiment_stats(&[]), SentimentStats::default());
    }
}
