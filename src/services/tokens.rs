//! 标题词元分析服务 - 业务能力层
//!
//! 对论文标题做分词、停用词过滤、可选词干归一化，
//! 并生成按频率排序的 unigram / n-gram 两张表

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::utils::freq::rank_by_count;

/// 固定英文停用词表
static STOPWORDS: phf::Set<&'static str> = phf::phf_set! {
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his",
    "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll", "these",
    "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having", "do",
    "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while",
    "of", "at", "by", "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very", "can", "cannot", "will", "just", "don't", "should", "should've",
    "now", "aren't", "couldn't", "didn't", "doesn't", "hadn't", "hasn't", "haven't", "isn't", "mightn't",
    "mustn't", "needn't", "shan't", "shouldn't", "wasn't", "weren't", "won't", "wouldn't",
};

/// unigram 与 n-gram 频率表
///
/// 两张表都按频率降序、同频按首次出现顺序排列，
/// 并已补齐到相同长度以便并排展示（占位条目为空短语、计数 0）
#[derive(Debug, Clone)]
pub struct NgramTables {
    pub unigrams: Vec<(String, u32)>,
    pub ngrams: Vec<(String, u32)>,
    /// n-gram 窗口大小
    pub n: usize,
}

/// 标题词元分析服务
///
/// 职责：
/// - 分词（词字符 / 撇号 / 连字符模式，统一小写）
/// - 停用词过滤
/// - 可选的词干归一化（形态变体合并计数）
/// - 生成排序后的频率表
pub struct TextTokenAnalyzer {
    token_re: Regex,
    stemmer: Option<Stemmer>,
}

impl TextTokenAnalyzer {
    pub fn new(stem_tokens: bool) -> Self {
        Self {
            token_re: Regex::new(r"[\w'-]+").expect("内置正则必定合法"),
            stemmer: stem_tokens.then(|| Stemmer::create(Algorithm::English)),
        }
    }

    /// 对单个标题分词并过滤停用词
    pub fn filtered_tokens(&self, title: &str) -> Vec<String> {
        let lowered = title.to_lowercase();
        self.token_re
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .filter(|tk| !STOPWORDS.contains(tk.as_str()))
            .map(|tk| match &self.stemmer {
                Some(stemmer) => stemmer.stem(&tk).to_string(),
                None => tk,
            })
            .collect()
    }

    /// 生成 unigram 与 n-gram 频率表
    ///
    /// n-gram 只在单个标题自己的词元序列内滑动，绝不跨标题拼接；
    /// 词元数不足 n 的标题不产生 n-gram
    pub fn analyze(&self, titles: &[String], n: usize, top_k: usize) -> NgramTables {
        let per_title: Vec<Vec<String>> = titles.iter().map(|t| self.filtered_tokens(t)).collect();

        let unigram_stream = per_title.iter().flatten().cloned();
        let mut unigrams = rank_by_count(unigram_stream, Some(top_k));

        let mut ngrams = if n <= 1 {
            rank_by_count(per_title.iter().flatten().cloned(), Some(top_k))
        } else {
            let ngram_stream = per_title
                .iter()
                .filter(|tokens| tokens.len() >= n)
                .flat_map(|tokens| tokens.windows(n).map(|w| w.join(" ")));
            rank_by_count(ngram_stream, Some(top_k))
        };

        // 补齐较短的表，使两张表可以并排展示
        let width = unigrams.len().max(ngrams.len());
        unigrams.resize(width, (String::new(), 0));
        ngrams.resize(width, (String::new(), 0));

        NgramTables {
            unigrams,
            ngrams,
            n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_stopwords_filtered_and_lowercased() {
        let analyzer = TextTokenAnalyzer::new(false);
        let tokens = analyzer.filtered_tokens("Deep Learning for X");
        assert_eq!(tokens, vec!["deep", "learning", "x"]);
    }

    #[test]
    fn test_unigram_ranking_matches_first_encounter_ties() {
        let analyzer = TextTokenAnalyzer::new(false);
        let tables = analyzer.analyze(
            &titles(&["Deep Learning for X", "Deep Learning for Y", "Other Work"]),
            2,
            3,
        );
        let top: Vec<(&str, u32)> = tables
            .unigrams
            .iter()
            .map(|(p, c)| (p.as_str(), *c))
            .collect();
        // x 先于 y 出现，同频时排在前面
        assert_eq!(top, vec![("deep", 2), ("learning", 2), ("x", 1)]);
    }

    #[test]
    fn test_ngrams_never_span_titles() {
        let analyzer = TextTokenAnalyzer::new(false);
        let tables = analyzer.analyze(&titles(&["alpha beta", "gamma delta"]), 2, 20);
        let phrases: Vec<&str> = tables
            .ngrams
            .iter()
            .filter(|(p, _)| !p.is_empty())
            .map(|(p, _)| p.as_str())
            .collect();
        assert_eq!(phrases, vec!["alpha beta", "gamma delta"]);
        assert!(!phrases.contains(&"beta gamma"));
    }

    #[test]
    fn test_title_shorter_than_n_contributes_nothing() {
        let analyzer = TextTokenAnalyzer::new(false);
        // 标题过滤后只剩 1 个词元，窗口大小 2 时不产生 n-gram
        let tables = analyzer.analyze(&titles(&["The Work"]), 2, 20);
        assert!(tables.ngrams.iter().all(|(p, _)| p.is_empty()));
    }

    #[test]
    fn test_ngram_count_is_len_minus_n_plus_one() {
        let analyzer = TextTokenAnalyzer::new(false);
        // 过滤后 4 个词元，窗口 2 → 3 个 n-gram
        let tables = analyzer.analyze(&titles(&["alpha beta gamma delta"]), 2, 20);
        let total: u32 = tables.ngrams.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_tables_padded_to_equal_length() {
        let analyzer = TextTokenAnalyzer::new(false);
        let tables = analyzer.analyze(&titles(&["alpha beta", "alpha gamma"]), 2, 20);
        assert_eq!(tables.unigrams.len(), tables.ngrams.len());
    }

    #[test]
    fn test_stemming_collapses_variants() {
        let analyzer = TextTokenAnalyzer::new(true);
        let tables = analyzer.analyze(&titles(&["Neural Network", "Neural Networks"]), 2, 20);
        let network = tables
            .unigrams
            .iter()
            .find(|(p, _)| p == "network")
            .expect("词干归一化后应合并为 network");
        assert_eq!(network.1, 2);
    }

    #[test]
    fn test_top_k_truncation() {
        let analyzer = TextTokenAnalyzer::new(false);
        let tables = analyzer.analyze(&titles(&["alpha beta gamma delta epsilon"]), 2, 2);
        assert_eq!(tables.unigrams.len(), 2);
        assert_eq!(tables.ngrams.len(), 2);
    }
}
