//! 报告组装与写出服务 - 业务能力层
//!
//! 把基本信息与各项分析结果组装成命名多节报告，写出为每个学者
//! 一个的 CSV 文件（节名行 + 数据行 + 空行分隔，对应原始工作簿的多个表）

use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::ResearcherProfile;
use crate::services::authors::AuthorReport;
use crate::services::tokens::NgramTables;

/// 命名的报告节
#[derive(Debug, Clone)]
pub struct ReportSection {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl ReportSection {
    fn new(name: &str, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.to_string(),
            rows,
        }
    }
}

/// 报告组装服务
///
/// 只负责把现成的分析结果排成固定的节顺序，不做任何计算
pub struct ReportAssembler;

impl ReportAssembler {
    /// 组装完整报告
    ///
    /// 节顺序固定：基本信息、年度引用、论文列表、标题 N-gram、
    /// 年度发表数、作者分析
    pub fn assemble(
        profile: &ResearcherProfile,
        ngram_tables: &NgramTables,
        pub_years: &[(String, u32)],
        author_report: &AuthorReport,
    ) -> Vec<ReportSection> {
        let mut sections = Vec::with_capacity(6);

        sections.push(ReportSection::new(
            "Basic Info",
            basic_info_rows(profile),
        ));

        let mut citation_rows = vec![vec!["Year".to_string(), "Citation".to_string()]];
        // BTreeMap 迭代天然按年份升序
        citation_rows.extend(
            profile
                .citation_by_year
                .iter()
                .map(|(year, count)| vec![year.to_string(), count.to_string()]),
        );
        sections.push(ReportSection::new("Citation by Year", citation_rows));

        let mut pub_rows = vec![vec![
            "Title".to_string(),
            "Link".to_string(),
            "Author".to_string(),
            "Citation".to_string(),
            "Year".to_string(),
            "Source".to_string(),
        ]];
        pub_rows.extend(profile.publications.iter().map(|p| {
            vec![
                p.title.clone(),
                p.link.clone().unwrap_or_default(),
                p.raw_author_field.clone(),
                p.citation_count.clone(),
                p.year.clone(),
                p.venue.clone(),
            ]
        }));
        sections.push(ReportSection::new("Publication Info", pub_rows));

        sections.push(ReportSection::new(
            "Titles Ngram",
            ngram_rows(ngram_tables),
        ));

        let mut year_rows = vec![vec!["Year".to_string(), "Count".to_string()]];
        year_rows.extend(
            pub_years
                .iter()
                .map(|(year, count)| vec![year.clone(), count.to_string()]),
        );
        sections.push(ReportSection::new("Pub Num by Year", year_rows));

        sections.push(ReportSection::new(
            "Authors Analysis",
            author_report.to_rows(),
        ));

        sections
    }
}

fn basic_info_rows(profile: &ResearcherProfile) -> Vec<Vec<String>> {
    let labels = crate::services::ledger::LEDGER_HEADER;
    labels
        .iter()
        .zip(profile.basic.ledger_row())
        .map(|(label, value)| vec![label.to_string(), value])
        .collect()
}

/// unigram 与 n-gram 并排成行，占位条目渲染为空
fn ngram_rows(tables: &NgramTables) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Unigram".to_string(),
        "Count".to_string(),
        String::new(),
        format!("{}-gram", tables.n),
        "Count".to_string(),
    ]];
    for (uni, ng) in tables.unigrams.iter().zip(tables.ngrams.iter()) {
        rows.push(vec![
            uni.0.clone(),
            render_count(uni),
            String::new(),
            ng.0.clone(),
            render_count(ng),
        ]);
    }
    rows
}

fn render_count(entry: &(String, u32)) -> String {
    if entry.0.is_empty() {
        String::new()
    } else {
        entry.1.to_string()
    }
}

/// 多节表格写出服务
///
/// 接受命名的节列表与目标路径，产出单个 CSV 文件；
/// 不提供部分写入或增量写入的保证
pub struct TabularReportWriter {
    output_dir: PathBuf,
}

impl TabularReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 写出学者报告，返回写入路径
    ///
    /// 文件名按学者与记录日期生成：`<姓名> GSProfile_<日期>.csv`
    pub fn write_profile_report(
        &self,
        researcher_name: &str,
        recorded_date: &str,
        sections: &[ReportSection],
    ) -> AppResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| AppError::write_failed(self.output_dir.display().to_string(), e))?;

        let file_name = format!("{} GSProfile_{}.csv", researcher_name, recorded_date);
        let path = self.output_dir.join(file_name);

        self.write_sections(&path, sections)?;

        info!("📄 报告已保存: {}", path.display());
        Ok(path)
    }

    fn write_sections(&self, path: &Path, sections: &[ReportSection]) -> AppResult<()> {
        let path_str = path.display().to_string();
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| AppError::write_failed(&path_str, e))?;

        for section in sections {
            writer
                .write_record([format!("=== {} ===", section.name)])
                .map_err(|e| AppError::write_failed(&path_str, e))?;
            for row in &section.rows {
                writer
                    .write_record(row)
                    .map_err(|e| AppError::write_failed(&path_str, e))?;
            }
            // 节与节之间留一个空行
            writer
                .write_record([""])
                .map_err(|e| AppError::write_failed(&path_str, e))?;
        }

        writer
            .flush()
            .map_err(|e| AppError::write_failed(&path_str, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_emits_each_section_banner_once() {
        let dir = tempfile::tempdir().unwrap();
        let writer = TabularReportWriter::new(dir.path());

        let sections = vec![
            ReportSection::new(
                "Basic Info",
                vec![vec!["Name".to_string(), "A".to_string()]],
            ),
            ReportSection::new(
                "Pub Num by Year",
                vec![vec!["Year".to_string(), "Count".to_string()]],
            ),
        ];

        let path = writer
            .write_profile_report("A", "2020-08-01", &sections)
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert_eq!(content.matches("=== Basic Info ===").count(), 1);
        assert_eq!(content.matches("=== Pub Num by Year ===").count(), 1);
        assert!(path.file_name().unwrap().to_string_lossy().contains("GSProfile_2020-08-01"));
    }

    #[test]
    fn test_ngram_rows_render_padding_as_blank() {
        let tables = NgramTables {
            unigrams: vec![("alpha".to_string(), 2), ("beta".to_string(), 1)],
            ngrams: vec![("alpha beta".to_string(), 1), (String::new(), 0)],
            n: 2,
        };
        let rows = ngram_rows(&tables);
        assert_eq!(rows[0][3], "2-gram");
        assert_eq!(rows[1], vec!["alpha", "2", "", "alpha beta", "1"]);
        assert_eq!(rows[2], vec!["beta", "1", "", "", ""]);
    }
}
