pub mod authors;
pub mod citations;
pub mod extractor;
pub mod ledger;
pub mod pagination;
pub mod report;
pub mod resolver;
pub mod scrape;
pub mod tokens;

pub use authors::{AuthorContributionAnalyzer, AuthorRank, AuthorReport};
pub use citations::CitationHistoryClient;
pub use extractor::RecordExtractor;
pub use ledger::AggregateStore;
pub use pagination::{LoadedRows, PaginationLoader};
pub use report::{ReportAssembler, ReportSection, TabularReportWriter};
pub use resolver::ProfileResolver;
pub use scrape::ProfileScraper;
pub use tokens::{NgramTables, TextTokenAnalyzer};
