/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// Google Scholar 站点根地址
    pub base_url: String,
    /// 学者清单 TOML 文件路径
    pub researchers_file: String,
    /// 报告与汇总数据库的输出目录
    pub output_dir: String,
    /// 汇总数据库文件名
    pub ledger_file: String,
    /// 浏览器调试端口（设置后连接已有浏览器，否则启动无头浏览器）
    pub browser_debug_port: Option<u16>,
    /// 标题短语分析的 N-gram 窗口大小
    pub n_gram: usize,
    /// 每张频率表保留的条目数
    pub most_used: usize,
    /// 是否把学者基本信息追加到汇总数据库
    pub add_to_database: bool,
    /// 分页加载的最大点击次数
    pub pages_to_load: usize,
    /// 每次点击后的等待时间（秒）
    pub loading_delay_secs: u64,
    /// 是否对标题词元做词干归一化
    pub stem_tokens: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://scholar.google.com".to_string(),
            researchers_file: "researchers.toml".to_string(),
            output_dir: "gs_output".to_string(),
            ledger_file: "Aggregated GS Database.csv".to_string(),
            browser_debug_port: None,
            n_gram: 2,
            most_used: 20,
            add_to_database: true,
            pages_to_load: 5,
            loading_delay_secs: 1,
            stem_tokens: false,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            base_url: std::env::var("GS_BASE_URL").unwrap_or(default.base_url),
            researchers_file: std::env::var("RESEARCHERS_FILE").unwrap_or(default.researchers_file),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            ledger_file: std::env::var("LEDGER_FILE").unwrap_or(default.ledger_file),
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()),
            n_gram: std::env::var("N_GRAM").ok().and_then(|v| v.parse().ok()).unwrap_or(default.n_gram),
            most_used: std::env::var("MOST_USED").ok().and_then(|v| v.parse().ok()).unwrap_or(default.most_used),
            add_to_database: std::env::var("ADD_TO_DATABASE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.add_to_database),
            pages_to_load: std::env::var("PAGES_TO_LOAD").ok().and_then(|v| v.parse().ok()).unwrap_or(default.pages_to_load),
            loading_delay_secs: std::env::var("LOADING_DELAY_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.loading_delay_secs),
            stem_tokens: std::env::var("STEM_TOKENS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.stem_tokens),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
