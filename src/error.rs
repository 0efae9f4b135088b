use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 学者搜索解析错误
    Search(SearchError),
    /// 页面操作错误
    Page(PageError),
    /// 数据抽取错误
    Extract(ExtractError),
    /// 远程文档获取错误
    Fetch(FetchError),
    /// 持久化错误
    Persist(PersistError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Search(e) => write!(f, "搜索错误: {}", e),
            AppError::Page(e) => write!(f, "页面错误: {}", e),
            AppError::Extract(e) => write!(f, "抽取错误: {}", e),
            AppError::Fetch(e) => write!(f, "获取错误: {}", e),
            AppError::Persist(e) => write!(f, "持久化错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Search(e) => Some(e),
            AppError::Page(e) => Some(e),
            AppError::Extract(e) => Some(e),
            AppError::Fetch(e) => Some(e),
            AppError::Persist(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 学者搜索解析错误
///
/// 按查询词解析学者主页时，零个或多个候选都视为该条目不可处理
#[derive(Debug)]
pub enum SearchError {
    /// 查询没有命中任何学者
    NotFound {
        query: String,
    },
    /// 查询命中多个学者，需要人工确认
    Ambiguous {
        query: String,
        search_url: String,
        candidates: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NotFound { query } => {
                write!(f, "未找到匹配的学者 (查询: {})", query)
            }
            SearchError::Ambiguous {
                query,
                search_url,
                candidates,
            } => {
                write!(
                    f,
                    "查询 '{}' 命中 {} 个学者，请人工确认: {}",
                    query, candidates, search_url
                )
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// 页面操作错误
#[derive(Debug)]
pub enum PageError {
    /// 启动浏览器失败
    LaunchFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 连接浏览器失败
    ConnectionFailed {
        port: u16,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 导航失败
    NavigationFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 执行脚本失败
    ScriptFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 页面元素不存在
    ElementNotFound {
        locator: String,
    },
    /// 个人资料字段缺失
    MissingField {
        field: &'static str,
    },
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::LaunchFailed { source } => {
                write!(f, "启动浏览器失败: {}", source)
            }
            PageError::ConnectionFailed { port, source } => {
                write!(f, "无法连接到浏览器 (端口: {}): {}", port, source)
            }
            PageError::NavigationFailed { url, source } => {
                write!(f, "导航到 {} 失败: {}", url, source)
            }
            PageError::ScriptFailed { source } => {
                write!(f, "执行脚本失败: {}", source)
            }
            PageError::ElementNotFound { locator } => {
                write!(f, "页面元素不存在: {}", locator)
            }
            PageError::MissingField { field } => {
                write!(f, "个人资料字段缺失: {}", field)
            }
        }
    }
}

impl std::error::Error for PageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PageError::LaunchFailed { source }
            | PageError::ConnectionFailed { source, .. }
            | PageError::NavigationFailed { source, .. }
            | PageError::ScriptFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 数据抽取错误
#[derive(Debug)]
pub enum ExtractError {
    /// 各列长度不一致（同一下标必须对应同一篇论文）
    ColumnMismatch {
        titles: usize,
        links: usize,
        authors: usize,
        citations: usize,
        years: usize,
        venues: usize,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::ColumnMismatch {
                titles,
                links,
                authors,
                citations,
                years,
                venues,
            } => {
                write!(
                    f,
                    "数据列长度不一致: titles={}, links={}, authors={}, citations={}, years={}, venues={}",
                    titles, links, authors, citations, years, venues
                )
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// 远程文档获取错误
#[derive(Debug)]
pub enum FetchError {
    /// 网络请求失败
    RequestFailed {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 服务端返回错误状态码
    BadStatus {
        url: String,
        status: u16,
    },
    /// 文档解析失败
    ParseFailed {
        url: String,
        detail: String,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::RequestFailed { url, source } => {
                write!(f, "请求失败 ({}): {}", url, source)
            }
            FetchError::BadStatus { url, status } => {
                write!(f, "请求返回错误状态码 ({}): {}", url, status)
            }
            FetchError::ParseFailed { url, detail } => {
                write!(f, "文档解析失败 ({}): {}", url, detail)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::RequestFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 持久化错误
#[derive(Debug)]
pub enum PersistError {
    /// 读取已有文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 已有文件的表头与固定模式不一致
    SchemaMismatch {
        path: String,
    },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            PersistError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            PersistError::SchemaMismatch { path } => {
                write!(f, "文件表头与固定模式不一致: {}", path)
            }
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::ReadFailed { source, .. } | PersistError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Page(PageError::ScriptFailed {
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Page(PageError::ScriptFailed {
            source: Box::new(err),
        })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Persist(PersistError::WriteFailed {
            path: String::new(), // IO 错误本身不携带路径信息
            source: Box::new(err),
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建"未找到学者"错误
    pub fn scholar_not_found(query: impl Into<String>) -> Self {
        AppError::Search(SearchError::NotFound {
            query: query.into(),
        })
    }

    /// 创建"多个学者命中"错误
    pub fn scholar_ambiguous(
        query: impl Into<String>,
        search_url: impl Into<String>,
        candidates: usize,
    ) -> Self {
        AppError::Search(SearchError::Ambiguous {
            query: query.into(),
            search_url: search_url.into(),
            candidates,
        })
    }

    /// 创建网络请求失败错误
    pub fn fetch_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Fetch(FetchError::RequestFailed {
            url: url.into(),
            source: Box::new(source),
        })
    }

    /// 创建文档解析失败错误
    pub fn parse_failed(url: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::Fetch(FetchError::ParseFailed {
            url: url.into(),
            detail: detail.into(),
        })
    }

    /// 创建读取文件失败错误
    pub fn read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Persist(PersistError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建写入文件失败错误
    pub fn write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Persist(PersistError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
