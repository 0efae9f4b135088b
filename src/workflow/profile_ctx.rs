//! 学者处理上下文
//!
//! 封装"我正在处理第几位学者、主页在哪"这一信息

/// 学者处理上下文
#[derive(Debug, Clone)]
pub struct ProfileCtx {
    /// 学者在本批中的序号（从1开始，仅用于日志显示）
    pub index: usize,

    /// 本批学者总数
    pub total: usize,

    /// 已解析好的学者主页 URL
    pub profile_url: String,
}

impl ProfileCtx {
    /// 创建新的学者上下文
    pub fn new(index: usize, total: usize, profile_url: String) -> Self {
        Self {
            index,
            total,
            profile_url,
        }
    }
}
