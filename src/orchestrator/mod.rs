//! 编排层：应用入口与批量调度
//!
//! 只有这一层持有浏览器资源，向下委托 workflow 处理单个学者。

pub mod batch_processor;

pub use batch_processor::App;
