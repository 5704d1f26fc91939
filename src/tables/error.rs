// ==========================================
// 制造成本估算引擎 - 查找表错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 查找表数据源错误类型
#[derive(Error, Debug)]
pub enum TableError {
    // ===== 文件相关错误 =====
    #[error("速度表文件读取失败: {0}")]
    FileRead(String),

    #[error("速度表 JSON 解析失败: {0}")]
    Parse(String),

    // ===== 数据质量错误 =====
    #[error("速度表非法: {0}")]
    InvalidTable(String),
}
