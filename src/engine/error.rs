// ==========================================
// 制造成本估算引擎 - 引擎错误类型
// ==========================================
// 依据: Rust 错误处理最佳实践
// 工具: thiserror 派生宏
// ==========================================
// 红线: 输入校验失败才报错;计算器"不适用"是合法业务结果,
//       产出全零贡献而非错误
// ==========================================

use thiserror::Error;

/// 估算引擎错误类型（输入校验层）
///
/// 调用方语义: 出错零件不产出成本记录,跳过并进入问题清单
#[derive(Error, Debug)]
pub enum EstimateError {
    // ===== 输入校验失败 =====
    #[error("材料未指定: {0}")]
    MissingMaterial(String),

    #[error("几何无效: {0}")]
    InvalidGeometry(String),
}
