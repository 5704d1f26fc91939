// ==========================================
// 制造成本估算引擎 - 配置层
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 9. 配置注入
// ==========================================
// 职责: 成本模型配置与处理选项
// 红线: 不包含业务公式,配置构造后只读
// ==========================================

pub mod cost_model;
pub mod options;

pub use cost_model::{CostModelConfig, HourlyRates};
pub use options::ProcessingOptions;
