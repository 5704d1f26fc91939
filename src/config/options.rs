// ==========================================
// 制造成本估算引擎 - 处理选项
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 6. 外部接口 Processing Options
// ==========================================
// 用途: 外层向导/批处理传入的纯配置结构,无动态行为
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProcessingOptions - 单次估算处理选项
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    pub quantity_override: Option<u32>, // 数量覆盖（None 时走 BOM 查找）
    pub nest_efficiency: f64,           // 套料效率（0..1,默认 0.85）
    pub use_waterjet: bool,             // 水刀替代激光
    pub save_changes: bool,             // 回写 CAD 属性（外层消费,引擎不读）
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            quantity_override: None,
            nest_efficiency: 0.85,
            use_waterjet: false,
            save_changes: false,
        }
    }
}
