// ==========================================
// 制造成本估算引擎 - 去毛刺计算器 (F210)
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4.3 Deburr
// 触发: 切割长度 >0（钣金路线）
// ==========================================

use crate::config::cost_model::CostModelConfig;
use crate::domain::cost::WorkCenterResult;
use crate::domain::types::WorkCenter;

// ===== 工时常量（宏系统逐位照搬）=====
const SETUP_MINUTES: f64 = 5.0;
const BELT_FEED_IPM: f64 = 40.0;
const HANDLING_MINUTES: f64 = 0.25;

// ==========================================
// DeburrCalculator - 去毛刺计算器
// ==========================================
pub struct DeburrCalculator;

impl DeburrCalculator {
    /// F210 去毛刺
    ///
    /// # 规则
    /// - 运行分钟 = 切割长度 / 40ipm + 0.25 搬运
    /// - 切割长度 ≤0 → 全零结果
    pub fn compute(cut_length_in: f64, quantity: u32, config: &CostModelConfig) -> WorkCenterResult {
        if cut_length_in <= 0.0 {
            return WorkCenterResult::zero(WorkCenter::F210);
        }

        let setup_hours = (SETUP_MINUTES / 60.0).max(config.min_setup_hours);
        let run_minutes = cut_length_in / BELT_FEED_IPM + HANDLING_MINUTES;
        let run_hours = run_minutes / 60.0;

        WorkCenterResult::priced(
            WorkCenter::F210,
            setup_hours,
            run_hours,
            quantity,
            config.rates.f210_deburr,
        )
    }
}
