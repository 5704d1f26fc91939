// ==========================================
// 制造成本估算引擎 - 攻丝计算器 (F220)
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4.3 Tap
// 触发: 攻丝孔数 >0;成本随孔数与数量线性伸缩
// ==========================================

use crate::config::cost_model::CostModelConfig;
use crate::domain::cost::WorkCenterResult;
use crate::domain::types::WorkCenter;

// ===== 工时常量（宏系统逐位照搬）=====
const SETUP_MINUTES: f64 = 5.0;
const SECONDS_PER_HOLE: f64 = 10.0;

// ==========================================
// TapCalculator - 攻丝计算器
// ==========================================
pub struct TapCalculator;

impl TapCalculator {
    /// F220 攻丝
    ///
    /// # 规则
    /// - 运行秒 = 孔数 × 10
    /// - 孔数 0 → 全零结果
    pub fn compute(
        tapped_hole_count: u32,
        quantity: u32,
        config: &CostModelConfig,
    ) -> WorkCenterResult {
        if tapped_hole_count == 0 {
            return WorkCenterResult::zero(WorkCenter::F220);
        }

        let setup_hours = (SETUP_MINUTES / 60.0).max(config.min_setup_hours);
        let run_hours = tapped_hole_count as f64 * SECONDS_PER_HOLE / 3600.0;

        WorkCenterResult::priced(
            WorkCenter::F220,
            setup_hours,
            run_hours,
            quantity,
            config.rates.f220_tap,
        )
    }
}
