// ==========================================
// 制造成本估算引擎 - 锯切计算器 (F300)
// ==========================================
// 依据: Legacy_Macro_Parity_v0.9.md - F300 闭式公式
// ==========================================
// 红线: 运行公式 ((OD × 90) + 15) 为秒级,输出转分钟,
//       宏系统逐位照搬;单位混用必须原样保留,
//       没有等价性校验不得"清理"
// ==========================================

use crate::config::cost_model::CostModelConfig;
use crate::domain::cost::WorkCenterResult;
use crate::domain::types::WorkCenter;

const SETUP_MINUTES: f64 = 3.0;

// ==========================================
// SawCalculator - 锯切计算器（实心圆棒）
// ==========================================
pub struct SawCalculator;

impl SawCalculator {
    /// F300 锯切
    ///
    /// # 规则
    /// - 准备 = 3min 固定
    /// - 运行分钟 = ((OD × 90) + 15) / 60
    pub fn compute(
        outer_diameter_in: f64,
        quantity: u32,
        config: &CostModelConfig,
    ) -> WorkCenterResult {
        if outer_diameter_in <= 0.0 {
            return WorkCenterResult::zero(WorkCenter::F300);
        }

        let setup_hours = (SETUP_MINUTES / 60.0).max(config.min_setup_hours);
        let run_minutes = ((outer_diameter_in * 90.0) + 15.0) / 60.0;
        let run_hours = run_minutes / 60.0;

        WorkCenterResult::priced(
            WorkCenter::F300,
            setup_hours,
            run_hours,
            quantity,
            config.rates.f300_saw,
        )
    }
}
