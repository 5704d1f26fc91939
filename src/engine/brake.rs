// ==========================================
// 制造成本估算引擎 - 折弯计算器 (F140)
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4.3 Press-Brake
// 依据: Legacy_Macro_Parity_v0.9.md - F140 工时常量
// ==========================================
// 触发: 折弯数 >0（钣金）,或滚弯结果带 requires_press_brake
//       （厚壁管校形,跨计算器依赖: F325 必须先算）
// ==========================================

use crate::config::cost_model::CostModelConfig;
use crate::domain::cost::WorkCenterResult;
use crate::domain::part::SheetFacts;
use crate::domain::types::WorkCenter;

// ===== 工时常量（宏系统逐位照搬）=====
const BASE_SETUP_MINUTES: f64 = 15.0;
const SETUP_MINUTES_PER_BEND: f64 = 1.5;
const SECONDS_PER_BEND: f64 = 12.0;
const FLIP_PENALTY_SECONDS: f64 = 30.0;
const SECONDS_PER_BEND_INCH: f64 = 0.5;
// 超长折弯需双人搬运
const LONG_BEND_THRESHOLD_IN: f64 = 48.0;
const LONG_BEND_HANDLING_FACTOR: f64 = 1.5;
// 厚壁管滚弯后单次校形
const ROLLED_TUBE_HIT_SECONDS: f64 = 45.0;

// ==========================================
// BrakeCalculator - 折弯计算器
// ==========================================
pub struct BrakeCalculator;

impl BrakeCalculator {
    /// F140 折弯
    ///
    /// # 规则
    /// - 准备分钟 = 15 + 1.5 × 折弯数
    /// - 运行秒 = 折弯数 × 12 + 翻面 30 + 最长折弯 in × 0.5,
    ///   最长折弯 >48in 时整体 ×1.5
    /// - 厚壁管触发（零折弯）按 45s 单次校形
    /// - 不触发 → 全零结果
    pub fn compute(
        sheet: Option<&SheetFacts>,
        rollform_requires_brake: bool,
        quantity: u32,
        config: &CostModelConfig,
    ) -> WorkCenterResult {
        let bend_count = sheet.map(|s| s.bend_count).unwrap_or(0);
        if bend_count == 0 && !rollform_requires_brake {
            return WorkCenterResult::zero(WorkCenter::F140);
        }

        let setup_minutes = BASE_SETUP_MINUTES + SETUP_MINUTES_PER_BEND * bend_count as f64;
        let setup_hours = (setup_minutes / 60.0).max(config.min_setup_hours);

        let run_seconds = match sheet {
            Some(s) if s.bend_count > 0 => {
                let mut seconds = s.bend_count as f64 * SECONDS_PER_BEND
                    + if s.needs_flip { FLIP_PENALTY_SECONDS } else { 0.0 }
                    + s.longest_bend_in * SECONDS_PER_BEND_INCH;
                if s.longest_bend_in > LONG_BEND_THRESHOLD_IN {
                    seconds *= LONG_BEND_HANDLING_FACTOR;
                }
                seconds
            }
            _ => ROLLED_TUBE_HIT_SECONDS,
        };
        let run_hours = run_seconds / 3600.0;

        WorkCenterResult::priced(
            WorkCenter::F140,
            setup_hours,
            run_hours,
            quantity,
            config.rates.f140_brake,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(bends: u32, longest: f64, flip: bool) -> SheetFacts {
        SheetFacts {
            bend_count: bends,
            longest_bend_in: longest,
            max_bend_radius_in: 0.06,
            needs_flip: flip,
            tapped_hole_count: 0,
        }
    }

    #[test]
    fn test_not_applicable_is_zero() {
        let config = CostModelConfig::default();
        let result = BrakeCalculator::compute(Some(&sheet(0, 0.0, false)), false, 1, &config);
        assert!(result.is_zero()); // 不适用是合法业务结果
    }

    #[test]
    fn test_basic_bend_formula() {
        let config = CostModelConfig::default();
        let result = BrakeCalculator::compute(Some(&sheet(3, 10.0, false)), false, 1, &config);

        // 准备: (15 + 1.5×3)/60 = 0.325hr
        assert!((result.setup_hours - 0.325).abs() < 1e-12);
        // 运行: (3×12 + 10×0.5)/3600 = 41s
        assert!((result.run_hours - 41.0 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn test_flip_penalty() {
        let config = CostModelConfig::default();
        let without = BrakeCalculator::compute(Some(&sheet(2, 6.0, false)), false, 1, &config);
        let with = BrakeCalculator::compute(Some(&sheet(2, 6.0, true)), false, 1, &config);
        let delta = with.run_hours - without.run_hours;
        assert!((delta - 30.0 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn test_long_bend_handling_factor() {
        let config = CostModelConfig::default();
        let result = BrakeCalculator::compute(Some(&sheet(1, 60.0, false)), false, 1, &config);
        // (1×12 + 60×0.5) × 1.5 = 63s
        assert!((result.run_hours - 63.0 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn test_rolled_tube_hit() {
        let config = CostModelConfig::default();
        let result = BrakeCalculator::compute(None, true, 1, &config);
        assert!((result.setup_hours - 0.25).abs() < 1e-12); // 15min 基础准备
        assert!((result.run_hours - 45.0 / 3600.0).abs() < 1e-12);
    }
}
