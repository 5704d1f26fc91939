// ==========================================
// 制造成本估算引擎 - 滚弯成型计算器 (F325)
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4.3 Roll-Form
// 依据: Legacy_Macro_Parity_v0.9.md - 半圆弧长近似
// ==========================================
// 触发: 钣金最大折弯半径 >2.0in;管材无条件滚弯
// 红线: 跨计算器顺序契约 — 管材路线 F325 必须先于 F140,
//       requires_press_brake 经决策对象显式传递,不靠调用顺序暗含
// ==========================================

use crate::config::cost_model::CostModelConfig;
use crate::domain::cost::WorkCenterResult;
use crate::domain::part::{SheetFacts, TubeFacts};
use crate::domain::types::WorkCenter;
use std::f64::consts::PI;

// ===== 工时常量（宏系统逐位照搬）=====
const SETUP_MINUTES: f64 = 20.0;
// 钣金触发半径
const SHEET_TRIGGER_RADIUS_IN: f64 = 2.0;
// 弧长未直接测量时按 radius × π 半圆近似（记录在案的近似,非精确值）
const SHEET_ROLL_FEED_IPM: f64 = 10.0;
const SHEET_HANDLING_MINUTES: f64 = 1.0;
// 管材滚弯
const TUBE_FEED_IPM: f64 = 12.0;
const TUBE_MINUTES_PER_OD_IN: f64 = 0.75;
// 厚壁管需折弯机校形
const HEAVY_WALL_THRESHOLD_IN: f64 = 0.25;

// ==========================================
// RollFormOutcome - 滚弯结果 + 路由决策
// ==========================================
// 决策对象: requires_press_brake 传递给 F140
#[derive(Debug, Clone)]
pub struct RollFormOutcome {
    pub result: WorkCenterResult,
    pub requires_press_brake: bool,
}

// ==========================================
// RollFormCalculator - 滚弯成型计算器
// ==========================================
pub struct RollFormCalculator;

impl RollFormCalculator {
    /// F325 钣金滚弯
    ///
    /// # 规则
    /// - 最大折弯半径 ≤2.0in → 全零结果,不触发折弯校形
    /// - 弧长 = radius × π;运行分钟 = 弧长/10ipm + 1.0 搬运
    pub fn compute_sheet(
        sheet: Option<&SheetFacts>,
        quantity: u32,
        config: &CostModelConfig,
    ) -> RollFormOutcome {
        let radius = sheet.map(|s| s.max_bend_radius_in).unwrap_or(0.0);
        if radius <= SHEET_TRIGGER_RADIUS_IN {
            return RollFormOutcome {
                result: WorkCenterResult::zero(WorkCenter::F325),
                requires_press_brake: false,
            };
        }

        let setup_hours = (SETUP_MINUTES / 60.0).max(config.min_setup_hours);
        let arc_length_in = radius * PI;
        let run_minutes = arc_length_in / SHEET_ROLL_FEED_IPM + SHEET_HANDLING_MINUTES;
        let run_hours = run_minutes / 60.0;

        RollFormOutcome {
            result: WorkCenterResult::priced(
                WorkCenter::F325,
                setup_hours,
                run_hours,
                quantity,
                config.rates.f325_rollform,
            ),
            requires_press_brake: false,
        }
    }

    /// F325 管材滚弯（无条件）
    ///
    /// # 规则
    /// - 运行分钟 = 长度/12ipm + 外径 × 0.75
    /// - 壁厚 ≥0.25in → requires_press_brake（F140 校形）
    pub fn compute_tube(
        tube: &TubeFacts,
        quantity: u32,
        config: &CostModelConfig,
    ) -> RollFormOutcome {
        let setup_hours = (SETUP_MINUTES / 60.0).max(config.min_setup_hours);
        let run_minutes =
            tube.length_in / TUBE_FEED_IPM + tube.outer_diameter_in * TUBE_MINUTES_PER_OD_IN;
        let run_hours = run_minutes / 60.0;

        RollFormOutcome {
            result: WorkCenterResult::priced(
                WorkCenter::F325,
                setup_hours,
                run_hours,
                quantity,
                config.rates.f325_rollform,
            ),
            requires_press_brake: tube.wall_thickness_in >= HEAVY_WALL_THRESHOLD_IN,
        }
    }
}
