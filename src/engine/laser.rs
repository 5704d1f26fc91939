// ==========================================
// 制造成本估算引擎 - 激光切割计算器 (F115 / N145 / F110)
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4.2 Laser Cutting Calculator
// 依据: Legacy_Macro_Parity_v0.9.md - F115 装载工时占比项
// ==========================================
// 红线: 装载工时按"零件毛重/整板重量"占比折算,常量逐位照搬;
//       近零进给必须下限钳制,禁止无穷大流入成本字段
// ==========================================

use crate::config::cost_model::CostModelConfig;
use crate::domain::cost::WorkCenterResult;
use crate::domain::part::{PartMetrics, TubeFacts};
use crate::domain::types::WorkCenter;
use crate::engine::speed_provider::LaserSpeed;
use crate::tables::material::{classify_material_family, density_lb_per_in3};
use tracing::debug;

// ===== 平板工序常量（宏系统逐位照搬）=====
const LASER_SETUP_MINUTES: f64 = 0.5;
const WATERJET_SETUP_MINUTES: f64 = 15.0;
const LASER_LOAD_MINUTES_PER_SHEET: f64 = 5.0;
const WATERJET_LOAD_MINUTES_PER_SHEET: f64 = 30.0;
// 进给下限: 近零进给视为无激光工序
const MIN_FEED_RATE_IPM: f64 = 0.0001;

// ===== 管材分流阈值 =====
// 外径 ±0.05in 容差: 公制→英制换算的浮点漂移
const OD_ROUTING_EPSILON_IN: f64 = 0.05;
const SMALL_TUBE_MAX_OD_IN: f64 = 2.0;
const LARGE_TUBE_MAX_OD_IN: f64 = 6.0;
const SMALL_TUBE_SETUP_MINUTES: f64 = 10.0;
const LARGE_TUBE_SETUP_MINUTES: f64 = 20.0;
const OVERSIZE_TUBE_SETUP_MINUTES: f64 = 3.0;

// ==========================================
// LaserCalculator - 激光切割计算器
// ==========================================
pub struct LaserCalculator;

impl LaserCalculator {
    /// F115 平板激光/水刀
    ///
    /// # 规则
    /// 1. 穿孔合计 = 穿孔数 × 单孔秒（水刀为 0）
    /// 2. 切割分钟 = 切割长度 / 进给（进给下限钳制）
    /// 3. 整板重量 = 厚度 × 60in × 120in × 族密度
    /// 4. 装载分钟 = (毛重/整板重量) × 每板分钟,两重量均正时才计
    /// 5. 准备工时 = max(准备分钟/60, 0.01hr),下限在换算后施加
    /// 6. 运行工时 = 穿孔秒/3600 + (切割分 + 装载分)/60
    ///
    /// # 返回
    /// - 进给 ≤ 下限 → 全零结果（无激光工序,不是错误）
    pub fn compute_flat(
        metrics: &PartMetrics,
        speed: LaserSpeed,
        waterjet: bool,
        quantity: u32,
        config: &CostModelConfig,
    ) -> WorkCenterResult {
        if speed.feed_rate_ipm <= MIN_FEED_RATE_IPM {
            debug!(part_no = %metrics.part_no, "进给为零,跳过 F115");
            return WorkCenterResult::zero(WorkCenter::F115);
        }

        let pierce_total_seconds = if waterjet {
            0.0
        } else {
            metrics.pierce_count as f64 * speed.pierce_seconds
        };

        let cut_minutes = metrics.cut_length_in / speed.feed_rate_ipm.max(MIN_FEED_RATE_IPM);

        let family = classify_material_family(&metrics.material_code);
        let sheet_weight_lb = metrics.thickness_in
            * config.sheet_length_in
            * config.sheet_width_in
            * density_lb_per_in3(family);

        let raw_weight_lb = metrics.raw_weight_lb();
        let load_minutes_per_sheet = if waterjet {
            WATERJET_LOAD_MINUTES_PER_SHEET
        } else {
            LASER_LOAD_MINUTES_PER_SHEET
        };
        let load_minutes = if raw_weight_lb > 0.0 && sheet_weight_lb > 0.0 {
            (raw_weight_lb / sheet_weight_lb) * load_minutes_per_sheet
        } else {
            0.0
        };

        let setup_minutes = if waterjet {
            WATERJET_SETUP_MINUTES
        } else {
            LASER_SETUP_MINUTES
        };
        let setup_hours = (setup_minutes / 60.0).max(config.min_setup_hours);

        let run_hours = pierce_total_seconds / 3600.0 + (cut_minutes + load_minutes) / 60.0;

        let rate = if waterjet {
            config.rates.f115_waterjet
        } else {
            config.rates.f115_laser
        };

        WorkCenterResult::priced(WorkCenter::F115, setup_hours, run_hours, quantity, rate)
    }

    /// 空心管材激光分流 (N145 / F110 / F300)
    ///
    /// # 规则（按外径定工作中心与准备工时,±0.05in 容差）
    /// - OD ≤ 2.0 → N145,准备 10min
    /// - OD ≤ 6.0 → F110,准备 20min
    /// - 更大 → F300 锯切分流,准备 3min
    ///
    /// 运行工时恒为 0: 原 CNC 工时库在本代码库不可用,
    /// 保持零值是已记录的缺口,不得擅自发明替代公式
    pub fn route_tube(
        tube: &TubeFacts,
        quantity: u32,
        config: &CostModelConfig,
    ) -> WorkCenterResult {
        let od = tube.outer_diameter_in;

        let (work_center, setup_minutes) = if od <= SMALL_TUBE_MAX_OD_IN + OD_ROUTING_EPSILON_IN {
            (WorkCenter::N145, SMALL_TUBE_SETUP_MINUTES)
        } else if od <= LARGE_TUBE_MAX_OD_IN + OD_ROUTING_EPSILON_IN {
            (WorkCenter::F110, LARGE_TUBE_SETUP_MINUTES)
        } else {
            (WorkCenter::F300, OVERSIZE_TUBE_SETUP_MINUTES)
        };

        let setup_hours = (setup_minutes / 60.0).max(config.min_setup_hours);
        let run_hours = 0.0;

        WorkCenterResult::priced(
            work_center,
            setup_hours,
            run_hours,
            quantity,
            config.rates.for_work_center(work_center),
        )
    }
}
