// ==========================================
// 制造成本估算引擎 - 估算路由器
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 2. 控制流 / 4.4 Router
// 用途: 协调 分类 → 定序计算 → 聚合 的完整管线
// ==========================================
// 红线: 管线纯函数、无共享可变状态,跨零件并行调用安全;
//       管材路线 F325 先于 F140（决策对象显式传递）
// ==========================================

use crate::config::cost_model::CostModelConfig;
use crate::config::options::ProcessingOptions;
use crate::domain::cost::{AssemblyCostSummary, MaterialCost, PartCostRecord, WorkCenterResult};
use crate::domain::part::{BomQuantityMap, PartMetrics};
use crate::domain::types::{PartClass, WorkCenter};
use crate::engine::aggregator::CostAggregator;
use crate::engine::brake::BrakeCalculator;
use crate::engine::classifier::PartClassifier;
use crate::engine::deburr::DeburrCalculator;
use crate::engine::error::EstimateError;
use crate::engine::laser::LaserCalculator;
use crate::engine::material_cost::MaterialCostCalculator;
use crate::engine::rollform::RollFormCalculator;
use crate::engine::saw::SawCalculator;
use crate::engine::speed_provider::LaserSpeedProvider;
use crate::tables::source::{resolve_speed_source, SpeedDataSource};
use std::sync::Arc;
use tracing::{debug, info, warn};

// ==========================================
// CostRouter - 估算路由器
// ==========================================
pub struct CostRouter {
    config: Arc<CostModelConfig>,
    speed: LaserSpeedProvider,
}

impl CostRouter {
    /// 以注入的配置与速度数据源创建路由器
    pub fn new(config: Arc<CostModelConfig>, speed_source: Arc<dyn SpeedDataSource>) -> Self {
        Self {
            config,
            speed: LaserSpeedProvider::new(speed_source),
        }
    }

    /// 默认构造（内置表 + 默认配置）
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(CostModelConfig::default()),
            resolve_speed_source(None),
        )
    }

    /// 单件完整管线: 分类 → 定序计算 → 聚合
    ///
    /// # 参数
    /// - metrics: 几何事实（只读）
    /// - options: 处理选项
    /// - quantity: 估算数量（setup 不乘,run 乘）
    ///
    /// # 返回
    /// - Ok(PartCostRecord): 终结记录
    /// - Err: 输入校验失败,零件跳过进入问题清单
    pub fn estimate_part(
        &self,
        metrics: &PartMetrics,
        options: &ProcessingOptions,
        quantity: u32,
    ) -> Result<PartCostRecord, EstimateError> {
        info!(part_no = %metrics.part_no, quantity, "开始零件成本估算");

        // ==========================================
        // 步骤1: 分类
        // ==========================================
        let (classification, reasons) = PartClassifier::classify(metrics)?;
        debug!(part_no = %metrics.part_no, %classification, "分类终结");

        // ==========================================
        // 步骤2: 按分类定序计算工作中心
        // ==========================================
        let mut centers: Vec<WorkCenterResult> = Vec::new();
        let mut material = MaterialCost::zero();

        match classification {
            PartClass::Purchased => {
                // 外购/客供: 零加工工时,仅打标记中心
                let marker = if metrics.customer_supplied_flag {
                    WorkCenter::CUST
                } else {
                    WorkCenter::NPUR
                };
                centers.push(WorkCenterResult::zero(marker));
            }

            PartClass::SheetMetal => {
                let speed = self
                    .speed
                    .get_speed(metrics.thickness_in, &metrics.material_code);
                centers.push(LaserCalculator::compute_flat(
                    metrics,
                    speed,
                    options.use_waterjet,
                    quantity,
                    &self.config,
                ));

                // 顺序契约: F325 先算,决策对象传给 F140
                let roll =
                    RollFormCalculator::compute_sheet(metrics.sheet.as_ref(), quantity, &self.config);
                let requires_brake = roll.requires_press_brake;
                centers.push(roll.result);
                centers.push(BrakeCalculator::compute(
                    metrics.sheet.as_ref(),
                    requires_brake,
                    quantity,
                    &self.config,
                ));

                centers.push(DeburrCalculator::compute(
                    metrics.cut_length_in,
                    quantity,
                    &self.config,
                ));
                let tapped = metrics
                    .sheet
                    .as_ref()
                    .map(|s| s.tapped_hole_count)
                    .unwrap_or(0);
                centers.push(crate::engine::tap::TapCalculator::compute(
                    tapped,
                    quantity,
                    &self.config,
                ));

                material = MaterialCostCalculator::calculate(
                    metrics.raw_weight_lb(),
                    &metrics.material_code,
                    quantity,
                    options.nest_efficiency,
                );
            }

            PartClass::Tube => {
                if let Some(tube) = &metrics.tube {
                    if tube.is_solid_round_bar() {
                        centers.push(SawCalculator::compute(
                            tube.outer_diameter_in,
                            quantity,
                            &self.config,
                        ));
                    } else {
                        centers.push(LaserCalculator::route_tube(tube, quantity, &self.config));

                        // 顺序契约: F325 先算,厚壁标志再触发 F140
                        let roll = RollFormCalculator::compute_tube(tube, quantity, &self.config);
                        let requires_brake = roll.requires_press_brake;
                        centers.push(roll.result);
                        if requires_brake {
                            centers.push(BrakeCalculator::compute(
                                None,
                                true,
                                quantity,
                                &self.config,
                            ));
                        }
                    }
                }

                material = MaterialCostCalculator::calculate(
                    metrics.raw_weight_lb(),
                    &metrics.material_code,
                    quantity,
                    options.nest_efficiency,
                );
            }

            PartClass::Generic => {
                // 实体机加工件: 本引擎只计材料,加工由外部报价
                material = MaterialCostCalculator::calculate(
                    metrics.raw_weight_lb(),
                    &metrics.material_code,
                    quantity,
                    options.nest_efficiency,
                );
            }

            PartClass::Unknown => {}
        }

        // ==========================================
        // 步骤3: 聚合终结
        // ==========================================
        let record = CostAggregator::finalize(
            &metrics.part_no,
            classification,
            reasons,
            quantity,
            centers,
            material,
        );

        info!(
            part_no = %metrics.part_no,
            grand_total = record.grand_total,
            "零件成本估算完成"
        );
        Ok(record)
    }

    /// 装配/批量估算
    ///
    /// # 规则
    /// - 每个子件独立跑完整管线（数量 1）
    /// - 装配总价 = Σ 子记录 grand_total × BOM 数量
    /// - 失败件跳过并记入问题清单,不阻断整批
    pub fn estimate_assembly(
        &self,
        parts: &[PartMetrics],
        bom: &BomQuantityMap,
        options: &ProcessingOptions,
    ) -> AssemblyCostSummary {
        info!(parts_count = parts.len(), bom_entries = bom.len(), "开始装配估算");

        let mut part_records = Vec::new();
        let mut failed_parts = Vec::new();

        for metrics in parts {
            let bom_quantity = bom.quantity_for(metrics);
            match self.estimate_part(metrics, options, 1) {
                Ok(record) => part_records.push((record, bom_quantity)),
                Err(e) => {
                    warn!(part_no = %metrics.part_no, error = %e, "零件估算失败,跳过");
                    failed_parts.push((metrics.part_no.clone(), e.to_string()));
                }
            }
        }

        let total_cost: f64 = part_records
            .iter()
            .map(|(record, qty)| record.grand_total * *qty as f64)
            .sum();

        info!(
            estimated = part_records.len(),
            failed = failed_parts.len(),
            total_cost,
            "装配估算完成"
        );

        AssemblyCostSummary {
            part_records,
            failed_parts,
            total_cost,
        }
    }
}
