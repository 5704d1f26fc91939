// ==========================================
// 制造成本估算引擎 - 成本模型配置
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 9. 配置注入
// 依据: Legacy_Macro_Parity_v0.9.md - 费率/板材常量
// ==========================================
// 职责: 小时费率、板材规格、引擎级下限常量
// 红线: 默认值与宏系统逐位一致;配置构造后只读注入,
//       禁止可变全局状态
// ==========================================

use crate::domain::types::WorkCenter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ==========================================
// HourlyRates - 工作中心小时费率 (USD/hr)
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HourlyRates {
    pub f115_laser: f64,
    pub f115_waterjet: f64,
    pub f140_brake: f64,
    pub f210_deburr: f64,
    pub f220_tap: f64,
    pub f300_saw: f64,
    pub f325_rollform: f64,
    pub f110_tube_laser: f64,
    pub n145_tube_laser: f64,
}

impl Default for HourlyRates {
    fn default() -> Self {
        Self {
            f115_laser: 165.0,
            f115_waterjet: 195.0,
            f140_brake: 95.0,
            f210_deburr: 60.0,
            f220_tap: 70.0,
            f300_saw: 55.0,
            f325_rollform: 110.0,
            f110_tube_laser: 150.0,
            n145_tube_laser: 135.0,
        }
    }
}

impl HourlyRates {
    /// 按工作中心取费率
    ///
    /// 外购/客供标记中心无费率,返回 0
    pub fn for_work_center(&self, wc: WorkCenter) -> f64 {
        match wc {
            WorkCenter::F115 => self.f115_laser,
            WorkCenter::F140 => self.f140_brake,
            WorkCenter::F210 => self.f210_deburr,
            WorkCenter::F220 => self.f220_tap,
            WorkCenter::F300 => self.f300_saw,
            WorkCenter::F325 => self.f325_rollform,
            WorkCenter::F110 => self.f110_tube_laser,
            WorkCenter::N145 => self.n145_tube_laser,
            WorkCenter::NPUR | WorkCenter::CUST => 0.0,
        }
    }
}

// ==========================================
// CostModelConfig - 成本模型配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModelConfig {
    // ===== 费率 =====
    pub rates: HourlyRates,

    // ===== 板材规格（原料整板,重量占比折算装载工时用）=====
    pub sheet_length_in: f64, // 60
    pub sheet_width_in: f64,  // 120

    // ===== 引擎级下限 =====
    // 红线: 0.01hr 准备工时下限在"分→时"换算之后施加,引擎全局有效
    pub min_setup_hours: f64,

    // ===== 套料 =====
    pub default_nest_efficiency: f64, // 默认 0.85

    // ===== 质量校验 =====
    pub mass_tolerance_pct: f64, // 默认 5%
}

impl Default for CostModelConfig {
    fn default() -> Self {
        Self {
            rates: HourlyRates::default(),
            sheet_length_in: 60.0,
            sheet_width_in: 120.0,
            min_setup_hours: 0.01,
            default_nest_efficiency: 0.85,
            mass_tolerance_pct: 5.0,
        }
    }
}

impl CostModelConfig {
    /// 默认配置文件路径（用户配置目录）
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fab-cost-engine").join("cost_model.json"))
    }

    /// 加载配置,失败时回退默认值
    ///
    /// # 规则
    /// 1. 文件存在且 JSON 合法 → 文件值
    /// 2. 否则 → 默认常量（warn 日志,不是错误）
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<CostModelConfig>(&raw) {
                Ok(config) => {
                    info!(path = %path.display(), "成本模型配置加载自 JSON 文件");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "配置 JSON 非法,回退默认值");
                    Self::default()
                }
            },
            Err(_) => {
                warn!(path = %path.display(), "配置文件不存在,使用默认值");
                Self::default()
            }
        }
    }
}
