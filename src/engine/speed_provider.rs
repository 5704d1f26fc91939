// ==========================================
// 制造成本估算引擎 - 激光速度提供器
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 4.1 Laser Speed Provider
// 依据: Legacy_Macro_Parity_v0.9.md - 速度行选择规则
// ==========================================
// 职责: 厚度+材料代码 → 进给速度/穿孔时间
// 红线: 永不报错;空表退化为全零结果,由调用方按
//       "无激光工序"处理,禁止除以近零进给
// ==========================================

use crate::tables::material::classify_material_family;
use crate::tables::source::SpeedDataSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

// 行选择容差: 向上取规格,允许 0.005in 向下漂移
pub const GAUGE_TOLERANCE_IN: f64 = 0.005;

// ==========================================
// LaserSpeed - 速度查询结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserSpeed {
    pub feed_rate_ipm: f64,  // 进给速度（in/min,0 表示无激光工序）
    pub pierce_seconds: f64, // 单孔穿孔时间（s）
}

impl LaserSpeed {
    pub fn zero() -> Self {
        Self {
            feed_rate_ipm: 0.0,
            pierce_seconds: 0.0,
        }
    }
}

// ==========================================
// LaserSpeedProvider - 速度提供器
// ==========================================
pub struct LaserSpeedProvider {
    source: Arc<dyn SpeedDataSource>,
}

impl LaserSpeedProvider {
    /// 以构造期选定的数据源创建提供器
    pub fn new(source: Arc<dyn SpeedDataSource>) -> Self {
        Self { source }
    }

    /// 速度查询
    ///
    /// # 规则
    /// 1. 按材料代码归族选表（碳钢/铝/不锈钢默认）
    /// 2. 阈值 = thickness − 0.005,升序取第一行 thickness ≥ 阈值
    /// 3. 全部行太薄 → 最厚行兜底
    /// 4. 空表 → 全零结果（不是错误）
    pub fn get_speed(&self, thickness_in: f64, material_code: &str) -> LaserSpeed {
        let family = classify_material_family(material_code);
        let table = self.source.tables().table_for(family);

        match table.select(thickness_in, GAUGE_TOLERANCE_IN) {
            Some(row) => LaserSpeed {
                feed_rate_ipm: row.feed_rate_ipm,
                pierce_seconds: row.pierce_seconds,
            },
            None => {
                debug!(
                    %family,
                    thickness_in,
                    "速度表为空,按无激光工序处理"
                );
                LaserSpeed::zero()
            }
        }
    }
}
