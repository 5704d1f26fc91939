// ==========================================
// 制造成本估算引擎 - 速度表数据源
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 9. 两级数据源策略
// ==========================================
// 职责: 构造期选定数据源（JSON 文件 → 内置表兜底）
// 红线: 业务逻辑内不做运行时分支,数据源在构造期一次选定
// ==========================================

use crate::tables::error::TableError;
use crate::tables::speed::SpeedTableSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

// ==========================================
// SpeedDataSource Trait
// ==========================================
// 实现者: JsonSpeedSource（车间维护的 JSON 文件）
//         BuiltinSpeedSource（宏系统常量兜底）
pub trait SpeedDataSource: Send + Sync {
    /// 三族速度表（构造后只读）
    fn tables(&self) -> &SpeedTableSet;

    /// 数据来源描述（日志用）
    fn origin(&self) -> &str;
}

// ==========================================
// BuiltinSpeedSource - 内置表数据源
// ==========================================
pub struct BuiltinSpeedSource {
    tables: SpeedTableSet,
}

impl BuiltinSpeedSource {
    pub fn new() -> Self {
        Self {
            tables: SpeedTableSet::builtin(),
        }
    }
}

impl Default for BuiltinSpeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeedDataSource for BuiltinSpeedSource {
    fn tables(&self) -> &SpeedTableSet {
        &self.tables
    }

    fn origin(&self) -> &str {
        "builtin"
    }
}

// ==========================================
// JsonSpeedSource - JSON 文件数据源
// ==========================================
pub struct JsonSpeedSource {
    tables: SpeedTableSet,
    origin: String,
}

impl JsonSpeedSource {
    /// 从 JSON 文件加载并校验速度表
    ///
    /// # 返回
    /// - Ok: 加载且校验通过
    /// - Err: 文件不可读 / JSON 非法 / 厚度乱序
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| TableError::FileRead(format!("{}: {}", path.display(), e)))?;

        let tables: SpeedTableSet =
            serde_json::from_str(&raw).map_err(|e| TableError::Parse(e.to_string()))?;

        tables.validate()?;

        Ok(Self {
            tables,
            origin: path.display().to_string(),
        })
    }
}

impl SpeedDataSource for JsonSpeedSource {
    fn tables(&self) -> &SpeedTableSet {
        &self.tables
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}

// ==========================================
// 数据源解析
// ==========================================

/// 默认速度表文件路径（用户配置目录）
pub fn default_speed_table_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fab-cost-engine").join("laser_speed_tables.json"))
}

/// 构造期数据源二选一
///
/// # 规则
/// 1. 给定路径存在且加载成功 → JSON 数据源
/// 2. 否则 → 内置表兜底（warn 日志,不是错误）
pub fn resolve_speed_source(path: Option<&Path>) -> Arc<dyn SpeedDataSource> {
    if let Some(path) = path {
        match JsonSpeedSource::load(path) {
            Ok(source) => {
                info!(path = %path.display(), "激光速度表加载自 JSON 文件");
                return Arc::new(source);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "速度表 JSON 不可用,回退内置表");
            }
        }
    }
    Arc::new(BuiltinSpeedSource::new())
}
