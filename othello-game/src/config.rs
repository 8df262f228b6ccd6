//! 对局配置
//!
//! 从 JSON 文件加载，缺省字段使用默认值

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use othello_ai::AiConfig;
use othello_core::Disc;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 指定配置文件路径的环境变量
pub const CONFIG_ENV: &str = "OTHELLO_CONFIG";

/// 对局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 人类执子颜色，电脑执另一方
    pub human_disc: Disc,
    /// 电脑落子前的展示延迟（毫秒），仅由前端使用
    pub computer_delay_ms: u64,
    /// AI 配置
    pub ai: AiConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_disc: Disc::Black,
            computer_delay_ms: 500,
            ai: AiConfig::default(),
        }
    }
}

impl GameConfig {
    /// 电脑执子颜色
    pub fn computer_disc(&self) -> Disc {
        self.human_disc.opponent()
    }

    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {:?}", path))?;
        debug!("已加载配置 {:?}: {:?}", path, config);
        Ok(config)
    }

    /// 按优先级解析配置：命令行参数 > 环境变量 > 默认值
    pub fn resolve(arg: Option<&str>) -> Result<Self> {
        if let Some(path) = arg {
            return Self::load(Path::new(path));
        }
        match env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}
