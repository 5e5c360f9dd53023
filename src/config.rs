use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// 主题配置
///
/// 颜色按名字书写（"cyan"、"light red"、"#aabbcc"），
/// 认不出来的值回退到内置默认色。配置只影响外观，
/// 不改变编辑和求值语义。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub accent: String,
    pub error: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: "cyan".to_string(),
            error: "red".to_string(),
        }
    }
}

impl Theme {
    /// 强调色（标题、功能键）
    pub fn accent_color(&self) -> Color {
        Color::from_str(&self.accent).unwrap_or(Color::Cyan)
    }

    /// 错误状态显示色
    pub fn error_color(&self) -> Color {
        Color::from_str(&self.error).unwrap_or(Color::Red)
    }
}

/// 配置文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
}

/// 获取配置目录路径 (~/.config/suanpan/)
pub fn config_dir() -> io::Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户配置目录"))?
        .join("suanpan");

    fs::create_dir_all(&dir)?;

    Ok(dir)
}

/// 从TOML文件加载配置，文件不存在时写出默认配置供用户修改
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        let config = Config::default();
        save_config(&config, path)?;
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    let config: Config =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(config)
}

/// 保存配置到TOML文件
pub fn save_config(config: &Config, path: &Path) -> io::Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, content)
}
