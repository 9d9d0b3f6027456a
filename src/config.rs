use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::number_base::NumberBase;
use crate::quantity::QuantityKind;
use crate::units::UnitTable;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 변환기를 열었을 때 처음 선택되는 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub length: String,
    pub volume: String,
    pub weight: String,
    pub currency: String,
    /// 진법 이름 (Decimal, Binary, Octal, Hex 또는 2/8/10/16)
    pub number_input: String,
    pub number_output: String,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: "m".into(),
            volume: "L".into(),
            weight: "kg".into(),
            currency: "INR".into(),
            number_input: NumberBase::Decimal.name().into(),
            number_output: NumberBase::Decimal.name().into(),
        }
    }
}

impl DefaultUnits {
    /// 분류별 초기 단위. 테이블에 없는 이름이면 기준 단위로 되돌린다.
    pub fn initial_unit(&self, kind: QuantityKind) -> Option<&'static str> {
        let table = kind.table()?;
        let configured = match kind {
            QuantityKind::Length => &self.length,
            QuantityKind::Volume => &self.volume,
            QuantityKind::Weight => &self.weight,
            QuantityKind::Currency => &self.currency,
            QuantityKind::Number => return None,
        };
        Some(resolve_or_initial(table, configured))
    }

    /// 진법 변환기의 (입력, 출력) 초기 진법. 알 수 없는 이름은 Decimal로 되돌린다.
    pub fn number_bases(&self) -> (NumberBase, NumberBase) {
        (
            base_or_decimal("number_input", &self.number_input),
            base_or_decimal("number_output", &self.number_output),
        )
    }
}

fn base_or_decimal(field: &str, configured: &str) -> NumberBase {
    configured.parse().unwrap_or_else(|_| {
        warn!(field, configured, "unknown default number system, using Decimal");
        NumberBase::Decimal
    })
}

fn resolve_or_initial(table: &'static UnitTable, configured: &str) -> &'static str {
    match table.resolve(configured) {
        Some((name, _)) => name,
        None => {
            warn!(
                category = table.category,
                configured, "unknown default unit, using {}", table.initial
            );
            table.initial
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (ko, en-us 등). 없으면 시스템 로케일을 따른다.
    pub language: Option<String>,
    pub default_units: DefaultUnits,
    #[serde(skip)]
    path: Option<PathBuf>,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 읽는다. 파일이 없으면 디스크를 건드리지 않고 기본 설정을 돌려준다.
pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        cfg
    } else {
        Config::default()
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        return load(path);
    }
    let mut cfg = Config::default();
    save_config(&cfg, path)?;
    info!(path = %path.display(), "default config written");
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드한 경로(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
        save_config(self, path)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}
