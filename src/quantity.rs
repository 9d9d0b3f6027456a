use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;
use crate::units::{UnitTable, CURRENCY_UNITS, LENGTH_UNITS, VOLUME_UNITS, WEIGHT_UNITS};

/// 홈 메뉴에서 고를 수 있는 변환기 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Length,
    Volume,
    Number,
    Currency,
    Weight,
}

impl QuantityKind {
    /// 홈 메뉴 순서.
    pub const ALL: [QuantityKind; 5] = [
        QuantityKind::Length,
        QuantityKind::Volume,
        QuantityKind::Number,
        QuantityKind::Currency,
        QuantityKind::Weight,
    ];

    /// 배율 기반 변환기의 단위 테이블. 진법 변환기는 테이블이 없다.
    pub fn table(self) -> Option<&'static UnitTable> {
        match self {
            QuantityKind::Length => Some(&LENGTH_UNITS),
            QuantityKind::Volume => Some(&VOLUME_UNITS),
            QuantityKind::Currency => Some(&CURRENCY_UNITS),
            QuantityKind::Weight => Some(&WEIGHT_UNITS),
            QuantityKind::Number => None,
        }
    }

    pub fn is_linear(self) -> bool {
        self.table().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QuantityKind::Length => "length",
            QuantityKind::Volume => "volume",
            QuantityKind::Number => "number",
            QuantityKind::Currency => "currency",
            QuantityKind::Weight => "weight",
        }
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "len" => Ok(QuantityKind::Length),
            "volume" | "vol" => Ok(QuantityKind::Volume),
            "number" | "num" | "base" => Ok(QuantityKind::Number),
            "currency" | "cur" | "money" => Ok(QuantityKind::Currency),
            "weight" | "mass" => Ok(QuantityKind::Weight),
            _ => Err(ConversionError::UnknownQuantity(s.to_string())),
        }
    }
}
