//! 진법 변환기. 입력 문자열 → 32비트 정수 → 목표 진법 문자열.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::conversion::ConversionError;

/// 지원하는 진법.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberBase {
    Decimal,
    Binary,
    Octal,
    Hex,
}

impl NumberBase {
    /// 메뉴 표시 순서.
    pub const ALL: [NumberBase; 4] = [
        NumberBase::Decimal,
        NumberBase::Binary,
        NumberBase::Octal,
        NumberBase::Hex,
    ];

    pub fn radix(self) -> u32 {
        match self {
            NumberBase::Decimal => 10,
            NumberBase::Binary => 2,
            NumberBase::Octal => 8,
            NumberBase::Hex => 16,
        }
    }

    pub fn from_radix(radix: u32) -> Option<Self> {
        match radix {
            10 => Some(NumberBase::Decimal),
            2 => Some(NumberBase::Binary),
            8 => Some(NumberBase::Octal),
            16 => Some(NumberBase::Hex),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NumberBase::Decimal => "Decimal",
            NumberBase::Binary => "Binary",
            NumberBase::Octal => "Octal",
            NumberBase::Hex => "Hex",
        }
    }

    /// 이 진법에서 허용하는 자릿수 문자인지 확인한다. 부호는 10진수에서만 따로 허용한다.
    fn is_digit(self, c: char) -> bool {
        match self {
            NumberBase::Decimal => c.is_ascii_digit(),
            NumberBase::Binary => matches!(c, '0' | '1'),
            NumberBase::Octal => matches!(c, '0'..='7'),
            NumberBase::Hex => c.is_ascii_hexdigit(),
        }
    }

    /// 문자열을 정수로 읽는다. 허용되지 않는 문자, 범위 초과는 0.
    pub fn parse(self, input: &str) -> i32 {
        let digits = match self {
            NumberBase::Decimal => input.strip_prefix(['-', '+']).unwrap_or(input),
            _ => input,
        };
        if digits.is_empty() || !digits.chars().all(|c| self.is_digit(c)) {
            return 0;
        }
        i32::from_str_radix(input, self.radix()).unwrap_or(0)
    }

    /// 정수를 이 진법의 대문자 문자열로 만든다. 음수는 32비트 2의 보수로 표시한다.
    pub fn render(self, value: i32) -> String {
        match self {
            NumberBase::Decimal => value.to_string(),
            NumberBase::Binary => format!("{value:b}"),
            NumberBase::Octal => format!("{value:o}"),
            NumberBase::Hex => format!("{value:X}"),
        }
    }
}

impl std::fmt::Display for NumberBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumberBase {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" | "dec" | "10" => Ok(NumberBase::Decimal),
            "binary" | "bin" | "2" => Ok(NumberBase::Binary),
            "octal" | "oct" | "8" => Ok(NumberBase::Octal),
            "hex" | "hexadecimal" | "16" => Ok(NumberBase::Hex),
            _ => Err(ConversionError::UnknownBase(s.to_string())),
        }
    }
}

/// 진법을 변환한다. 빈 입력은 빈 결과를 돌려준다.
pub fn convert_number_base(value: &str, source: NumberBase, target: NumberBase) -> String {
    let value = value.trim();
    if value.is_empty() {
        return String::new();
    }
    let intermediate = source.parse(value);
    let out = target.render(intermediate);
    debug!(value, %source, %target, intermediate, out = %out, "number base conversion");
    out
}
