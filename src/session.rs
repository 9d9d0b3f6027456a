//! 변환기 한 개를 열어 둔 동안의 임시 상태. 변환기를 닫으면 버린다.
//!
//! 입력값이나 단위가 바뀔 때마다 결과를 다시 계산한다.

use crate::conversion::{self, Hint};
use crate::format::format_result;
use crate::number_base::{convert_number_base, NumberBase};
use crate::units::UnitTable;

/// 배율 기반 변환기(길이/체적/통화/무게)의 상태.
#[derive(Debug, Clone)]
pub struct LinearSession {
    table: &'static UnitTable,
    input: String,
    input_unit: &'static str,
    output_unit: &'static str,
    input_factor: f64,
    output_factor: f64,
    net_factor: f64,
    result: f64,
}

impl LinearSession {
    /// 입력/출력 단위를 모두 `initial`로 맞춘다. 테이블에 없는 단위면 테이블의 초기 단위를 쓴다.
    pub fn new(table: &'static UnitTable, initial: &str) -> Self {
        let (unit, factor) = table
            .resolve(initial)
            .or_else(|| table.resolve(table.initial))
            .unwrap_or((table.initial, 1.0));
        Self {
            table,
            input: String::new(),
            input_unit: unit,
            output_unit: unit,
            input_factor: factor,
            output_factor: factor,
            net_factor: 1.0,
            result: 0.0,
        }
    }

    pub fn table(&self) -> &'static UnitTable {
        self.table
    }

    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.recalculate();
    }

    /// 입력 단위를 바꾼다. 테이블에 없는 이름이면 false를 돌려주고 상태는 그대로 둔다.
    pub fn set_input_unit(&mut self, unit: &str) -> bool {
        match self.table.resolve(unit) {
            Some((name, factor)) => {
                self.input_unit = name;
                self.input_factor = factor;
                self.recalculate();
                true
            }
            None => false,
        }
    }

    /// 출력 단위를 바꾼다. 테이블에 없는 이름이면 false.
    pub fn set_output_unit(&mut self, unit: &str) -> bool {
        match self.table.resolve(unit) {
            Some((name, factor)) => {
                self.output_unit = name;
                self.output_factor = factor;
                self.recalculate();
                true
            }
            None => false,
        }
    }

    fn recalculate(&mut self) {
        self.net_factor = conversion::net_factor(self.input_factor, self.output_factor);
        self.result =
            conversion::convert_linear(&self.input, self.input_factor, self.output_factor);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_unit(&self) -> &'static str {
        self.input_unit
    }

    pub fn output_unit(&self) -> &'static str {
        self.output_unit
    }

    pub fn net_factor(&self) -> f64 {
        self.net_factor
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn hint(&self) -> Option<Hint> {
        Hint::from_net_factor(self.net_factor)
    }

    /// `<값> <출력 단위>`
    pub fn formatted_result(&self) -> String {
        format!("{} {}", format_result(self.result), self.output_unit)
    }
}

/// 진법 변환기의 상태. 처음에는 10진수 → 10진수.
#[derive(Debug, Clone)]
pub struct NumberSession {
    input: String,
    input_base: NumberBase,
    output_base: NumberBase,
    result: String,
}

impl Default for NumberSession {
    fn default() -> Self {
        Self::new(NumberBase::Decimal, NumberBase::Decimal)
    }
}

impl NumberSession {
    pub fn new(input_base: NumberBase, output_base: NumberBase) -> Self {
        Self {
            input: String::new(),
            input_base,
            output_base,
            result: String::new(),
        }
    }

    pub fn set_input(&mut self, value: &str) {
        self.input = value.to_string();
        self.recalculate();
    }

    pub fn set_input_base(&mut self, base: NumberBase) {
        self.input_base = base;
        self.recalculate();
    }

    pub fn set_output_base(&mut self, base: NumberBase) {
        self.output_base = base;
        self.recalculate();
    }

    // 입력이 비면 직전 결과를 그대로 둔다
    fn recalculate(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        self.result = convert_number_base(&self.input, self.input_base, self.output_base);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_base(&self) -> NumberBase {
        self.input_base
    }

    pub fn output_base(&self) -> NumberBase {
        self.output_base
    }

    pub fn result(&self) -> &str {
        &self.result
    }
}
