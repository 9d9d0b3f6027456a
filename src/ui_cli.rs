use std::io::{BufRead, Write};

use tracing::info;

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::{ConversionError, Hint};
use crate::format::format_result;
use crate::i18n::{keys, Translator};
use crate::number_base::NumberBase;
use crate::quantity::QuantityKind;
use crate::session::{LinearSession, NumberSession};

/// 홈 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Converter(QuantityKind),
    Exit,
}

/// 입출력 스트림 묶음. 실제 실행은 stdin/stdout, 테스트는 메모리 버퍼를 쓴다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝나면(EOF) None.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

/// 홈 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(
    tr: &Translator,
    console: &mut Console<R, W>,
) -> Result<MenuChoice, AppError> {
    for key in [
        keys::HOME_TITLE,
        keys::HOME_LENGTH,
        keys::HOME_VOLUME,
        keys::HOME_NUMBER,
        keys::HOME_CURRENCY,
        keys::HOME_WEIGHT,
        keys::HOME_EXIT,
    ] {
        console.println(tr.t(key))?;
    }
    loop {
        let Some(sel) = console.read_line(tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::Converter(QuantityKind::Length)),
            "2" => return Ok(MenuChoice::Converter(QuantityKind::Volume)),
            "3" => return Ok(MenuChoice::Converter(QuantityKind::Number)),
            "4" => return Ok(MenuChoice::Converter(QuantityKind::Currency)),
            "5" => return Ok(MenuChoice::Converter(QuantityKind::Weight)),
            "0" => return Ok(MenuChoice::Exit),
            _ => console.println(tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 변환기 이름의 번역.
pub fn quantity_title(tr: &Translator, kind: QuantityKind) -> &str {
    tr.t(match kind {
        QuantityKind::Length => keys::QUANTITY_LENGTH,
        QuantityKind::Volume => keys::QUANTITY_VOLUME,
        QuantityKind::Number => keys::QUANTITY_NUMBER,
        QuantityKind::Currency => keys::QUANTITY_CURRENCY,
        QuantityKind::Weight => keys::QUANTITY_WEIGHT,
    })
}

/// 힌트 한 줄. 배율이 1이면 None.
pub fn hint_line(tr: &Translator, hint: Option<Hint>) -> Option<String> {
    let (key, factor) = match hint? {
        Hint::Multiply(v) => (keys::HINT_MULTIPLY, v),
        Hint::Divide(v) => (keys::HINT_DIVIDE, v),
    };
    Some(tr.tf(key, &[("factor", format_result(factor).as_str())]))
}

/// 배율 기반 변환기를 연다. 값 입력을 비우면 홈으로 돌아간다.
pub fn handle_linear_converter<R: BufRead, W: Write>(
    tr: &Translator,
    cfg: &Config,
    kind: QuantityKind,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let table = kind.table().ok_or(ConversionError::NotLinear(kind))?;
    let initial = cfg.default_units.initial_unit(kind).unwrap_or(table.initial);
    let mut session = LinearSession::new(table, initial);
    let title = quantity_title(tr, kind);
    info!(%kind, initial, "converter opened");

    console.println(&tr.tf(keys::CONVERTER_TITLE, &[("title", title)]))?;
    let units = table.names().collect::<Vec<_>>().join(", ");
    console.println(&tr.tf(keys::CONVERTER_UNITS, &[("units", units.as_str())]))?;
    console.println(tr.t(keys::CONVERTER_BACK_NOTE))?;

    loop {
        let prompt = tr.tf(
            keys::PROMPT_VALUE,
            &[("title", title), ("unit", session.input_unit())],
        );
        let value = match console.read_line(&prompt)? {
            Some(v) if !v.is_empty() => v,
            _ => break,
        };

        let from_prompt = tr.tf(keys::PROMPT_FROM_UNIT, &[("unit", session.input_unit())]);
        if let Some(from) = console.read_line(&from_prompt)? {
            if !from.is_empty() && !session.set_input_unit(&from) {
                console.println(&tr.tf(keys::UNKNOWN_UNIT, &[("unit", from.as_str())]))?;
                continue;
            }
        }
        let to_prompt = tr.tf(keys::PROMPT_TO_UNIT, &[("unit", session.output_unit())]);
        if let Some(to) = console.read_line(&to_prompt)? {
            if !to.is_empty() && !session.set_output_unit(&to) {
                console.println(&tr.tf(keys::UNKNOWN_UNIT, &[("unit", to.as_str())]))?;
                continue;
            }
        }

        session.set_input(&value);
        let result = format_result(session.result());
        console.println(&tr.tf(
            keys::RESULT,
            &[("value", result.as_str()), ("unit", session.output_unit())],
        ))?;
        if let Some(line) = hint_line(tr, session.hint()) {
            console.println(&line)?;
        }
    }
    info!(%kind, "converter closed");
    Ok(())
}

/// 진법 변환기를 연다.
pub fn handle_number_converter<R: BufRead, W: Write>(
    tr: &Translator,
    cfg: &Config,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let (input_base, output_base) = cfg.default_units.number_bases();
    let mut session = NumberSession::new(input_base, output_base);
    info!("number converter opened");
    console.println(&tr.tf(
        keys::CONVERTER_TITLE,
        &[("title", quantity_title(tr, QuantityKind::Number))],
    ))?;
    console.println(tr.t(keys::NUMBER_SYSTEMS))?;
    console.println(tr.t(keys::CONVERTER_BACK_NOTE))?;

    loop {
        let value = match console.read_line(tr.t(keys::PROMPT_NUMBER_VALUE))? {
            Some(v) if !v.is_empty() => v,
            _ => break,
        };

        let from_prompt = tr.tf(keys::PROMPT_FROM_BASE, &[("base", session.input_base().name())]);
        if let Some(from) = console.read_line(&from_prompt)? {
            if !from.is_empty() {
                match from.parse::<NumberBase>() {
                    Ok(base) => session.set_input_base(base),
                    Err(_) => {
                        console.println(&tr.tf(keys::UNKNOWN_BASE, &[("base", from.as_str())]))?;
                        continue;
                    }
                }
            }
        }
        let to_prompt = tr.tf(keys::PROMPT_TO_BASE, &[("base", session.output_base().name())]);
        if let Some(to) = console.read_line(&to_prompt)? {
            if !to.is_empty() {
                match to.parse::<NumberBase>() {
                    Ok(base) => session.set_output_base(base),
                    Err(_) => {
                        console.println(&tr.tf(keys::UNKNOWN_BASE, &[("base", to.as_str())]))?;
                        continue;
                    }
                }
            }
        }

        session.set_input(&value);
        console.println(&tr.tf(keys::NUMBER_RESULT, &[("value", session.result())]))?;
    }
    info!("number converter closed");
    Ok(())
}
