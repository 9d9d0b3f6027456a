//! 변환 계산 로직을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod format;
pub mod i18n;
pub mod number_base;
pub mod quantity;
pub mod session;
pub mod ui_cli;
pub mod units;

pub use conversion::{convert_linear, ConversionError, Hint};
pub use format::format_result;
pub use number_base::{convert_number_base, NumberBase};
