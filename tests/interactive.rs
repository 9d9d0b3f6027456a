//! 대화형 메뉴 흐름 테스트. 표준 입출력 대신 메모리 버퍼를 사용한다.
use std::io::Cursor;

use units_converter::app;
use units_converter::config::Config;
use units_converter::i18n::Translator;
use units_converter::quantity::QuantityKind;
use units_converter::ui_cli::{main_menu, Console, MenuChoice};

fn run_session(script: &str) -> String {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    app::run(&cfg, &tr, &mut console).expect("session");
    String::from_utf8(console.into_output()).expect("utf8")
}

#[test]
fn menu_retries_on_invalid_choice() {
    let tr = Translator::new("en");
    let mut console = Console::new(Cursor::new(b"9\n4\n".to_vec()), Vec::new());
    let choice = main_menu(&tr, &mut console).expect("menu");
    assert_eq!(choice, MenuChoice::Converter(QuantityKind::Currency));
    let out = String::from_utf8(console.into_output()).expect("utf8");
    assert!(out.contains("Invalid selection"));
}

#[test]
fn end_of_input_exits() {
    let out = run_session("");
    assert!(out.contains("Goodbye."));
}

#[test]
fn length_conversion_prints_result_and_hint() {
    let out = run_session("1\n100\nkm\nm\n\n0\n");
    assert!(out.contains("-- Length Converter --"), "{out}");
    assert!(out.contains("Result: 100000.00 m"), "{out}");
    assert!(out.contains("Hint: Multiply by 1000.00"), "{out}");
}

#[test]
fn blank_units_keep_current_selection() {
    // 처음에는 L → L 이므로 힌트가 없다
    let out = run_session("2\n5\n\n\n\n0\n");
    assert!(out.contains("Result: 5.00 L"), "{out}");
    assert!(!out.contains("Hint:"), "{out}");
}

#[test]
fn unknown_unit_is_reported_and_loop_continues() {
    let out = run_session("5\n1\nslug\n3\nkg\ng\n\n0\n");
    assert!(out.contains("Unknown unit: slug"), "{out}");
    assert!(out.contains("Result: 3000.00 g"), "{out}");
}

#[test]
fn number_converter_round() {
    let out = run_session("3\nFF\nhex\nbinary\n\n0\n");
    assert!(out.contains("Result: 11111111"), "{out}");
}

#[test]
fn unknown_number_system_is_reported_and_loop_continues() {
    let out = run_session("3\n1\nbase3\n10\ndecimal\nhex\n\n0\n");
    assert!(out.contains("Unknown number system: base3"), "{out}");
    assert!(!out.contains("Unknown unit"), "{out}");
    assert!(out.contains("Result: A"), "{out}");
}
