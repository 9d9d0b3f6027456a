use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const HOME_TITLE: &str = "home.title";
    pub const HOME_LENGTH: &str = "home.length";
    pub const HOME_VOLUME: &str = "home.volume";
    pub const HOME_NUMBER: &str = "home.number";
    pub const HOME_CURRENCY: &str = "home.currency";
    pub const HOME_WEIGHT: &str = "home.weight";
    pub const HOME_EXIT: &str = "home.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const CONVERTER_TITLE: &str = "converter.title";
    pub const CONVERTER_UNITS: &str = "converter.units";
    pub const CONVERTER_BACK_NOTE: &str = "converter.back_note";
    pub const PROMPT_VALUE: &str = "prompt.value";
    pub const PROMPT_FROM_UNIT: &str = "prompt.from_unit";
    pub const PROMPT_TO_UNIT: &str = "prompt.to_unit";
    pub const UNKNOWN_UNIT: &str = "error.unknown_unit";
    pub const UNKNOWN_BASE: &str = "error.unknown_base";
    pub const RESULT: &str = "result.value";
    pub const HINT_MULTIPLY: &str = "result.hint_multiply";
    pub const HINT_DIVIDE: &str = "result.hint_divide";

    pub const NUMBER_SYSTEMS: &str = "number.systems";
    pub const PROMPT_NUMBER_VALUE: &str = "prompt.number_value";
    pub const PROMPT_FROM_BASE: &str = "prompt.from_base";
    pub const PROMPT_TO_BASE: &str = "prompt.to_base";
    pub const NUMBER_RESULT: &str = "result.number";

    pub const QUANTITY_LENGTH: &str = "quantity.length";
    pub const QUANTITY_VOLUME: &str = "quantity.volume";
    pub const QUANTITY_NUMBER: &str = "quantity.number";
    pub const QUANTITY_CURRENCY: &str = "quantity.currency";
    pub const QUANTITY_WEIGHT: &str = "quantity.weight";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
    /// 선택 언어의 내장 언어팩
    built_in: HashMap<String, String>,
    /// 영어 내장 언어팩
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 내장 언어팩으로 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let built_in = built_in_pack(lang.as_code()).unwrap_or_default();
        let strings = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .unwrap_or_default();
        let fallback = built_in_pack("en").unwrap_or_default();
        debug!(
            lang = lang.as_code(),
            overrides = strings.len(),
            "translator ready"
        );
        Self {
            lang,
            strings,
            built_in,
            fallback,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 디스크 언어팩 → 선택 언어 내장팩 순으로 찾는다.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.strings
            .get(key)
            .or_else(|| self.built_in.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 선택 언어 → 영어 → 키 자체 순으로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.lookup(key)
            .or_else(|| self.fallback.get(key).map(String::as_str))
            .unwrap_or(key)
    }

    /// `{name}` 자리표시자를 채운 번역을 돌려준다.
    pub fn tf(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.t(key).to_string();
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [섹션] 아래 key = "value".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            warn!(path = %path.display(), "language pack is empty or invalid, ignoring");
        }
        map
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[&str] = &[
        keys::ERROR_PREFIX,
        keys::APP_EXIT,
        keys::HOME_TITLE,
        keys::HOME_LENGTH,
        keys::HOME_VOLUME,
        keys::HOME_NUMBER,
        keys::HOME_CURRENCY,
        keys::HOME_WEIGHT,
        keys::HOME_EXIT,
        keys::PROMPT_MENU_SELECT,
        keys::INVALID_SELECTION_RETRY,
        keys::CONVERTER_TITLE,
        keys::CONVERTER_UNITS,
        keys::CONVERTER_BACK_NOTE,
        keys::PROMPT_VALUE,
        keys::PROMPT_FROM_UNIT,
        keys::PROMPT_TO_UNIT,
        keys::UNKNOWN_UNIT,
        keys::UNKNOWN_BASE,
        keys::RESULT,
        keys::HINT_MULTIPLY,
        keys::HINT_DIVIDE,
        keys::NUMBER_SYSTEMS,
        keys::PROMPT_NUMBER_VALUE,
        keys::PROMPT_FROM_BASE,
        keys::PROMPT_TO_BASE,
        keys::NUMBER_RESULT,
        keys::QUANTITY_LENGTH,
        keys::QUANTITY_VOLUME,
        keys::QUANTITY_NUMBER,
        keys::QUANTITY_CURRENCY,
        keys::QUANTITY_WEIGHT,
    ];

    #[test]
    fn built_in_packs_cover_every_key() {
        for code in ["en", "ko"] {
            let pack = built_in_pack(code).expect("built-in pack");
            for key in ALL_KEYS {
                assert!(pack.contains_key(*key), "{code} pack misses {key}");
            }
        }
    }

    #[test]
    fn placeholders_are_filled() {
        let tr = Translator::new("en");
        let line = tr.tf(keys::RESULT, &[("value", "2.00"), ("unit", "km")]);
        assert_eq!(line, "Result: 2.00 km");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(tr.language(), Language::Ko);
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language("ko", Some("en")), "ko");
        assert_eq!(resolve_language("auto", Some("en-US")), "en-us");
    }

    #[test]
    fn partial_disk_pack_falls_back_to_same_language() {
        let dir = std::env::temp_dir().join(format!("units_converter_locales_{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create dir");
        fs::write(dir.join("ko.toml"), "[home]\ntitle = \"홈\"\n").expect("write pack");

        let tr = Translator::new_with_pack("ko", dir.to_str());
        assert_eq!(tr.t(keys::HOME_TITLE), "홈");
        assert_eq!(tr.t(keys::HOME_EXIT), "0) 종료");

        let _ = fs::remove_dir_all(&dir);
    }
}
