use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use units_converter::app::{self, AppError};
use units_converter::config::{self, Config, DEFAULT_CONFIG_PATH};
use units_converter::i18n::{self, keys, Translator};
use units_converter::quantity::QuantityKind;
use units_converter::ui_cli::Console;

#[derive(Parser)]
#[command(name = "units_converter")]
#[command(about = "Length, volume, number base, currency and weight converter", long_about = None)]
struct Cli {
    /// UI language (ko, en, auto)
    #[arg(long, default_value = "auto")]
    lang: String,

    /// Settings file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Language pack directory
    #[arg(long, default_value = "locales")]
    locales: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units of one category
    Convert {
        /// length, volume, currency or weight
        kind: QuantityKind,
        /// Value to convert (non-numeric input counts as 0)
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source unit (e.g. km, mL, USD, lb)
        from: String,
        /// Target unit
        to: String,
    },

    /// Convert a number between Decimal, Binary, Octal and Hex
    Base {
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Source system (decimal, binary, octal, hex or 10/2/8/16)
        from: String,
        /// Target system
        to: String,
    },

    /// List the units of a category
    Units { kind: QuantityKind },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("units_converter=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = try_run(&cli) {
        tracing::error!(error = %err, "fatal");
        // 설정을 읽지 못했을 수도 있으므로 CLI 플래그와 시스템 로케일만으로 언어를 정한다
        let lang = i18n::resolve_language(&cli.lang, None);
        let tr = Translator::new_with_pack(&lang, Some(&cli.locales));
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn translator(cli: &Cli, cfg: &Config) -> Translator {
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    Translator::new_with_pack(&lang, Some(&cli.locales))
}

/// base/units 명령은 설정 파일을 읽지 않는다. convert는 읽기만 하고, 대화형 모드만 기본 설정을 생성한다.
fn try_run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Some(Commands::Convert {
            kind,
            value,
            from,
            to,
        }) => {
            let cfg = config::load(&cli.config)?;
            let tr = translator(cli, &cfg);
            for line in app::convert_command(&tr, *kind, value, from, to)? {
                println!("{line}");
            }
        }
        Some(Commands::Base { value, from, to }) => {
            println!("{}", app::base_command(value, from, to)?);
        }
        Some(Commands::Units { kind }) => {
            for line in app::units_command(*kind) {
                println!("{line}");
            }
        }
        None => {
            let cfg = config::load_or_default(&cli.config)?;
            let tr = translator(cli, &cfg);
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            app::run(&cfg, &tr, &mut console)?;
        }
    }
    Ok(())
}
