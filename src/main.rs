//! 命令行程序入口

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use lingovox::cli::{format_failure, format_success, Prompter};
use lingovox::env::{self, EnvConfig};
use lingovox::utils::languages::{ensure_distinct, language_name, LANGUAGES};
use lingovox::LingoService;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version,
    about = "Translate text between languages and export the translation as speech"
)]
struct Cli {
    /// Source language code (prompted when omitted)
    #[arg(short, long)]
    source: Option<String>,

    /// Target language code (prompted when omitted)
    #[arg(short, long)]
    target: Option<String>,

    /// Text to translate (prompted when omitted)
    #[arg(long)]
    text: Option<String>,

    /// Generate an MP3 of the translation without asking
    #[arg(short, long)]
    audio: bool,

    /// Write audio to this file instead of a temporary file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep the temporary audio file without asking
    #[arg(short, long)]
    keep: bool,

    /// Print the supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Print the environment variable reference and exit
    #[arg(long)]
    env_docs: bool,

    /// Log level (overrides LINGOVOX_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    env::load_dotenv();
    let cli = Cli::parse();

    // 这两个选项只输出静态信息，不依赖环境配置
    if cli.env_docs {
        print!("{}", env::generate_env_docs());
        return;
    }

    if cli.list_languages {
        for (name, code) in LANGUAGES {
            println!("{:<6}{}", code, name);
        }
        return;
    }

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // 日志写到 stderr，提示和结果写到 stdout
    let color = !config.no_color && io::stdout().is_terminal();
    let log_ansi = !config.no_color && io::stderr().is_terminal();
    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    lingovox::logging::init_tracing(&log_level, log_ansi);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    match run(&cli, &config, &mut prompter, color) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", format_failure(&format!("Error: {}", e), color));
            process::exit(1);
        }
    }
}

fn run<R: BufRead, W: Write>(
    cli: &Cli,
    config: &EnvConfig,
    prompter: &mut Prompter<R, W>,
    color: bool,
) -> io::Result<i32> {
    let interactive = cli.source.is_none() || cli.target.is_none() || cli.text.is_none();
    if interactive {
        prompter.say("🌍 Language Translation Tool - CLI Version")?;
        prompter.say(&"=".repeat(50))?;
    }

    if (cli.source.is_none() || cli.target.is_none()) && interactive {
        prompter.print_language_menu()?;
    }

    let source_lang = match &cli.source {
        Some(code) => code.clone(),
        None => match prompter.choose_language("\nSelect source language (1-20): ", None)? {
            Some((_, code)) => code.to_string(),
            None => {
                prompter.say("\nGoodbye!")?;
                return Ok(0);
            }
        },
    };

    let target_lang = match &cli.target {
        Some(code) => code.clone(),
        None => match prompter.choose_language("Select target language (1-20): ", Some(&source_lang))? {
            Some((_, code)) => code.to_string(),
            None => {
                prompter.say("\nGoodbye!")?;
                return Ok(0);
            }
        },
    };

    if let Err(message) = ensure_distinct(&source_lang, &target_lang) {
        prompter.say(&format_failure(&message, color))?;
        return Ok(2);
    }

    let text = match &cli.text {
        Some(text) => text.trim().to_string(),
        None => {
            prompter.say(&format!(
                "\nTranslating from {} to {}",
                display_name(&source_lang),
                display_name(&target_lang)
            ))?;
            prompter.ask("Enter text to translate: ")?.unwrap_or_default()
        }
    };

    if text.is_empty() {
        prompter.say("No text entered. Exiting.")?;
        return Ok(0);
    }

    let service = match LingoService::from_config(config) {
        Ok(service) => service,
        Err(e) => {
            prompter.say(&format_failure(&format!("❌ {}", e), color))?;
            return Ok(1);
        }
    };

    prompter.say("\n🔄 Translating...")?;
    let translated = match service.translate(&source_lang, &target_lang, &text) {
        Ok(translated) => translated,
        Err(e) => {
            prompter.say(&format_failure(&format!("❌ {}", e), color))?;
            return Ok(1);
        }
    };
    prompter.say(&format_success(&format!("✅ Translation: {}", translated), color))?;

    let want_audio = cli.audio
        || cli.output.is_some()
        || (interactive && prompter.confirm("\nGenerate audio file? (y/n): ")?);
    if !want_audio {
        return Ok(0);
    }

    let output = cli
        .output
        .clone()
        .or_else(|| (!interactive).then(|| PathBuf::from(&config.tts_output)));

    prompter.say("🔊 Generating audio...")?;
    let result = match &output {
        Some(path) => service.synthesize(&translated, &target_lang, Some(path.as_path())),
        None => service.synthesize_to_temp(&translated, &target_lang),
    };

    let audio_file = match result {
        Ok(path) => path,
        Err(e) => {
            prompter.say(&format_failure(&format!("❌ Audio generation failed: {}", e), color))?;
            return Ok(1);
        }
    };

    let size = fs::metadata(&audio_file).map(|m| m.len()).unwrap_or(0);
    prompter.say(&format!("✅ Audio file created: {}", audio_file.display()))?;
    prompter.say(&format!("📁 File size: {} bytes", size))?;

    // 只有临时文件才询问是否保留
    if output.is_none() && !cli.keep {
        if prompter.confirm("Keep the audio file? (y/n): ")? {
            prompter.say(&format!("Audio file saved as: {}", audio_file.display()))?;
        } else {
            fs::remove_file(&audio_file)?;
            prompter.say("Audio file deleted.")?;
        }
    }

    Ok(0)
}

fn display_name(code: &str) -> String {
    language_name(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}
