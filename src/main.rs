use clap::Parser;
use pulp_pressing_calculator::{app, config, i18n};

/// Аргументи командного рядка CLI-застосунку.
#[derive(Debug, Parser)]
#[command(name = "pulp_pressing_calculator_cli")]
struct Cli {
    /// Мова інтерфейсу: auto/uk/uk-ua/en/en-us
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// Каталог зовнішніх мовних пакетів
    #[arg(long)]
    lang_pack_dir: Option<String>,
}

/// Точка входу CLI: завантажує налаштування і запускає головний цикл.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("{err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let pack_dir = cli
        .lang_pack_dir
        .as_deref()
        .or(cfg.language_pack_dir.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, pack_dir);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
