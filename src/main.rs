use clap::Parser;
use gambit::core::config;
use gambit::tui;
use gambit::tui::theme::{GlyphSet, ThemeName};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "gambit", about = "Terminal chess front-end")]
struct Args {
    /// Board color theme
    #[arg(short, long, value_enum)]
    theme: Option<ThemeName>,

    /// Piece glyph set
    #[arg(short, long, value_enum)]
    glyphs: Option<GlyphSet>,

    /// Hide the move-history panel
    #[arg(long)]
    no_history: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - the TUI owns the terminal, so logs go to
    // gambit.log in the current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("gambit.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // A malformed config is fatal with a diagnostic; there is no recovery
    // path for anything but invalid moves.
    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("gambit: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.theme, args.glyphs, args.no_history);

    log::info!(
        "Gambit starting up (theme: {:?}, glyphs: {:?}, history: {})",
        resolved.theme,
        resolved.glyphs,
        resolved.show_history
    );

    tui::run(resolved)
}
