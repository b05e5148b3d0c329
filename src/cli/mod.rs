use clap::{Parser, ValueEnum};
use crossterm::tty::IsTty;
use std::io;

pub mod display;
pub mod menu;
pub mod task;
pub mod ui;

pub use display::SwatchStyle;
pub use menu::{run_menu, Session};
pub use ui::Console;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Interactive task list for the command line")]
#[command(version)]
pub struct Cli {
    /// When to color the priority and due-date cells
    #[arg(long, value_enum, default_value_t = ColorMode::Always)]
    pub color: ColorMode,
    /// Log diagnostics to stderr (same as setting TASKLIST_DEBUG)
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// ANSI color swatches
    Always,
    /// Swatches on a terminal, letters otherwise
    Auto,
    /// Plain letters
    Never,
}

impl ColorMode {
    pub fn swatch_style(self) -> SwatchStyle {
        match self {
            ColorMode::Always => SwatchStyle::Ansi,
            ColorMode::Never => SwatchStyle::Letter,
            ColorMode::Auto => {
                if io::stdout().is_tty() {
                    SwatchStyle::Ansi
                } else {
                    SwatchStyle::Letter
                }
            }
        }
    }
}
