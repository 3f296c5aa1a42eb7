// Console output - startup banner and per-step progress lines
//
// Progress goes to stdout; tracing diagnostics go to stderr. The icons
// mirror the usual sync-tool vocabulary: ▸ step, ✓ done, ○ skipped, ✗ failed.

use crate::config::{Config, VERSION};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
    pub const MAGENTA: &str = "\x1b[35m";
}

/// Print the startup banner with the effective run parameters
pub fn print_banner(config: &Config) {
    use colors::*;

    println!();
    println!("  {BOLD}{CYAN}Catppuccin Blur{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}Blurred Catppuccin theme generator for Zed{RESET}");
    println!();
    println!("  {DIM}Level:{RESET}  {}", config.level);
    println!("  {DIM}Output:{RESET} {}", config.output_path.display());
    println!();
}

/// A pipeline step that is starting
pub fn step(message: &str) {
    use colors::*;
    println!("  {MAGENTA}▸{RESET} {message}");
}

/// A step (or the whole run) that completed with an effect
pub fn done(message: &str) {
    use colors::*;
    println!("  {GREEN}✓{RESET} {message}");
}

/// A step that was skipped or had nothing to do
pub fn skip(message: &str) {
    use colors::*;
    println!("  {DIM}○ {message}{RESET}");
}

/// A terminal failure; goes to stderr
pub fn fail(message: &str) {
    use colors::*;
    eprintln!("  {RED}✗{RESET} {message}");
}
