use colored::*;
use std::io::{self, Write};

pub struct ConsoleUI;

impl ConsoleUI {
    pub fn print_banner(title: &str, subtitle: &str) {
        let width = title.chars().count().max(subtitle.chars().count()) + 4;
        let horizontal = "═".repeat(width);
        let pad = |text: &str| " ".repeat(width - 2 - text.chars().count());

        println!("{}", format!("╔{}╗", horizontal).bright_cyan());
        println!("║  {}{}║", title.bright_yellow().bold(), pad(title));
        println!("║  {}{}║", subtitle.truecolor(150, 150, 150), pad(subtitle));
        println!("{}", format!("╚{}╝", horizontal).bright_cyan());
        println!();
    }

    pub fn print_prompt() -> io::Result<()> {
        print!("{} ", "❯".bright_green().bold());
        io::stdout().flush()
    }

    pub fn print_error(message: &str) {
        println!("  {} {}", "✗".bright_red().bold(), message.bright_red());
    }

    pub fn print_rejection(reason: &str, raw_input: Option<&str>) {
        let shown = raw_input
            .map(|raw| format!("{:?}", raw))
            .unwrap_or_else(|| "<none>".to_string());
        println!(
            "  {} {} {}",
            "✗".bright_red().bold(),
            reason.bright_red(),
            format!("(input: {})", shown).truecolor(150, 150, 150)
        );
    }

    pub fn print_success(message: &str) {
        println!("  {} {}", "✓".bright_green().bold(), message.bright_green());
    }

    pub fn print_info(message: &str) {
        println!(
            "  {} {}",
            "[ℹ]".bright_cyan().bold(),
            message.truecolor(180, 180, 180)
        );
    }
}
