use colored::{Color, Colorize};
use crossterm::terminal;

use crate::card::{Card, Theme};
use crate::menu::{self, MenuAction};

const MIN_PANEL_WIDTH: usize = 44;

/// parse a theme color name, falling back to white for unknown names
pub fn theme_color(name: &str) -> Color {
    Color::from(name)
}

pub fn spinner_color(name: &str) -> spinoff::Color {
    match name.to_lowercase().as_str() {
        "black" => spinoff::Color::Black,
        "red" => spinoff::Color::Red,
        "green" => spinoff::Color::Green,
        "yellow" => spinoff::Color::Yellow,
        "blue" => spinoff::Color::Blue,
        "magenta" => spinoff::Color::Magenta,
        "cyan" => spinoff::Color::Cyan,
        _ => spinoff::Color::White,
    }
}

/// banner shown once at startup
pub fn banner(card: &Card) {
    let accent = theme_color(&card.theme.accent);
    let border = theme_color(&card.theme.border);

    let spaced: String = card
        .profile
        .name
        .to_uppercase()
        .chars()
        .flat_map(|c| [c, ' '])
        .collect();
    let spaced = spaced.trim_end();
    let rule = "═".repeat(spaced.chars().count() + 4);

    println!();
    println!("  {}", rule.as_str().color(border));
    println!("    {}", spaced.color(accent).bold());
    println!("  {}", rule.as_str().color(border));
}

/// static profile panel, shown once at startup
pub fn profile_panel(card: &Card) {
    let border = theme_color(&card.theme.border);
    let accent = theme_color(&card.theme.accent);
    let background = card.theme.background.as_deref().map(theme_color);
    let profile = &card.profile;

    let heading = match &profile.company {
        Some(company) => format!("{} @ {}", profile.title, company),
        None => profile.title.clone(),
    };

    let lines = vec![
        heading,
        format!("📍 {}", profile.location),
        String::new(),
        profile.skills.join(" · "),
    ];

    let width = panel_width(&lines);

    println!();
    println!("  {}", format!("┌{}┐", "─".repeat(width + 2)).color(border));
    println!(
        "  {} {} {}",
        "│".color(border),
        on_background(pad(&profile.name, width).color(accent).bold(), background),
        "│".color(border)
    );
    for line in &lines {
        println!(
            "  {} {} {}",
            "│".color(border),
            on_background(pad(line, width).normal(), background),
            "│".color(border)
        );
    }
    println!("  {}", format!("└{}┘", "─".repeat(width + 2)).color(border));
}

pub fn usage_tip() {
    println!(
        "\n  {} use the arrow keys to pick an action, Esc or Ctrl-C to leave\n",
        "tip:".dimmed()
    );
}

/// plain link table for non-interactive mode
pub fn link_table(card: &Card) {
    let accent = theme_color(&card.theme.accent);

    println!();
    for choice in menu::choices(&card.links) {
        if choice.action == MenuAction::Quit {
            continue;
        }
        if let Some(url) = card.links.url_for(choice.action) {
            println!(
                "  {:<16} {}",
                choice.action.id().bold(),
                url.color(accent)
            );
        }
    }
    println!();
}

pub fn settle(theme: &Theme) {
    std::thread::sleep(std::time::Duration::from_millis(theme.tempo.settle_millis()));
}

fn panel_width(lines: &[String]) -> usize {
    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_PANEL_WIDTH);

    // keep the panel inside the terminal, teacher-style hard floor at 20 cols
    let max_width = terminal::size()
        .map(|(cols, _)| (cols as usize).saturating_sub(6))
        .unwrap_or(74);

    longest.min(max_width).max(20)
}

fn on_background(text: colored::ColoredString, background: Option<Color>) -> colored::ColoredString {
    match background {
        Some(color) => text.on_color(color),
        None => text,
    }
}

fn pad(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        let truncated: String = line.chars().take(width.saturating_sub(1)).collect();
        return format!("{}…", truncated);
    }
    format!("{}{}", line, " ".repeat(width - len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abc", 5).chars().count(), 5);
    }

    #[test]
    fn pad_truncates_long_lines() {
        assert_eq!(pad("abcdefgh", 5).chars().count(), 5);
        assert!(pad("abcdefgh", 5).ends_with('…'));
    }

    #[test]
    fn unknown_theme_color_falls_back_to_white() {
        assert_eq!(theme_color("not-a-color"), Color::White);
    }

    #[test]
    fn background_is_applied_only_when_set() {
        assert_eq!(on_background("x".normal(), None).bgcolor(), None);
        assert_eq!(
            on_background("x".normal(), Some(Color::Black)).bgcolor(),
            Some(Color::Black)
        );
    }

    #[test]
    fn spinner_color_maps_names() {
        assert!(matches!(spinner_color("cyan"), spinoff::Color::Cyan));
        assert!(matches!(spinner_color("nope"), spinoff::Color::White));
    }
}
