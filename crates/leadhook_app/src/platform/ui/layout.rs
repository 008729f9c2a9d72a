use leadhook_core::Route;

use super::constants::{APP_TITLE, COMMON_HELP, FORM_HELP, LABEL_WIDTH, WEBHOOK_HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Title,
    Muted,
    Accent,
    Success,
    Error,
}

/// One rendered line of console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn blank() -> Self {
        Self::plain("")
    }
}

pub fn field_line(label: &str, value: &str, tone: Tone) -> Line {
    Line::new(format!("  {label:<LABEL_WIDTH$} {value}"), tone)
}

/// Wraps a screen body with the title bar and the command hint.
pub fn frame(route: Route, body: Vec<Line>) -> Vec<Line> {
    let mut lines = Vec::with_capacity(body.len() + 4);
    lines.push(Line::new(header(route), Tone::Title));
    lines.push(Line::blank());
    lines.extend(body);
    lines.push(Line::blank());
    lines.push(Line::new(footer(route), Tone::Muted));
    lines
}

fn header(route: Route) -> String {
    let screen = match route {
        Route::Form => "Job Search Entries",
        Route::Webhook => "Webhook Tester",
    };
    format!("== {APP_TITLE} :: {screen} ==")
}

fn footer(route: Route) -> String {
    let hint = match route {
        Route::Form => "add | set <n> <field> <value> | next | help",
        Route::Webhook => "url <value> | send | confirm | back | help",
    };
    format!("[{hint}]")
}

pub fn help(route: Route) -> Vec<Line> {
    let screen_help = match route {
        Route::Form => FORM_HELP,
        Route::Webhook => WEBHOOK_HELP,
    };
    let width = screen_help
        .iter()
        .chain(COMMON_HELP)
        .map(|(usage, _)| usage.len())
        .max()
        .unwrap_or(0);

    screen_help
        .iter()
        .chain(COMMON_HELP)
        .map(|(usage, about)| Line::plain(format!("  {usage:<width$}  {about}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_puts_title_first_and_hint_last() {
        let lines = frame(Route::Webhook, vec![Line::plain("body")]);
        assert_eq!(lines[0].tone, Tone::Title);
        assert!(lines[0].text.contains("Webhook Tester"));
        assert_eq!(lines[2].text, "body");
        assert_eq!(lines.last().unwrap().tone, Tone::Muted);
    }

    #[test]
    fn help_lists_screen_and_common_commands() {
        let text: Vec<String> = help(Route::Form).into_iter().map(|l| l.text).collect();
        assert!(text.iter().any(|l| l.trim_start().starts_with("save-set <name>")));
        assert!(text.iter().any(|l| l.trim_start().starts_with("quit")));
        assert!(!text.iter().any(|l| l.trim_start().starts_with("confirm")));
    }
}
