use leadhook_core::{
    AppViewModel, EntryField, EntryRowView, Notice, NoticeLevel, PhaseView, Route, WebhookView,
};

use super::layout::{field_line, frame, Line, Tone};

pub fn render(view: &AppViewModel) -> Vec<Line> {
    let body = match view.route {
        Route::Form => form_body(view),
        Route::Webhook => webhook_body(&view.webhook),
    };
    frame(view.route, body)
}

pub fn render_notices(notices: &[Notice]) -> Vec<Line> {
    notices
        .iter()
        .map(|notice| {
            let (prefix, tone) = match notice.level {
                NoticeLevel::Info => ("*", Tone::Accent),
                NoticeLevel::Success => ("+", Tone::Success),
                NoticeLevel::Error => ("!", Tone::Error),
            };
            Line::new(format!("{prefix} {}", notice.text), tone)
        })
        .collect()
}

pub fn render_saved_sets(view: &AppViewModel) -> Vec<Line> {
    if view.saved_set_names.is_empty() {
        return vec![Line::new("No saved sets.", Tone::Muted)];
    }
    view.saved_set_names
        .iter()
        .map(|name| {
            let marker = if view.selected_set.as_deref() == Some(name.as_str()) {
                ">"
            } else {
                " "
            };
            Line::plain(format!("{marker} {name}"))
        })
        .collect()
}

pub fn render_saved_webhooks(view: &WebhookView) -> Vec<Line> {
    if view.saved.is_empty() {
        return vec![Line::new("No saved webhooks.", Tone::Muted)];
    }
    view.saved
        .iter()
        .map(|hook| {
            let marker = if view.selected.as_deref() == Some(hook.name.as_str()) {
                ">"
            } else {
                " "
            };
            Line::plain(format!("{marker} {}  {}", hook.name, hook.url))
        })
        .collect()
}

pub fn render_payload(view: &WebhookView) -> Vec<Line> {
    view.payload.lines().map(Line::plain).collect()
}

fn form_body(view: &AppViewModel) -> Vec<Line> {
    let mut lines = vec![Line::plain(format!(
        "Entries ({}/{})",
        view.entries.len(),
        view.max_entries
    ))];

    for row in &view.entries {
        lines.push(Line::blank());
        lines.extend(entry_lines(row));
    }

    lines.push(Line::blank());
    let set_line = match (&view.selected_set, view.saved_set_names.len()) {
        (Some(name), count) => format!("Saved set: {name} ({count} saved)"),
        (None, 0) => "Saved set: none".to_string(),
        (None, count) => format!("Saved set: none selected ({count} saved)"),
    };
    lines.push(Line::new(set_line, Tone::Muted));
    if !view.can_add {
        lines.push(Line::new(
            format!("Maximum of {} entries reached.", view.max_entries),
            Tone::Muted,
        ));
    }

    if let Some(error) = &view.form_error {
        lines.push(Line::new(error.clone(), Tone::Error));
    }
    lines
}

fn entry_lines(row: &EntryRowView) -> Vec<Line> {
    let mut lines = vec![Line::new(format!("#{}", row.number), Tone::Accent)];
    for field in EntryField::ALL {
        let required = EntryField::REQUIRED.contains(&field);
        let label = if required {
            format!("{}*", field.label())
        } else {
            field.label().to_string()
        };
        let value = match field {
            EntryField::ExperienceLevel => {
                let level = row.entry.experience_level;
                format!("{} ({})", level.label(), level.as_str())
            }
            EntryField::DateRange => {
                let range = row.entry.date_range;
                format!("{} ({})", range.label(), range.as_str())
            }
            _ => row.entry.value(field).to_string(),
        };
        let tone = if row.errors.contains(&field) {
            Tone::Error
        } else {
            Tone::Plain
        };
        lines.push(field_line(&label, &value, tone));
    }
    for field in &row.errors {
        lines.push(Line::new(
            format!("  ! {} is required.", field.label()),
            Tone::Error,
        ));
    }
    lines
}

fn webhook_body(view: &WebhookView) -> Vec<Line> {
    let url = if view.url.is_empty() {
        "(not set)"
    } else {
        view.url.as_str()
    };
    let mut lines = vec![field_line("Webhook URL", url, Tone::Plain)];
    if let Some(name) = &view.selected {
        lines.push(field_line("Saved as", name, Tone::Muted));
    }
    if let Some(error) = &view.url_error {
        lines.push(Line::new(format!("  ! {error}"), Tone::Error));
    }
    lines.push(field_line(
        "Payload",
        &format!("{} entr{}", view.entry_count, plural_y(view.entry_count)),
        Tone::Muted,
    ));
    lines.push(Line::blank());

    match view.phase {
        PhaseView::Idle => {
            if view.can_send {
                lines.push(Line::new("Type 'send' to review the request.", Tone::Muted));
            }
        }
        PhaseView::Confirming => {
            lines.push(Line::new("Confirm Webhook Send", Tone::Accent));
            lines.push(Line::plain(format!(
                "Send {} entr{} to {}?",
                view.entry_count,
                plural_y(view.entry_count),
                view.url.trim()
            )));
            lines.push(Line::new("Type 'confirm' to send or 'cancel'.", Tone::Muted));
        }
        PhaseView::Sending => lines.push(Line::new("Sending...", Tone::Accent)),
        PhaseView::Succeeded | PhaseView::Failed => {}
    }

    if let Some(response) = &view.response {
        if view.phase == PhaseView::Confirming {
            lines.push(Line::blank());
        }
        let tone = if response.success {
            Tone::Success
        } else {
            Tone::Error
        };
        lines.push(Line::new(format!("Response: {}", response.badge), tone));
        lines.push(Line::plain("Headers:"));
        for (name, value) in &response.headers {
            lines.push(Line::new(format!("  {name}: {value}"), Tone::Muted));
        }
        lines.push(Line::plain("Body:"));
        if response.body.is_empty() {
            lines.push(Line::new("  (empty)", Tone::Muted));
        } else {
            lines.extend(response.body.lines().map(|l| Line::plain(format!("  {l}"))));
        }
    }
    if let Some(failure) = &view.failure {
        lines.push(Line::new(format!("Error: {failure}"), Tone::Error));
    }
    lines
}

fn plural_y(count: usize) -> &'static str {
    if count == 1 {
        "y"
    } else {
        "ies"
    }
}
