//! Console command parsing.
//!
//! Entry numbers typed by the user are 1-based; messages carry 0-based indices.

use leadhook_core::{EntryField, Msg, Route, FORM_HASH};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Navigate(&'static str),
    /// `None` means "use the suggested name".
    SaveUrl(Option<String>),
    ListSets,
    ListWebhooks,
    ShowPayload,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}'; type 'help' for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("'{0}' is not an entry number")]
    BadNumber(String),
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("'{command}' is only available on the {screen} screen")]
    WrongScreen {
        command: String,
        screen: &'static str,
    },
}

/// Parses one input line. `Ok(None)` for a blank line.
pub fn parse(line: &str, route: Route) -> Result<Option<Command>, ParseError> {
    let (word, raw_rest) = next_word(line);
    if word.is_empty() {
        return Ok(None);
    }
    let rest = raw_rest.trim();
    let name = word.to_ascii_lowercase();

    let command = match name.as_str() {
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "show" => Command::Show,

        "add" => form(route, &name, Command::Dispatch(Msg::AddEntryClicked))?,
        "remove" => {
            let index = entry_index(rest, "remove <n>")?;
            form(route, &name, Command::Dispatch(Msg::RemoveEntryClicked { index }))?
        }
        "copy" => {
            let index = entry_index(rest, "copy <n>")?;
            form(route, &name, Command::Dispatch(Msg::CopyPreviousClicked { index }))?
        }
        "set" => form(route, &name, parse_set(raw_rest)?)?,
        "next" => form(route, &name, Command::Dispatch(Msg::ProceedClicked))?,
        "sets" => form(route, &name, Command::ListSets)?,
        "load" => {
            let set = required(rest, "load <name>")?;
            form(route, &name, Command::Dispatch(Msg::SetSelected(set)))?
        }
        "reset" => form(route, &name, Command::Dispatch(Msg::SetSelected(String::new())))?,
        "save-set" => {
            let set = required(rest, "save-set <name>")?;
            form(route, &name, Command::Dispatch(Msg::SaveSetConfirmed(set)))?
        }
        "delete-set" => form(route, &name, Command::Dispatch(Msg::DeleteSetClicked))?,

        "url" => webhook(
            route,
            &name,
            Command::Dispatch(Msg::WebhookUrlEdited(rest.to_string())),
        )?,
        "webhooks" => webhook(route, &name, Command::ListWebhooks)?,
        "use" => {
            let hook = required(rest, "use <name>")?;
            webhook(route, &name, Command::Dispatch(Msg::WebhookSelected(hook)))?
        }
        "save-url" => {
            let hook = (!rest.is_empty()).then(|| rest.to_string());
            webhook(route, &name, Command::SaveUrl(hook))?
        }
        "delete-url" => webhook(route, &name, Command::Dispatch(Msg::DeleteWebhookClicked))?,
        "send" => webhook(route, &name, Command::Dispatch(Msg::SendClicked))?,
        "confirm" => webhook(route, &name, Command::Dispatch(Msg::ConfirmSendClicked))?,
        "cancel" => webhook(
            route,
            &name,
            Command::Dispatch(Msg::CancelConfirmationClicked),
        )?,
        "payload" => webhook(route, &name, Command::ShowPayload)?,
        "back" => webhook(route, &name, Command::Navigate(FORM_HASH))?,

        _ => return Err(ParseError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

/// The value is everything after the single space that follows the field
/// name, kept verbatim so leading, trailing and whitespace-only values reach
/// the form as typed.
fn parse_set(raw: &str) -> Result<Command, ParseError> {
    const USAGE: &str = "set <n> <field> <value>";
    let (number, after_number) = next_word(raw);
    let (field_name, after_field) = next_word(after_number);
    if field_name.is_empty() {
        return Err(ParseError::Usage(USAGE));
    }
    let index = entry_index(number, USAGE)?;
    let field = EntryField::from_name(field_name)
        .ok_or_else(|| ParseError::UnknownField(field_name.to_string()))?;
    Ok(Command::Dispatch(Msg::FieldEdited {
        index,
        field,
        value: strip_separator(after_field).to_string(),
    }))
}

fn form(route: Route, name: &str, command: Command) -> Result<Command, ParseError> {
    match route {
        Route::Form => Ok(command),
        Route::Webhook => Err(ParseError::WrongScreen {
            command: name.to_string(),
            screen: "entry form",
        }),
    }
}

fn webhook(route: Route, name: &str, command: Command) -> Result<Command, ParseError> {
    match route {
        Route::Webhook => Ok(command),
        Route::Form => Err(ParseError::WrongScreen {
            command: name.to_string(),
            screen: "webhook",
        }),
    }
}

fn entry_index(text: &str, usage: &'static str) -> Result<usize, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    match text.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number - 1),
        _ => Err(ParseError::BadNumber(text.to_string())),
    }
}

fn required(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::Usage(usage))
    } else {
        Ok(rest.to_string())
    }
}

/// First whitespace-delimited word and the untouched remainder.
fn next_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(at) => text.split_at(at),
        None => (text, ""),
    }
}

fn strip_separator(text: &str) -> &str {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => chars.as_str(),
        _ => text,
    }
}
