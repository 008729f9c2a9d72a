pub const APP_TITLE: &str = "Lead Automation";
pub const FORM_PROMPT: &str = "form> ";
pub const WEBHOOK_PROMPT: &str = "webhook> ";
pub const RENDER_FAILURE_MESSAGE: &str = "Something went wrong.";
pub const LABEL_WIDTH: usize = 18;

pub const FORM_HELP: &[(&str, &str)] = &[
    ("add", "append a new entry"),
    ("remove <n>", "delete entry n"),
    ("copy <n>", "copy entry n-1 into entry n"),
    ("set <n> <field> <value>", "edit a field (jobRole, location, experienceLevel, dateRange, linkedinUrl); the value is kept as typed, spaces included"),
    ("next", "validate and go to the webhook tester"),
    ("sets", "list saved sets"),
    ("load <name>", "replace the entries with a saved set"),
    ("reset", "start over with one blank entry"),
    ("save-set <name>", "save the entries under a name"),
    ("delete-set", "delete the selected saved set"),
];

pub const WEBHOOK_HELP: &[(&str, &str)] = &[
    ("url <value>", "set the webhook URL"),
    ("webhooks", "list saved webhooks"),
    ("use <name>", "select a saved webhook"),
    ("save-url [name]", "save the current URL"),
    ("delete-url", "delete the selected saved webhook"),
    ("send", "review the request before sending"),
    ("confirm", "send the request"),
    ("cancel", "close the review without sending"),
    ("payload", "print the JSON payload"),
    ("back", "return to the entry form"),
];

pub const COMMON_HELP: &[(&str, &str)] = &[
    ("show", "redraw the screen"),
    ("help", "list commands"),
    ("quit", "exit"),
];
