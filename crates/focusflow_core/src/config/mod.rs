use crate::error::AppError;

pub const DEFAULT_TITLE_WIDTH: usize = 42;
pub const MIN_TITLE_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Vivid,
    Plain,
}

impl Theme {
    pub fn from_name(raw: &str) -> Result<Self, AppError> {
        match canonical_theme_name(raw).as_deref() {
            Some("vivid") => Ok(Self::Vivid),
            Some("plain") => Ok(Self::Plain),
            Some(other) => Err(AppError::invalid_input(format!(
                "unknown theme '{other}' (expected vivid or plain)"
            ))),
            None => Err(AppError::invalid_input("theme cannot be empty")),
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Vivid => Palette::vivid(),
            Self::Plain => Palette::plain(),
        }
    }
}

pub fn canonical_theme_name(raw: &str) -> Option<String> {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            cleaned.push(ch.to_ascii_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    let trimmed = cleaned.trim_matches('_');
    if trimmed.is_empty() {
        return None;
    }

    match trimmed {
        "default" | "color" | "colour" => Some("vivid".to_string()),
        "none" | "mono" | "no_color" | "nocolor" => Some("plain".to_string()),
        other => Some(other.to_string()),
    }
}

/// ANSI escape sequences used by the screen; every field is empty for the plain theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub reset: &'static str,
    pub bold: &'static str,
    pub faint: &'static str,
    pub red: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub blue: &'static str,
    pub magenta: &'static str,
    pub cyan: &'static str,
    pub gray: &'static str,
    pub clear_screen: &'static str,
}

impl Palette {
    pub fn vivid() -> Self {
        Self {
            reset: "\x1b[0m",
            bold: "\x1b[1m",
            faint: "\x1b[2m",
            red: "\x1b[31m",
            green: "\x1b[32m",
            yellow: "\x1b[33m",
            blue: "\x1b[34m",
            magenta: "\x1b[35m",
            cyan: "\x1b[36m",
            gray: "\x1b[90m",
            clear_screen: "\x1b[H\x1b[2J",
        }
    }

    pub fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            faint: "",
            red: "",
            green: "",
            yellow: "",
            blue: "",
            magenta: "",
            cyan: "",
            gray: "",
            clear_screen: "",
        }
    }

    pub fn paint(&self, code: &str, text: &str) -> String {
        if code.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", code, text, self.reset)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub theme: Theme,
    pub title_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            title_width: DEFAULT_TITLE_WIDTH,
        }
    }
}

impl Config {
    pub fn new(theme: Theme, title_width: usize) -> Result<Self, AppError> {
        if title_width < MIN_TITLE_WIDTH {
            return Err(AppError::invalid_input(format!(
                "title width must be at least {MIN_TITLE_WIDTH}"
            )));
        }
        Ok(Self { theme, title_width })
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }
}
