use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const WARNING_COLOR: Style = Style::new().yellow();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().blue();
pub const SUCCESS_COLOR: Style = Style::new().green();
pub const SECTION_HEADER: Style = Style::new().bold();
pub const VARIABLE_NAME: Style = Style::new().cyan();
pub const EQUATION_KIND: Style = Style::new().yellow();
