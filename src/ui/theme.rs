use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Color palette for the terminal surface.
///
/// Only the styles the output helpers actually use; everything renders
/// unstyled when stdout is not a tty.
#[derive(Debug, Clone)]
pub struct Theme {
    pub header: Style,
    pub success: Style,
    pub error: Style,
    pub warn: Style,
    pub dim: Style,
    pub muted: Style,
}

impl Theme {
    fn for_tty(is_tty: bool) -> Self {
        if !is_tty {
            return Self {
                header: Style::new(),
                success: Style::new(),
                error: Style::new(),
                warn: Style::new(),
                dim: Style::new(),
                muted: Style::new(),
            };
        }
        Self {
            header: Style::new().green().bold(),
            success: Style::new().green(),
            error: Style::new().red().bold(),
            warn: Style::new().yellow(),
            dim: Style::new().dimmed(),
            muted: Style::new().bright_black(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(|| Theme::for_tty(console::Term::stdout().is_term()))
}
