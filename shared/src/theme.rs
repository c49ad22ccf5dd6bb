use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Theme {
    #[default]
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle_title(self) -> &'static str {
        match self {
            Theme::Light => "Switch to Dark Mode",
            Theme::Dark => "Switch to Light Mode",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "fa-solid fa-moon",
            Theme::Dark => "fa-solid fa-sun",
        }
    }
}
