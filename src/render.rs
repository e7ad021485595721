use std::time::Duration;

use minijinja::{context, Environment};
use serde::Serialize;

use crate::config::CardProfile;
use crate::models::view::ViewState;

static WIDGET_TEMPLATE: &str = include_str!("../templates/widget.html");
static PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Styling of the status dot for one of the four Discord statuses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusStyle {
    pub background: &'static str,
    pub title: &'static str,
    pub color: &'static str,
    pub opacity: &'static str,
}

impl StatusStyle {
    /// `None` for anything outside online/dnd/idle/offline, which renders
    /// the dot without styling.
    pub fn for_status(status: &str) -> Option<Self> {
        let style = match status {
            "online" => StatusStyle {
                background: "#3ba45d",
                title: "Online",
                color: "#3ba45d",
                opacity: "1",
            },
            "dnd" => StatusStyle {
                background: "#ed4245",
                title: "Do not disturb",
                color: "#ed4245",
                opacity: "1",
            },
            "idle" => StatusStyle {
                background: "#faa81a",
                title: "Idle",
                color: "#faa81a",
                opacity: "1",
            },
            "offline" => StatusStyle {
                background: "#747e8c",
                title: "Offline",
                color: "unset",
                opacity: "0.5",
            },
            _ => return None,
        };
        Some(style)
    }
}

/// Widget templates. Both are `.html`, so every interpolated value is
/// HTML-escaped.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template("widget.html", WIDGET_TEMPLATE)?;
        env.add_template("page.html", PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// The three profile cards for `view`.
    pub fn widget(&self, view: &ViewState, card: &CardProfile) -> Result<String, minijinja::Error> {
        self.env.get_template("widget.html")?.render(context! {
            view => view,
            card => card,
            status_style => StatusStyle::for_status(&view.discord_status),
        })
    }

    /// Full document around the widget; the browser reloads it once per
    /// poll interval.
    pub fn page(
        &self,
        view: &ViewState,
        card: &CardProfile,
        refresh: Duration,
    ) -> Result<String, minijinja::Error> {
        let refresh_secs = refresh.as_millis().div_ceil(1000).max(1) as u64;
        self.env.get_template("page.html")?.render(context! {
            view => view,
            card => card,
            status_style => StatusStyle::for_status(&view.discord_status),
            refresh_secs => refresh_secs,
        })
    }
}
