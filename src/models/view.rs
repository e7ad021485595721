use serde::Serialize;

/// Render-ready snapshot of a presence. Every field is always populated;
/// missing upstream data shows up as an empty string or a hidden flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub avatar: String,
    pub discord_status: String,
    pub username: String,
    pub status: String,
    /// Active client platforms, in `desktop`, `web`, `mobile` order.
    pub platforms: Vec<String>,
    pub activity: ActivityView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub hidden: bool,
    pub big_image: String,
    pub big_image_title: String,
    pub small_image: String,
    pub small_image_title: String,
    pub name: String,
    pub state: String,
    pub details: String,
}

impl Default for ActivityView {
    fn default() -> Self {
        Self {
            hidden: true,
            big_image: String::new(),
            big_image_title: String::new(),
            small_image: String::new(),
            small_image_title: String::new(),
            name: String::new(),
            state: String::new(),
            details: String::new(),
        }
    }
}

impl ViewState {
    /// Placeholder shown before the first successful poll.
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn is_offline(&self) -> bool {
        self.discord_status == "offline"
    }
}
