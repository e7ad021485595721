use serde::{Deserialize, Serialize};

/// Envelope returned by `GET /v1/users/{user_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LanyardResponse {
    pub success: bool,
    pub data: Option<Presence>,
    pub error: Option<LanyardApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanyardApiError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presence {
    pub discord_user: DiscordUser,
    pub discord_status: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub spotify: Option<Spotify>,
    #[serde(default)]
    pub listening_to_spotify: bool,
    #[serde(default)]
    pub active_on_discord_desktop: bool,
    #[serde(default)]
    pub active_on_discord_web: bool,
    #[serde(default)]
    pub active_on_discord_mobile: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    /// Avatar hash, `None` when the user has the default avatar.
    pub avatar: Option<String>,
    pub global_name: Option<String>,
    pub display_name: Option<String>,
    pub discriminator: Option<String>,
    #[serde(default)]
    pub bot: bool,
    pub public_flags: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: u8,
    pub state: Option<String>,
    pub details: Option<String>,
    pub timestamps: Option<ActivityTimestamps>,
    pub application_id: Option<String>,
    pub assets: Option<ActivityAssets>,
    pub created_at: Option<u64>,
}

impl Activity {
    /// Type code Discord uses for a user's custom status line.
    pub const CUSTOM_STATUS: u8 = 4;

    pub fn is_custom_status(&self) -> bool {
        self.activity_type == Self::CUSTOM_STATUS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityTimestamps {
    pub start: Option<u64>,
    pub end: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityAssets {
    pub large_image: Option<String>,
    pub large_text: Option<String>,
    pub small_image: Option<String>,
    pub small_text: Option<String>,
}

/// Now-playing block Lanyard attaches while the user listens on Spotify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spotify {
    pub track_id: Option<String>,
    pub timestamps: Option<ActivityTimestamps>,
    #[serde(default)]
    pub album: String,
    #[serde(default)]
    pub album_art_url: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub song: String,
}
