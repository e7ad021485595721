use crate::models::presence::{Activity, Presence};
use crate::models::view::{ActivityView, ViewState};

pub const PLACEHOLDER_ACTIVITY_NAME: &str = "doing yo moma";

const AVATAR_CDN: &str = "https://cdn.discordapp.com/avatars";
const APP_ASSET_CDN: &str = "https://cdn.discordapp.com/app-assets";
const MEDIA_PROXY: &str = "https://media.discordapp.net/external";
const EXTERNAL_MARKER: &str = "external";
const EXTERNAL_PREFIX: &str = "mp:external/";
const SPOTIFY_MARKER: &str = "spotify";

/// First activity that is not a custom status.
pub fn current_activity(presence: &Presence) -> Option<&Activity> {
    presence.activities.iter().find(|a| !a.is_custom_status())
}

/// Resolve a Discord asset key to an image URL.
///
/// Keys proxied through Discord's media server look like
/// `mp:external/<path>`; everything else is an application asset.
pub fn resolve_asset_url(application_id: &str, key: &str) -> String {
    if key.contains(EXTERNAL_MARKER) {
        let path = key.split(EXTERNAL_PREFIX).nth(1).unwrap_or(key);
        format!("{MEDIA_PROXY}/{path}")
    } else {
        format!("{APP_ASSET_CDN}/{application_id}/{key}.png")
    }
}

fn is_spotify_key(key: Option<&str>) -> bool {
    key.is_some_and(|k| k.contains(SPOTIFY_MARKER))
}

/// Map a raw presence to the view the widget renders. Pure: the same
/// presence always produces the same view.
pub fn normalize(presence: &Presence, user_id: &str) -> ViewState {
    let offline = presence.discord_status == "offline";
    let current = current_activity(presence);

    let state = current.and_then(|a| a.state.clone()).unwrap_or_default();
    let status = if offline {
        String::new()
    } else {
        format!("Status: \"{state}\"")
    };

    let avatar = presence
        .discord_user
        .avatar
        .as_deref()
        .map(|hash| format!("{AVATAR_CDN}/{user_id}/{hash}"))
        .unwrap_or_default();

    let mut platforms = Vec::new();
    if presence.active_on_discord_desktop {
        platforms.push("desktop".to_string());
    }
    if presence.active_on_discord_web {
        platforms.push("web".to_string());
    }
    if presence.active_on_discord_mobile {
        platforms.push("mobile".to_string());
    }

    ViewState {
        avatar,
        discord_status: presence.discord_status.clone(),
        username: format!("@{}", presence.discord_user.username),
        status,
        platforms,
        activity: activity_view(presence, current, offline, state),
    }
}

fn activity_view(
    presence: &Presence,
    current: Option<&Activity>,
    offline: bool,
    state: String,
) -> ActivityView {
    let assets = current.and_then(|a| a.assets.as_ref());
    let application_id = current
        .and_then(|a| a.application_id.as_deref())
        .unwrap_or_default();
    let large_image = assets.and_then(|a| a.large_image.as_deref());
    let small_image = assets.and_then(|a| a.small_image.as_deref());
    let large_is_spotify = is_spotify_key(large_image);

    let (big_image, big_image_title) = match large_image {
        Some(_) if large_is_spotify => presence
            .spotify
            .as_ref()
            .map(|s| (s.album_art_url.clone(), s.album.clone()))
            .unwrap_or_default(),
        Some(key) => (
            resolve_asset_url(application_id, key),
            assets
                .and_then(|a| a.large_text.clone())
                .unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    // Resolved when a small image exists or the large image is not Spotify
    // art; an absent key in that branch stays empty.
    let small_image = if small_image.is_some() || !large_is_spotify {
        small_image
            .map(|key| resolve_asset_url(application_id, key))
            .unwrap_or_default()
    } else {
        String::new()
    };
    let small_image_title = assets
        .and_then(|a| a.small_text.clone())
        .unwrap_or_default();

    let name = current
        .map(|a| a.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(PLACEHOLDER_ACTIVITY_NAME)
        .to_string();

    ActivityView {
        hidden: offline,
        big_image,
        big_image_title,
        small_image,
        small_image_title,
        name,
        state,
        details: current.and_then(|a| a.details.clone()).unwrap_or_default(),
    }
}
