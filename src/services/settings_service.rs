use crate::{
    dto::settings::UpdateSettingsRequest,
    models::AppSettings,
    state::Storefront,
    store::KeyValueStore,
};

/// Merges `Some` fields onto the current settings and persists the result.
/// Applying the dark-mode theme is a presentation concern; callers read
/// `is_dark_mode` off the returned value.
pub fn update_settings<S: KeyValueStore>(
    app: &mut Storefront<S>,
    payload: UpdateSettingsRequest,
) -> AppSettings {
    if let Some(language) = payload.language {
        app.settings.language = language;
    }
    if let Some(currency) = payload.currency {
        app.settings.currency = currency;
    }
    if let Some(is_dark_mode) = payload.is_dark_mode {
        app.settings.is_dark_mode = is_dark_mode;
    }
    app.persist_settings();
    tracing::debug!(settings = ?app.settings, "settings updated");
    *app.settings()
}
