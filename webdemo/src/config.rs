use log::warn;
use posecam::Config;

/// `<script type="application/json">` block holding a [`Config`].
const CONFIG_ELEMENT_ID: &str = "posecam-config";

pub fn load() -> Config {
    let Some(text) = config_text() else {
        return Config::default();
    };
    Config::from_json(&text).unwrap_or_else(|e| {
        warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
        Config::default()
    })
}

fn config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}
