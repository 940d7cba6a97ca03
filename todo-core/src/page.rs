//! Page settings handed from the server to the frontend.

use serde::{Deserialize, Serialize};

/// Id of the `<script type="application/json">` element carrying the config.
pub const CONFIG_SCRIPT_ID: &str = "todo-page-config";

/// Marker in `index.html` that the server replaces with the config script.
pub const CONFIG_PLACEHOLDER: &str = "<!--TODO_PAGE_CONFIG-->";

/// Cosmetic page and window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub input_hint: String,
    /// Maximum width of the task column, in points.
    pub width: f32,
    /// Desktop window height, in points.
    pub window_height: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Todo App".to_owned(),
            input_hint: "What needs to be done?".to_owned(),
            width: 600.0,
            window_height: 700.0,
        }
    }
}

impl PageConfig {
    /// Build the `<script>` tag that replaces [`CONFIG_PLACEHOLDER`].
    ///
    /// `</` is escaped so a title such as `</script>` cannot end the tag early.
    pub fn to_script_tag(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!(
            r#"<script id="{CONFIG_SCRIPT_ID}" type="application/json">{}</script>"#,
            json.replace("</", "<\\/")
        ))
    }
}
