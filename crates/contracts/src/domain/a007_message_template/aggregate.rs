use crate::shared::settings::DEFAULT_LANGUAGE_CODE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Approved WhatsApp template with its named variables.
///
/// Variables are referenced in the body either positionally (`{{1}}`) or by
/// name (`{{village}}`); the n-th entry of `variables` backs `{{n}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplate {
    #[serde(alias = "templateName", alias = "elementName")]
    pub name: String,
    #[serde(default, alias = "languageCode")]
    pub language: Option<String>,
    #[serde(default, alias = "text")]
    pub body: String,
    #[serde(default, alias = "params", alias = "parameters")]
    pub variables: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl MessageTemplate {
    pub const ITEMS_KEYS: &'static [&'static str] = &["templates", "items"];

    pub fn language_code(&self) -> &str {
        self.language
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(DEFAULT_LANGUAGE_CODE)
    }

    /// Body with every variable substituted by `value_of(variable)`
    pub fn render(&self, value_of: impl Fn(&str) -> String) -> String {
        let mut text = self.body.clone();
        for (idx, var) in self.variables.iter().enumerate() {
            let value = value_of(var);
            text = text.replace(&format!("{{{{{}}}}}", idx + 1), &value);
            text = text.replace(&format!("{{{{{}}}}}", var), &value);
        }
        text
    }

    /// Body with typed values filled in; variables without a value keep
    /// their `{{name}}` marker
    pub fn preview(&self, values: &BTreeMap<String, String>) -> String {
        self.render(|var| match values.get(var).map(|v| v.trim()) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => format!("{{{{{}}}}}", var),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> MessageTemplate {
        MessageTemplate {
            name: "kharif_offer".into(),
            body: "Namaste {{1}}, new seed stock is available in {{village}}.".into(),
            variables: vec!["name".into(), "village".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_positional_and_named() {
        let text = template().render(|v| match v {
            "name" => "Ramesh".to_string(),
            "village" => "Wai".to_string(),
            _ => String::new(),
        });
        assert_eq!(text, "Namaste Ramesh, new seed stock is available in Wai.");
    }

    #[test]
    fn test_preview_keeps_unfilled_markers() {
        let mut values = BTreeMap::new();
        values.insert("name".to_string(), "Ramesh".to_string());
        assert_eq!(
            template().preview(&values),
            "Namaste Ramesh, new seed stock is available in {{village}}."
        );
    }

    #[test]
    fn test_language_default() {
        let mut t = template();
        assert_eq!(t.language_code(), "en");
        t.language = Some("mr".into());
        assert_eq!(t.language_code(), "mr");
    }
}
