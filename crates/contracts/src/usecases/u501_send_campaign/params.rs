//! Template variable resolution.
//!
//! A variable is filled from the recipient when the operator typed one of the
//! placeholder tokens as its value, or when the variable itself is named
//! after a recipient field (`name`, `village`, `number`...). Anything else is
//! sent as the literal the operator typed.

use super::request::{ContactParams, CustomParam};
use crate::domain::a007_message_template::MessageTemplate;
use crate::shared::phone::to_msisdn;
use crate::shared::recipients::Recipient;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderToken {
    FarmerName,
    Village,
    Mobile,
    Taluka,
    District,
}

impl PlaceholderToken {
    pub fn all() -> [PlaceholderToken; 5] {
        [
            PlaceholderToken::FarmerName,
            PlaceholderToken::Village,
            PlaceholderToken::Mobile,
            PlaceholderToken::Taluka,
            PlaceholderToken::District,
        ]
    }

    pub fn token(&self) -> &'static str {
        match self {
            PlaceholderToken::FarmerName => "[Farmer Name]",
            PlaceholderToken::Village => "[Village]",
            PlaceholderToken::Mobile => "[Mobile]",
            PlaceholderToken::Taluka => "[Taluka]",
            PlaceholderToken::District => "[District]",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        PlaceholderToken::all()
            .into_iter()
            .find(|t| t.token().eq_ignore_ascii_case(trimmed))
    }

    fn field_name(&self) -> &'static str {
        match self {
            PlaceholderToken::FarmerName => "name",
            PlaceholderToken::Village => "village",
            PlaceholderToken::Mobile => "number",
            PlaceholderToken::Taluka => "taluka",
            PlaceholderToken::District => "district",
        }
    }

    pub fn value_for(&self, recipient: &Recipient) -> String {
        recipient
            .field(self.field_name())
            .unwrap_or_default()
            .to_string()
    }
}

/// Variable named after a recipient field
pub fn is_recipient_field(variable: &str) -> bool {
    Recipient::default().field(variable).is_some()
}

/// Value sent for `variable` to `recipient`.
///
/// A variable named after a field the recipient has left blank falls back
/// to the typed literal.
pub fn resolve_param_value(variable: &str, global: &str, recipient: &Recipient) -> String {
    if let Some(token) = PlaceholderToken::parse(global) {
        return token.value_for(recipient);
    }
    match recipient.field(variable) {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => global.to_string(),
    }
}

/// Variables that would be sent empty: no typed value and no recipient field
/// to take it from
pub fn empty_param_names(template: &MessageTemplate, globals: &BTreeMap<String, String>) -> Vec<String> {
    template
        .variables
        .iter()
        .filter(|var| {
            let typed = globals.get(*var).map(|v| v.trim()).unwrap_or("");
            typed.is_empty() && !is_recipient_field(var)
        })
        .cloned()
        .collect()
}

/// One parameter set per recipient, in template variable order
pub fn build_contacts(
    template: &MessageTemplate,
    globals: &BTreeMap<String, String>,
    recipients: &[Recipient],
) -> Vec<ContactParams> {
    recipients
        .iter()
        .map(|r| ContactParams {
            phone: to_msisdn(&r.phone),
            name: r.display_name().to_string(),
            custom_params: template
                .variables
                .iter()
                .map(|var| CustomParam {
                    name: var.clone(),
                    value: resolve_param_value(
                        var,
                        globals.get(var).map(String::as_str).unwrap_or(""),
                        r,
                    ),
                })
                .collect(),
        })
        .collect()
}

/// Preview text for the template, personalized for `sample` when given
pub fn preview(
    template: &MessageTemplate,
    globals: &BTreeMap<String, String>,
    sample: Option<&Recipient>,
) -> String {
    template.render(|var| {
        let typed = globals.get(var).map(String::as_str).unwrap_or("");
        match sample {
            Some(r) => resolve_param_value(var, typed, r),
            None if typed.is_empty() => format!("{{{{{}}}}}", var),
            None => typed.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient() -> Recipient {
        Recipient {
            id: "64b7f0c2a1e4d3b2c1a09f8e".into(),
            name: "Ramesh".into(),
            phone: "9876543210".into(),
            village: "Wai".into(),
            taluka: "Wai".into(),
            district: "Satara".into(),
            ..Default::default()
        }
    }

    fn template() -> MessageTemplate {
        MessageTemplate {
            name: "offer".into(),
            body: "Hi {{1}}, offer at {{2}} depot: {{3}}".into(),
            variables: vec!["name".into(), "village".into(), "offer_text".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_variable_named_after_field_ignores_global() {
        assert_eq!(resolve_param_value("village", "Pune", &recipient()), "Wai");
        assert_eq!(resolve_param_value("Village", "", &recipient()), "Wai");
    }

    #[test]
    fn test_placeholder_token_substitutes_recipient_field() {
        assert_eq!(
            resolve_param_value("var1", "[Farmer Name]", &recipient()),
            "Ramesh"
        );
        assert_eq!(resolve_param_value("x", "[mobile]", &recipient()), "9876543210");
        assert_eq!(resolve_param_value("x", "[District]", &recipient()), "Satara");
    }

    #[test]
    fn test_literal_is_used_otherwise() {
        assert_eq!(resolve_param_value("offer_text", "10% off", &recipient()), "10% off");
    }

    #[test]
    fn test_empty_field_falls_back_to_literal() {
        let mut r = recipient();
        r.village.clear();
        assert_eq!(resolve_param_value("village", "your village", &r), "your village");
    }

    #[test]
    fn test_empty_param_names() {
        let mut globals = BTreeMap::new();
        assert_eq!(empty_param_names(&template(), &globals), vec!["offer_text".to_string()]);
        globals.insert("offer_text".to_string(), "10% off".to_string());
        assert!(empty_param_names(&template(), &globals).is_empty());
    }

    #[test]
    fn test_build_contacts_personalizes_each_recipient() {
        let mut globals = BTreeMap::new();
        globals.insert("offer_text".to_string(), "10% off".to_string());
        let mut second = recipient();
        second.name = "Sunita".into();
        second.phone = "09123456789".into();
        second.village = "Bavdhan".into();

        let contacts = build_contacts(&template(), &globals, &[recipient(), second]);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].phone, "919876543210");
        assert_eq!(contacts[1].phone, "919123456789");
        assert_eq!(contacts[1].custom_params[0].value, "Sunita");
        assert_eq!(contacts[1].custom_params[1].value, "Bavdhan");
        assert_eq!(contacts[1].custom_params[2].value, "10% off");
    }

    #[test]
    fn test_preview() {
        let globals = BTreeMap::new();
        assert_eq!(
            preview(&template(), &globals, Some(&recipient())),
            "Hi Ramesh, offer at Wai depot: "
        );
        assert_eq!(
            preview(&template(), &globals, None),
            "Hi {{name}}, offer at {{village}} depot: {{offer_text}}"
        );
    }
}
