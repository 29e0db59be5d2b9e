use serde::{ Deserialize, Deserializer, Serialize };
use serde_json::Value as JsonValue;

/// Marker the extraction prompt asks for when no theme can be determined.
pub const NO_THEME: &str = "None";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ExtractedFacts {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_age")]
    pub age: Option<String>,
    #[serde(default = "default_theme", deserialize_with = "deserialize_theme")]
    pub theme: String,
}

impl ExtractedFacts {
    pub fn has_theme(&self) -> bool {
        self.theme != NO_THEME
    }
}

fn default_theme() -> String {
    NO_THEME.to_string()
}

// Models answer with "7", 7, null or "null" interchangeably.
fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where D: Deserializer<'de>
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(JsonValue::String(s)) => {
            let s = s.trim();
            if s.is_empty() || s.eq_ignore_ascii_case("null") {
                None
            } else {
                Some(s.to_string())
            }
        }
        Some(JsonValue::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn deserialize_theme<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de>
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(default_theme))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitationResult {
    pub invitation_text: String,
    #[serde(rename = "invitationImageURL")]
    pub invitation_image_url: String,
    pub dalle_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_null_ages_are_normalized() {
        let facts: ExtractedFacts = serde_json
            ::from_str(r#"{"name":"Ava","age":6,"theme":"space"}"#)
            .unwrap();
        assert_eq!(facts.age.as_deref(), Some("6"));

        let facts: ExtractedFacts = serde_json
            ::from_str(r#"{"name":"Ava","age":"null","theme":"space"}"#)
            .unwrap();
        assert_eq!(facts.age, None);
    }

    #[test]
    fn missing_theme_falls_back_to_sentinel() {
        let facts: ExtractedFacts = serde_json::from_str(r#"{"name":"Ava","theme":null}"#).unwrap();
        assert_eq!(facts.theme, NO_THEME);
        assert!(!facts.has_theme());
        assert_eq!(facts.age, None);
    }

    #[test]
    fn only_the_exact_sentinel_means_no_theme() {
        let facts: ExtractedFacts = serde_json
            ::from_str(r#"{"name":"Ava","age":null,"theme":"none"}"#)
            .unwrap();
        assert!(facts.has_theme());
    }

    #[test]
    fn invitation_result_uses_wire_names() {
        let result = InvitationResult {
            invitation_text: "Join us".into(),
            invitation_image_url: "https://img".into(),
            dalle_prompt: "Create".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["invitationText"], "Join us");
        assert_eq!(json["invitationImageURL"], "https://img");
        assert_eq!(json["dallePrompt"], "Create");
    }
}
