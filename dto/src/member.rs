use crate::optional_text::OptionalText;
use derive_getters::Getters;
use serde::Deserialize;

/// A member of the directory, as served by the member and search endpoints.
/// Every field may be missing.
#[derive(Debug, Clone, Default, Getters, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Member {
    #[serde(rename = "Name")]
    name: OptionalText,
    #[serde(rename = "Title")]
    title: OptionalText,
    #[serde(rename = "Organization")]
    organization: OptionalText,
    #[serde(rename = "Industry")]
    industry: OptionalText,
    #[serde(rename = "City")]
    city: OptionalText,
    #[serde(rename = "Country")]
    country: OptionalText,
    #[serde(rename = "Class")]
    class: OptionalText,
    #[serde(rename = "Image")]
    image: OptionalText,
    #[serde(rename = "Linkedin")]
    linkedin: OptionalText,
    flag: OptionalText,
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    impl Member {
        pub fn new_test(name: &str, title: &str, organization: &str, country: &str) -> Self {
            Self {
                name: name.into(),
                title: title.into(),
                organization: organization.into(),
                country: country.into(),
                ..Default::default()
            }
        }
    }

    pub const MEMBER_AS_JSON: &str = r#"{
        "Name": "Ann Nguyen",
        "Title": "Software Engineer",
        "Organization": "Acme",
        "Industry": "Technology",
        "City": "Hanoi",
        "Country": "Vietnam",
        "Class": 2015,
        "Image": "https://img.example.com/ann.png",
        "Linkedin": "https://www.linkedin.com/in/ann",
        "flag": "🇻🇳"
    }"#;

    pub fn get_complete_member() -> Member {
        Member {
            name: "Ann Nguyen".into(),
            title: "Software Engineer".into(),
            organization: "Acme".into(),
            industry: "Technology".into(),
            city: "Hanoi".into(),
            country: "Vietnam".into(),
            class: "2015".into(),
            image: "https://img.example.com/ann.png".into(),
            linkedin: "https://www.linkedin.com/in/ann".into(),
            flag: "🇻🇳".into(),
        }
    }

    #[test]
    fn should_read_complete_member() {
        let member: Member = serde_json::from_str(MEMBER_AS_JSON).unwrap();
        assert_eq!(get_complete_member(), member);
    }

    #[test]
    fn should_read_member_with_missing_values() {
        let json = r#"{"Name": "Bob", "Title": null, "Linkedin": "NaN", "City": "", "Class": 2016.0}"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(Some("Bob"), member.name().get());
        assert!(!member.title().is_present());
        assert!(!member.linkedin().is_present());
        assert!(!member.city().is_present());
        assert!(!member.organization().is_present());
        assert_eq!(Some("2016"), member.class().get());
    }

    #[test]
    fn should_ignore_unknown_fields() {
        let json = r#"{"Name": "Bob", "Timestamp": "2024-01-01"}"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(Some("Bob"), member.name().get());
    }
}
