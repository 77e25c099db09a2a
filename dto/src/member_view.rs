use crate::member::Member;
use derive_getters::Getters;

pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_IMAGE_ALT: &str = "Member";
pub const DEFAULT_FLAG: &str = "🌐";
pub const MODAL_IMAGE_SIZE: u16 = 150;
pub const CARD_IMAGE_SIZE: u16 = 120;

const PLACEHOLDER_IMAGE_HOST: &str = "https://via.placeholder.com";
const PLACEHOLDER_COLORS: &str = "6c757d/ffffff";

/// Everything the profile modal displays for a member.
#[derive(Debug, Clone, Getters, PartialEq, Eq)]
pub struct MemberView {
    name: String,
    image_src: String,
    image_alt: String,
    title: String,
    organization: String,
    industry: String,
    location: String,
    class_label: String,
    linkedin: Option<String>,
}

/// Everything a member card of the grid displays.
#[derive(Debug, Clone, Getters, PartialEq, Eq)]
pub struct CardView {
    name: String,
    image_src: String,
    image_alt: String,
    title: String,
    organization: String,
    flag: String,
    city: String,
    country: String,
    linkedin: Option<String>,
}

/// Compute what the profile modal shows for `member`.
/// Missing texts are replaced by [NOT_AVAILABLE], a missing picture by a placeholder
/// and a missing flag by [DEFAULT_FLAG].
pub fn render_member_fields(member: &Member) -> MemberView {
    let flag = member.flag().or(DEFAULT_FLAG);
    let city = member.city().or(NOT_AVAILABLE);
    let country = member.country().or(NOT_AVAILABLE);

    MemberView {
        name: member.name().or(NOT_AVAILABLE).to_owned(),
        image_src: member
            .image()
            .get()
            .map(str::to_owned)
            .unwrap_or_else(|| placeholder_image_url("?", MODAL_IMAGE_SIZE)),
        image_alt: member.name().or(DEFAULT_IMAGE_ALT).to_owned(),
        title: member.title().or(NOT_AVAILABLE).to_owned(),
        organization: member.organization().or(NOT_AVAILABLE).to_owned(),
        industry: member.industry().or(NOT_AVAILABLE).to_owned(),
        location: format!("{flag} {city}, {country}"),
        class_label: format!("Class of {}", member.class().or(NOT_AVAILABLE)),
        linkedin: member.linkedin().get().map(str::to_owned),
    }
}

pub fn render_card_fields(member: &Member) -> CardView {
    let name = member.name().or(NOT_AVAILABLE);
    CardView {
        name: name.to_owned(),
        image_src: member
            .image()
            .get()
            .map(str::to_owned)
            .unwrap_or_else(|| fallback_image_url(name, CARD_IMAGE_SIZE)),
        image_alt: member.name().or(DEFAULT_IMAGE_ALT).to_owned(),
        title: member.title().or(NOT_AVAILABLE).to_owned(),
        organization: member.organization().or(NOT_AVAILABLE).to_owned(),
        flag: member.flag().or(DEFAULT_FLAG).to_owned(),
        city: member.city().or(NOT_AVAILABLE).to_owned(),
        country: member.country().or("").to_owned(),
        linkedin: member.linkedin().get().map(str::to_owned),
    }
}

/// Picture to use when a member picture can't be loaded:
/// a placeholder showing the first letter of the picture's alternative text.
pub fn fallback_image_url(alt: &str, size: u16) -> String {
    let initial = alt
        .trim()
        .chars()
        .next()
        .map(String::from)
        .unwrap_or_else(|| DEFAULT_IMAGE_ALT[..1].to_owned());
    placeholder_image_url(&initial, size)
}

fn placeholder_image_url(text: &str, size: u16) -> String {
    format!("{PLACEHOLDER_IMAGE_HOST}/{size}x{size}/{PLACEHOLDER_COLORS}?text={text}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::tests::get_complete_member;
    use parameterized::{ide, parameterized};

    ide!();

    fn member_from_json(json: &str) -> Member {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn should_render_every_field_verbatim() {
        let view = render_member_fields(&get_complete_member());
        assert_eq!("Ann Nguyen", view.name());
        assert_eq!("https://img.example.com/ann.png", view.image_src());
        assert_eq!("Ann Nguyen", view.image_alt());
        assert_eq!("Software Engineer", view.title());
        assert_eq!("Acme", view.organization());
        assert_eq!("Technology", view.industry());
        assert_eq!("🇻🇳 Hanoi, Vietnam", view.location());
        assert_eq!("Class of 2015", view.class_label());
        assert_eq!(
            &Some("https://www.linkedin.com/in/ann".to_owned()),
            view.linkedin()
        );
    }

    #[test]
    fn should_render_placeholders_for_empty_member() {
        let view = render_member_fields(&Member::default());
        assert_eq!("N/A", view.name());
        assert_eq!(
            "https://via.placeholder.com/150x150/6c757d/ffffff?text=?",
            view.image_src()
        );
        assert_eq!("Member", view.image_alt());
        assert_eq!("N/A", view.title());
        assert_eq!("N/A", view.organization());
        assert_eq!("N/A", view.industry());
        assert_eq!("🌐 N/A, N/A", view.location());
        assert_eq!("Class of N/A", view.class_label());
        assert_eq!(&None, view.linkedin());
    }

    #[test]
    fn should_keep_present_fields_next_to_missing_ones() {
        let member = member_from_json(r#"{"Name": "Bob", "Country": "France", "flag": null}"#);
        let view = render_member_fields(&member);
        assert_eq!("Bob", view.name());
        assert_eq!("🌐 N/A, France", view.location());
    }

    #[parameterized(
        linkedin = {
            "null",
            r#""""#,
            r#""   ""#,
            r#""NaN""#,
            r#""https://www.linkedin.com/in/bob""#,
            r#""  https://www.linkedin.com/in/bob ""#,
        },
        visible = { false, false, false, false, true, true }
    )]
    fn should_show_linkedin_only_when_present(linkedin: &str, visible: bool) {
        let member = member_from_json(&format!(r#"{{"Linkedin": {linkedin}}}"#));
        let view = render_member_fields(&member);
        assert_eq!(visible, view.linkedin().is_some());
    }

    #[test]
    fn should_hide_linkedin_when_missing() {
        let view = render_member_fields(&member_from_json("{}"));
        assert_eq!(&None, view.linkedin());
    }

    #[test]
    fn should_render_card_fields() {
        let view = render_card_fields(&get_complete_member());
        assert_eq!("Ann Nguyen", view.name());
        assert_eq!("Software Engineer", view.title());
        assert_eq!("Acme", view.organization());
        assert_eq!("🇻🇳", view.flag());
        assert_eq!("Hanoi", view.city());
        assert_eq!("Vietnam", view.country());
    }

    #[test]
    fn should_render_card_placeholder_picture_from_name() {
        let member = member_from_json(r#"{"Name": "Bob"}"#);
        let view = render_card_fields(&member);
        assert_eq!(
            "https://via.placeholder.com/120x120/6c757d/ffffff?text=B",
            view.image_src()
        );
        assert_eq!("", view.country());
    }

    #[parameterized(
        alt = { "Ann", "  émile", "", "   " },
        expected = {
            "https://via.placeholder.com/150x150/6c757d/ffffff?text=A",
            "https://via.placeholder.com/150x150/6c757d/ffffff?text=é",
            "https://via.placeholder.com/150x150/6c757d/ffffff?text=M",
            "https://via.placeholder.com/150x150/6c757d/ffffff?text=M",
        }
    )]
    fn should_compute_fallback_image(alt: &str, expected: &str) {
        assert_eq!(expected, fallback_image_url(alt, MODAL_IMAGE_SIZE));
    }
}
