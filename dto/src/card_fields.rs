use derive_getters::Getters;

/// The few fields that can be read back from a member card already displayed on the page.
/// Used when the search endpoint can't be reached.
#[derive(Debug, Clone, Default, Getters, PartialEq, Eq)]
pub struct CardFields {
    name: String,
    title: String,
    organization: String,
    country: String,
}

impl CardFields {
    pub fn new(name: String, title: String, organization: String, country: String) -> Self {
        Self {
            name,
            title,
            organization,
            country,
        }
    }
}
