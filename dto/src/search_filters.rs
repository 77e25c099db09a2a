use crate::card_fields::CardFields;
use derive_getters::Getters;

/// The criteria a visitor can search members with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Name,
    City,
    Country,
    Class,
    Title,
    Industry,
}

impl FilterKey {
    /// Every key, in the order they appear in a search query.
    pub const ALL: [FilterKey; 6] = [
        FilterKey::Name,
        FilterKey::City,
        FilterKey::Country,
        FilterKey::Class,
        FilterKey::Title,
        FilterKey::Industry,
    ];

    pub fn query_name(&self) -> &'static str {
        match self {
            FilterKey::Name => "name",
            FilterKey::City => "city",
            FilterKey::Country => "country",
            FilterKey::Class => "class",
            FilterKey::Title => "title",
            FilterKey::Industry => "industry",
        }
    }
}

/// Trimmed, non-empty search criteria.
/// A criterion that has been left empty is not a constraint and is simply absent.
#[derive(Debug, Clone, Default, Getters, PartialEq, Eq)]
pub struct SearchFilters {
    name: Option<String>,
    city: Option<String>,
    country: Option<String>,
    class: Option<String>,
    title: Option<String>,
    industry: Option<String>,
}

impl SearchFilters {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (FilterKey, S)>,
        S: AsRef<str>,
    {
        let mut filters = Self::default();
        for (key, value) in values {
            filters.set(key, value.as_ref());
        }
        filters
    }

    pub fn set(&mut self, key: FilterKey, value: &str) {
        let value = value.trim();
        let value = if value.is_empty() {
            None
        } else {
            Some(value.to_owned())
        };
        *self.slot(key) = value;
    }

    pub fn get(&self, key: FilterKey) -> Option<&str> {
        match key {
            FilterKey::Name => self.name.as_deref(),
            FilterKey::City => self.city.as_deref(),
            FilterKey::Country => self.country.as_deref(),
            FilterKey::Class => self.class.as_deref(),
            FilterKey::Title => self.title.as_deref(),
            FilterKey::Industry => self.industry.as_deref(),
        }
    }

    fn slot(&mut self, key: FilterKey) -> &mut Option<String> {
        match key {
            FilterKey::Name => &mut self.name,
            FilterKey::City => &mut self.city,
            FilterKey::Country => &mut self.country,
            FilterKey::Class => &mut self.class,
            FilterKey::Title => &mut self.title,
            FilterKey::Industry => &mut self.industry,
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterKey::ALL.iter().all(|key| self.get(*key).is_none())
    }

    /// The `(key, value)` pairs to send to the search endpoint, in query order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        FilterKey::ALL
            .iter()
            .filter_map(|key| self.get(*key).map(|value| (key.query_name(), value)))
            .collect()
    }

    /// Whether a displayed card matches these filters.
    ///
    /// Only name and title (case-insensitive substring) and country (exact)
    /// can be checked from a card. City, class and industry are ignored.
    pub fn matches_card(&self, card: &CardFields) -> bool {
        if let Some(name) = &self.name
            && !contains_ignoring_case(card.name(), name)
        {
            return false;
        }
        if let Some(title) = &self.title
            && !contains_ignoring_case(card.title(), title)
        {
            return false;
        }
        if let Some(country) = &self.country
            && card.country() != country
        {
            return false;
        }
        true
    }
}

fn contains_ignoring_case(text: &str, pattern: &str) -> bool {
    text.to_lowercase().contains(&pattern.to_lowercase())
}
