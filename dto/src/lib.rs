pub mod card_fields;
pub mod lookup_error;
pub mod member;
pub mod member_lookup;
pub mod member_view;
pub mod optional_text;
pub mod rendered_members;
pub mod search_filters;
pub mod search_response;
pub mod search_sequencer;
