use crate::member::Member;
use derive_getters::{Dissolve, Getters};
use serde::Deserialize;

/// Body of the search endpoint.
#[derive(Debug, Deserialize, Getters, Dissolve, PartialEq)]
pub struct SearchResponse {
    members: Vec<Member>,
    filtered_count: usize,
    total_count: usize,
}

impl SearchResponse {
    pub fn new(members: Vec<Member>, filtered_count: usize, total_count: usize) -> Self {
        Self {
            members,
            filtered_count,
            total_count,
        }
    }
}

pub fn results_counter_text(filtered_count: usize, total_count: usize) -> String {
    format!("Showing {filtered_count} of {total_count} members")
}
