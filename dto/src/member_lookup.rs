use crate::lookup_error::MemberNotFound;
use crate::member::Member;
use serde::Deserialize;

/// Body of the member endpoint: either the member, or an error sentinel.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MemberLookup {
    NotFound { error: String },
    Found(Member),
}

impl MemberLookup {
    pub fn into_member(self) -> Result<Member, MemberNotFound> {
        match self {
            MemberLookup::NotFound { error } => Err(MemberNotFound::Unknown(error)),
            MemberLookup::Found(member) => Ok(member),
        }
    }
}
