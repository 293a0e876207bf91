use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsletterRequest {
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpRequest {
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberType {
    #[default]
    Member,
    Volunteer,
    Donor,
}

impl MemberType {
    pub fn label(self) -> &'static str {
        match self {
            MemberType::Member => "Regular Member",
            MemberType::Volunteer => "Active Volunteer",
            MemberType::Donor => "Supporting Donor",
        }
    }
}

impl fmt::Display for MemberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MemberType::Member => "member",
            MemberType::Volunteer => "volunteer",
            MemberType::Donor => "donor",
        })
    }
}

impl FromStr for MemberType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "member" => Ok(MemberType::Member),
            "volunteer" => Ok(MemberType::Volunteer),
            "donor" => Ok(MemberType::Donor),
            other => Err(format!("unknown member type `{other}`")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub area_of_interest: String,
    pub member_type: MemberType,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollVote {
    pub poll_id: String,
    pub option: String,
}

/// One entry of the event listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    pub event_type: String,
    #[serde(default)]
    pub rsvp_count: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub data: Vec<EventRecord>,
}

// Ids arrive as numbers or strings depending on the backend
fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
