// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the endpoint assigned to an accepted sign-up. Some endpoints send it as a number and some as a
/// string, so both are accepted.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntryId {
	Number(u64),
	Text(String),
}

impl fmt::Display for EntryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Number(id) => write!(f, "{}", id),
			Self::Text(id) => write!(f, "{}", id),
		}
	}
}

/// Response data from the endpoint for a successful sign-up
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptedEntry {
	pub id: EntryId,
	pub name: String,
	pub email: String,
	pub password: String,
	#[serde(default)]
	pub terms_of_service: Option<bool>,
	#[serde(default)]
	pub created_at: Option<DateTime<Utc>>,
}

impl AcceptedEntry {
	/// The lines shown for this entry in the accepted entries list
	pub fn display_lines(&self) -> [String; 3] {
		[
			format!("Name: {}", self.name),
			format!("Email: {}", self.email),
			format!("Password: {}", self.password),
		]
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	#[test]
	fn decodes_numeric_id() {
		let entry: AcceptedEntry =
			serde_json::from_str(r#"{"id":1,"name":"Rex","email":"rex@x.com","password":"abc123"}"#).unwrap();
		assert_eq!(entry.id, EntryId::Number(1));
		assert_eq!(entry.name, "Rex");
		assert_eq!(entry.terms_of_service, None);
		assert_eq!(entry.created_at, None);
	}

	#[test]
	fn decodes_echoed_response_with_string_id() {
		let body = r#"{
			"name": "Rex",
			"email": "rex@x.com",
			"password": "abc123",
			"termsOfService": true,
			"id": "734",
			"createdAt": "2024-03-05T10:20:30.000Z"
		}"#;
		let entry: AcceptedEntry = serde_json::from_str(body).unwrap();
		assert_eq!(entry.id, EntryId::Text(String::from("734")));
		assert_eq!(entry.id.to_string(), "734");
		assert_eq!(entry.terms_of_service, Some(true));
		assert_eq!(entry.created_at, Some(Utc.with_ymd_and_hms(2024, 3, 5, 10, 20, 30).unwrap()));
	}

	#[test]
	fn entry_without_password_is_rejected() {
		let result: Result<AcceptedEntry, _> = serde_json::from_str(r#"{"id":1,"name":"Rex","email":"rex@x.com"}"#);
		assert!(result.is_err());
	}

	#[test]
	fn display_lines_show_each_field() {
		let entry: AcceptedEntry =
			serde_json::from_str(r#"{"id":1,"name":"Rex","email":"rex@x.com","password":"abc123"}"#).unwrap();
		assert_eq!(
			entry.display_lines(),
			[
				String::from("Name: Rex"),
				String::from("Email: rex@x.com"),
				String::from("Password: abc123")
			]
		);
	}
}
