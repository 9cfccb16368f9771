// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::error::Error;
use std::fmt;

/// Errors that can occur when submitting the sign-up form to the endpoint
#[derive(Debug)]
pub enum SubmitError {
	Serialize(serde_json::Error),
	Network(gloo_net::Error),
	Status {
		status: u16,
		status_text: String,
		body: String,
	},
	Decode(serde_json::Error),
}

impl From<gloo_net::Error> for SubmitError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

impl fmt::Display for SubmitError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Serialize(error) => write!(f, "Failed to encode the sign-up data: {}", error),
			Self::Network(error) => write!(f, "Failed to reach the sign-up endpoint: {}", error),
			Self::Status {
				status,
				status_text,
				body,
			} => {
				write!(f, "The sign-up endpoint responded with {} {}", status, status_text)?;
				if !body.is_empty() {
					write!(f, ": {}", body)?;
				}
				Ok(())
			}
			Self::Decode(error) => write!(f, "The sign-up endpoint sent an unexpected response: {}", error),
		}
	}
}

impl Error for SubmitError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Serialize(error) | Self::Decode(error) => Some(error),
			Self::Network(error) => Some(error),
			Self::Status { .. } => None,
		}
	}
}
