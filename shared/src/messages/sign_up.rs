// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Data from the client when submitting the sign-up form. This is also the request body sent to the endpoint.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpValues {
	pub name: String,
	pub email: String,
	pub password: String,
	pub terms_of_service: bool,
}

/// Values the hosting page may prefill the form with. Any value left out starts empty.
#[derive(Clone, Debug, Default)]
pub struct InitialValues {
	pub name: Option<String>,
	pub email: Option<String>,
	pub password: Option<String>,
	pub terms_of_service: Option<bool>,
}

impl SignUpValues {
	pub fn from_initial(initial: InitialValues) -> Self {
		Self {
			name: initial.name.unwrap_or_default(),
			email: initial.email.unwrap_or_default(),
			password: initial.password.unwrap_or_default(),
			terms_of_service: initial.terms_of_service.unwrap_or(false),
		}
	}
}
