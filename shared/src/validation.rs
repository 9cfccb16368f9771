// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::form::Field;
use crate::messages::sign_up::SignUpValues;
use std::collections::BTreeMap;

pub const PASSWORD_MIN_LENGTH: usize = 6;

pub const NAME_REQUIRED_MESSAGE: &str = "You silly!!!";
pub const EMAIL_REQUIRED_MESSAGE: &str = "email is a required field";
pub const PASSWORD_REQUIRED_MESSAGE: &str = "Password is required";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be 6 characters or longer";

/// Error messages for each field that currently fails validation. Fields that pass have no entry.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationErrors {
	errors: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
	pub fn get(&self, field: Field) -> Option<&'static str> {
		self.errors.get(&field).copied()
	}

	pub fn is_empty(&self) -> bool {
		self.errors.is_empty()
	}

	pub fn len(&self) -> usize {
		self.errors.len()
	}
}

/// Checks all sign-up values against the field rules.
///
/// The email address is only required to be present; its format isn't checked. The terms of service checkbox
/// has no rule.
pub fn validate(values: &SignUpValues) -> ValidationErrors {
	let mut errors = BTreeMap::new();

	if values.name.is_empty() {
		errors.insert(Field::Name, NAME_REQUIRED_MESSAGE);
	}

	if values.email.is_empty() {
		errors.insert(Field::Email, EMAIL_REQUIRED_MESSAGE);
	}

	if values.password.is_empty() {
		errors.insert(Field::Password, PASSWORD_REQUIRED_MESSAGE);
	} else if values.password.chars().count() < PASSWORD_MIN_LENGTH {
		errors.insert(Field::Password, PASSWORD_TOO_SHORT_MESSAGE);
	}

	ValidationErrors { errors }
}
