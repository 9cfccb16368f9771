// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::sign_up::SignUpValues;
use crate::validation::{validate, ValidationErrors};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Field {
	Name,
	Email,
	Password,
	TermsOfService,
}

impl Field {
	pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Password, Field::TermsOfService];

	/// The name used for the field's input element and in the request body
	pub fn input_name(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Email => "email",
			Self::Password => "password",
			Self::TermsOfService => "termsOfService",
		}
	}
}

/// Tracks which fields the user has focused and then left
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TouchedFields {
	name: bool,
	email: bool,
	password: bool,
	terms_of_service: bool,
}

impl TouchedFields {
	/// Every field marked touched, as happens when the form is submitted
	pub fn all() -> Self {
		Self {
			name: true,
			email: true,
			password: true,
			terms_of_service: true,
		}
	}

	pub fn touch(&mut self, field: Field) {
		*self.slot(field) = true;
	}

	pub fn is_touched(&self, field: Field) -> bool {
		match field {
			Field::Name => self.name,
			Field::Email => self.email,
			Field::Password => self.password,
			Field::TermsOfService => self.terms_of_service,
		}
	}

	fn slot(&mut self, field: Field) -> &mut bool {
		match field {
			Field::Name => &mut self.name,
			Field::Email => &mut self.email,
			Field::Password => &mut self.password,
			Field::TermsOfService => &mut self.terms_of_service,
		}
	}
}

/// Read-only view of the form at one moment: which fields are touched and the errors the values produce
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormSnapshot {
	touched: TouchedFields,
	errors: ValidationErrors,
}

impl FormSnapshot {
	pub fn new(values: &SignUpValues, touched: TouchedFields) -> Self {
		let errors = validate(values);
		Self { touched, errors }
	}

	/// The error to show under a field. Errors stay hidden until the user has interacted with the field.
	pub fn visible_error(&self, field: Field) -> Option<&'static str> {
		if self.touched.is_touched(field) {
			self.errors.get(field)
		} else {
			None
		}
	}
}

/// Marks every field touched, as submitting the form does, and returns the values to send when all of them pass
/// validation.
///
/// # Errors
///
/// Returns every validation error when any field fails; nothing should be sent in that case.
pub fn prepare_submission(touched: &mut TouchedFields, values: &SignUpValues) -> Result<SignUpValues, ValidationErrors> {
	*touched = TouchedFields::all();
	let errors = validate(values);
	if errors.is_empty() {
		Ok(values.clone())
	} else {
		Err(errors)
	}
}
