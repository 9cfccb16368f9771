// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use onboarding_shared::form::{Field, FormSnapshot};
use sycamore::prelude::*;

#[derive(Prop)]
pub struct FieldErrorProps<'a> {
	snapshot: &'a ReadSignal<FormSnapshot>,
	field: Field,
}

/// Shows the validation error for one field once the field has been touched
#[component]
pub fn FieldError<'a, G: Html>(ctx: Scope<'a>, props: FieldErrorProps<'a>) -> View<G> {
	let field = props.field;
	let snapshot = props.snapshot;
	let message_signal = create_memo(ctx, move || snapshot.get().visible_error(field));

	view! {
		ctx,
		(if let Some(message) = *message_signal.get() {
			view! {
				ctx,
				p(class="error") { (message) }
			}
		} else {
			view! { ctx, }
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use onboarding_shared::form::TouchedFields;
	use onboarding_shared::messages::sign_up::SignUpValues;

	fn render_field_error(values: SignUpValues, touched: TouchedFields, field: Field) -> String {
		sycamore::render_to_string(|ctx| {
			let snapshot = create_signal(ctx, FormSnapshot::new(&values, touched));
			view! { ctx, FieldError(snapshot=snapshot, field=field) }
		})
	}

	#[test]
	fn touched_empty_fields_show_required_errors() {
		let values = SignUpValues::default();
		assert!(render_field_error(values.clone(), TouchedFields::all(), Field::Name).contains("You silly!!!"));
		assert!(render_field_error(values.clone(), TouchedFields::all(), Field::Email)
			.contains("email is a required field"));
		assert!(render_field_error(values, TouchedFields::all(), Field::Password).contains("Password is required"));
	}

	#[test]
	fn untouched_field_shows_nothing() {
		let html = render_field_error(SignUpValues::default(), TouchedFields::default(), Field::Name);
		assert!(!html.contains("You silly!!!"));
		assert!(!html.contains("class=\"error\""));
	}

	#[test]
	fn short_password_shows_length_error() {
		let values = SignUpValues {
			password: String::from("abc12"),
			..Default::default()
		};
		let mut touched = TouchedFields::default();
		touched.touch(Field::Password);
		let html = render_field_error(values, touched, Field::Password);
		assert!(html.contains("Password must be 6 characters or longer"));
	}

	#[test]
	fn six_character_password_shows_no_error() {
		let values = SignUpValues {
			name: String::from("Rex"),
			email: String::from("rex@x.com"),
			password: String::from("abc123"),
			terms_of_service: true,
		};
		let html = render_field_error(values, TouchedFields::all(), Field::Password);
		assert!(!html.contains("class=\"error\""));
	}
}
