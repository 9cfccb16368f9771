// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::accepted_entries::AcceptedEntryList;
use crate::components::error_display::{ErrorData, ErrorDisplay};
use crate::components::field_error::FieldError;
use crate::error::SubmitError;
use crate::submission::{PendingSubmissions, Submitter};
use onboarding_shared::entries::AcceptedEntries;
use onboarding_shared::form::{prepare_submission, Field, FormSnapshot, TouchedFields};
use onboarding_shared::messages::accepted::AcceptedEntry;
use onboarding_shared::messages::sign_up::{InitialValues, SignUpValues};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Applies the outcome of a finished submission. A success adds exactly one entry; a failure leaves the entries
/// alone and comes back as an error to show.
pub fn complete_submission(
	entries: &mut AcceptedEntries,
	pending: &mut PendingSubmissions,
	outcome: Result<AcceptedEntry, SubmitError>,
) -> Option<ErrorData> {
	pending.finish();
	match outcome {
		Ok(entry) => {
			entries.append(entry);
			None
		}
		Err(error) => Some(ErrorData::new_with_error("Failed to submit sign-up.", error)),
	}
}

#[derive(Prop)]
pub struct SignUpViewProps {
	initial: InitialValues,
}

#[component]
pub fn SignUpView<G: Html>(ctx: Scope<'_>, props: SignUpViewProps) -> View<G> {
	log::debug!("Activating sign-up form");

	let initial_values = SignUpValues::from_initial(props.initial);
	let name_signal = create_signal(ctx, initial_values.name);
	let email_signal = create_signal(ctx, initial_values.email);
	let password_signal = create_signal(ctx, initial_values.password);
	let terms_of_service_signal = create_signal(ctx, initial_values.terms_of_service);
	let touched_signal = create_signal(ctx, TouchedFields::default());

	let values_signal = create_memo(ctx, || SignUpValues {
		name: (*name_signal.get()).clone(),
		email: (*email_signal.get()).clone(),
		password: (*password_signal.get()).clone(),
		terms_of_service: *terms_of_service_signal.get(),
	});
	// Validation reruns whenever any value or touched state changes
	let snapshot_signal = create_memo(ctx, || FormSnapshot::new(&values_signal.get(), *touched_signal.get()));

	let entries_signal = create_signal(ctx, AcceptedEntries::default());
	let pending_signal = create_signal(ctx, PendingSubmissions::default());
	let submission_errors_signal: &Signal<Vec<ErrorData>> = create_signal(ctx, Vec::new());
	let submitting_signal = create_memo(ctx, || pending_signal.get().is_pending());

	let touch_handler = move |field: Field| move |_event: WebEvent| touched_signal.modify().touch(field);

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		let values = (*values_signal.get()).clone();
		let values = match prepare_submission(&mut touched_signal.modify(), &values) {
			Ok(values) => values,
			Err(errors) => {
				log::debug!("Sign-up not submitted; {} fields are invalid", errors.len());
				return;
			}
		};

		pending_signal.modify().start();

		// Scoped tasks are dropped along with the form when it's unmounted
		spawn_local_scoped(ctx, async move {
			let submitter: &Submitter = use_context(ctx);
			let outcome = submitter.submit(&values).await;
			let error = complete_submission(&mut entries_signal.modify(), &mut pending_signal.modify(), outcome);
			if let Some(error) = error {
				submission_errors_signal.modify().push(error);
			}
		});
	};

	view! {
		ctx,
		div(class="sign_up_form") {
			h1 { "Sign Up" }
			form(id="sign_up", on:submit=form_submission_handler) {
				input(type="text", name=Field::Name.input_name(), placeholder="Name", bind:value=name_signal, on:blur=touch_handler(Field::Name))
				FieldError(snapshot=snapshot_signal, field=Field::Name)

				input(type="text", name=Field::Email.input_name(), placeholder="Email", bind:value=email_signal, on:blur=touch_handler(Field::Email))
				FieldError(snapshot=snapshot_signal, field=Field::Email)

				input(type="text", name=Field::Password.input_name(), placeholder="Password", bind:value=password_signal, on:blur=touch_handler(Field::Password))
				FieldError(snapshot=snapshot_signal, field=Field::Password)

				label(class="checkbox-container") {
					"Terms of Service"
					input(type="checkbox", name=Field::TermsOfService.input_name(), bind:checked=terms_of_service_signal, on:blur=touch_handler(Field::TermsOfService))
					span(class="checkmark")
				}

				button(type="submit") { "Submit!" }
				(if *submitting_signal.get() {
					view! { ctx, span(class="sign_up_submitting") { "Submitting..." } }
				} else {
					view! { ctx, }
				})
			}
			ErrorDisplay(errors=submission_errors_signal)
			AcceptedEntryList(entries=entries_signal)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::submission::testing::{submitter, Reply};
	use futures::executor::block_on;
	use onboarding_shared::validation::ValidationErrors;

	const REX_RESPONSE: &str = r#"{"id":1,"name":"Rex","email":"rex@x.com","password":"abc123"}"#;

	struct FormRun {
		touched: TouchedFields,
		entries: AcceptedEntries,
		pending: PendingSubmissions,
		errors: Vec<ErrorData>,
		invalid: Option<ValidationErrors>,
	}

	/// Runs one submit the way the form's submit handler does
	fn run_submit(submitter: &Submitter, values: &SignUpValues) -> FormRun {
		let mut run = FormRun {
			touched: TouchedFields::default(),
			entries: AcceptedEntries::default(),
			pending: PendingSubmissions::default(),
			errors: Vec::new(),
			invalid: None,
		};
		match prepare_submission(&mut run.touched, values) {
			Ok(values) => {
				run.pending.start();
				let outcome = block_on(submitter.submit(&values));
				if let Some(error) = complete_submission(&mut run.entries, &mut run.pending, outcome) {
					run.errors.push(error);
				}
			}
			Err(errors) => run.invalid = Some(errors),
		}
		run
	}

	fn rex() -> SignUpValues {
		SignUpValues {
			name: String::from("Rex"),
			email: String::from("rex@x.com"),
			password: String::from("abc123"),
			terms_of_service: true,
		}
	}

	#[test]
	fn invalid_form_is_touched_and_never_posted() {
		let (submitter, requests) = submitter(Reply::Respond(201, REX_RESPONSE));
		let run = run_submit(&submitter, &SignUpValues::default());

		assert_eq!(run.touched, TouchedFields::all());
		assert_eq!(run.invalid.map(|errors| errors.len()), Some(3));
		assert!(requests.borrow().is_empty());
		assert!(run.entries.is_empty());
		assert!(!run.pending.is_pending());
	}

	#[test]
	fn valid_form_posts_once_and_appends_one_entry() {
		let (submitter, requests) = submitter(Reply::Respond(201, REX_RESPONSE));
		let run = run_submit(&submitter, &rex());

		assert_eq!(requests.borrow().len(), 1);
		assert_eq!(run.entries.len(), 1);
		assert_eq!(run.entries.entries()[0].display_lines()[0], "Name: Rex");
		assert!(run.errors.is_empty());
		assert!(!run.pending.is_pending());
	}

	#[test]
	fn failed_post_keeps_entries_and_reports_error() {
		let (submitter, requests) = submitter(Reply::Fail);
		let run = run_submit(&submitter, &rex());

		assert_eq!(requests.borrow().len(), 1);
		assert!(run.entries.is_empty());
		assert_eq!(run.errors.len(), 1);
		assert!(!run.pending.is_pending());
	}

	#[test]
	fn form_renders_inputs_without_errors() {
		let (submitter, _) = submitter(Reply::Respond(201, REX_RESPONSE));
		let html = sycamore::render_to_string(|ctx| {
			provide_context(ctx, submitter);
			view! { ctx, SignUpView(initial=InitialValues::default()) }
		});

		for name in ["name", "email", "password", "termsOfService"] {
			assert!(html.contains(&format!("name=\"{}\"", name)), "missing input {}", name);
		}
		assert!(html.contains("type=\"checkbox\""));
		assert!(html.contains("Submit!"));
		assert!(!html.contains("class=\"error\""));
		assert!(!html.contains("Submitting..."));
		assert!(!html.contains("class=\"accepted_entry\""));
	}
}
