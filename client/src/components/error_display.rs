// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Display;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ErrorData {
	message: &'static str,
	error: Option<String>,
}

impl ErrorData {
	/// Creates a new data object with an error object to render
	pub fn new_with_error(message: &'static str, error: impl Display) -> Self {
		let error = Some(format!("{error}"));
		Self { message, error }
	}

	pub fn to_view<'a, G: Html>(&self, ctx: Scope<'a>, dismiss_handler: impl Fn(WebEvent) + 'a) -> View<G> {
		let message = self.message;
		let details_view = if let Some(error_details) = self.error.clone() {
			view! {
				ctx,
				span(class="page_error_entry_details") { (error_details) }
			}
		} else {
			view! { ctx, }
		};
		view! {
			ctx,
			li(class="page_error_entry") {
				span(class="page_error_entry_text") { (message) }
				(details_view)
				span(class="page_error_entry_dismiss") {
					a(class="click", on:click=dismiss_handler) { "[X]" }
				}
			}
		}
	}
}

#[derive(Prop)]
pub struct ErrorDisplayProps<'a> {
	errors: &'a Signal<Vec<ErrorData>>,
}

/// Lists errors that happened while submitting, each of which the user can dismiss
#[component]
pub fn ErrorDisplay<'a, G: Html>(ctx: Scope<'a>, props: ErrorDisplayProps<'a>) -> View<G> {
	let errors_signal = props.errors;
	let errors = create_memo(ctx, || (*errors_signal.get()).clone());

	view! {
		ctx,
		ul(id="page_errors") {
			Indexed(
				iterable=errors,
				view=move |ctx, error| {
					let dismiss_handler = {
						let error = error.clone();
						move |_event: WebEvent| {
							let index = errors_signal.get().iter().position(|check_error| error == *check_error);
							if let Some(index) = index {
								errors_signal.modify().remove(index);
							}
						}
					};
					error.to_view(ctx, dismiss_handler)
				}
			)
		}
	}
}
