// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SubmitError;
use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use onboarding_shared::messages::accepted::AcceptedEntry;
use onboarding_shared::messages::sign_up::SignUpValues;
use serde::de::DeserializeOwned;

/// Raw response data from a request to the endpoint
pub struct TransportResponse {
	pub status: u16,
	pub status_text: String,
	pub body: String,
}

impl TransportResponse {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends JSON request bodies to an endpoint
pub trait SubmitTransport {
	fn post_json<'a>(&'a self, url: &'a str, body: String) -> LocalBoxFuture<'a, Result<TransportResponse, SubmitError>>;
}

/// Transport using the browser's fetch API
pub struct FetchTransport;

impl SubmitTransport for FetchTransport {
	fn post_json<'a>(&'a self, url: &'a str, body: String) -> LocalBoxFuture<'a, Result<TransportResponse, SubmitError>> {
		Box::pin(async move {
			let response = Request::post(url)
				.header("Content-Type", "application/json")
				.body(body)?
				.send()
				.await?;
			let status = response.status();
			let status_text = response.status_text();
			let body = response.text().await?;
			Ok::<_, SubmitError>(TransportResponse {
				status,
				status_text,
				body,
			})
		})
	}
}

/// Count of submissions that have been sent and not yet answered. Submissions can overlap, so the form is only
/// idle once every one of them has finished.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PendingSubmissions {
	count: usize,
}

impl PendingSubmissions {
	pub fn start(&mut self) {
		self.count += 1;
	}

	pub fn finish(&mut self) {
		self.count = self.count.saturating_sub(1);
	}

	pub fn is_pending(&self) -> bool {
		self.count > 0
	}
}

/// Submits sign-up data to a single configured endpoint
pub struct Submitter {
	endpoint: String,
	transport: Box<dyn SubmitTransport>,
}

impl Submitter {
	pub fn new(endpoint: String, transport: impl SubmitTransport + 'static) -> Self {
		Self {
			endpoint,
			transport: Box::new(transport),
		}
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// Sends the sign-up data to the endpoint once. Nothing is retried.
	///
	/// # Errors
	///
	/// Errors occur when the values can't be encoded, when the request can't be completed, when the endpoint
	/// responds with a non-success status, and when the response body isn't an accepted entry. Every error is
	/// also logged.
	pub async fn submit(&self, values: &SignUpValues) -> Result<AcceptedEntry, SubmitError> {
		log::debug!("Submitting sign-up to {}", self.endpoint);
		let result = self.send(values).await;
		match &result {
			Ok(entry) => log::info!("Sign-up accepted with ID {}", entry.id),
			Err(error) => log::error!("Sign-up submission failed: {}", error),
		}
		result
	}

	async fn send(&self, values: &SignUpValues) -> Result<AcceptedEntry, SubmitError> {
		let body = serde_json::to_string(values).map_err(SubmitError::Serialize)?;
		let response = self.transport.post_json(&self.endpoint, body).await?;
		if !response.is_success() {
			return Err(SubmitError::Status {
				status: response.status,
				status_text: response.status_text,
				body: response.body,
			});
		}
		decode_body(&response.body)
	}
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, SubmitError> {
	serde_json::from_str(body).map_err(SubmitError::Decode)
}
