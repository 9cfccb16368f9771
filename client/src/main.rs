// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use onboarding_shared::messages::sign_up::InitialValues;
use sycamore::prelude::*;

mod app;
mod components;
mod config;
mod error;
mod page_utils;
mod pages;
mod submission;
use app::App;
use config::ClientConfig;
use page_utils::set_page_title;
use submission::{FetchTransport, Submitter};

fn main() {
	console_error_panic_hook::set_once();

	let config = ClientConfig::from_document();
	wasm_logger::init(wasm_logger::Config::new(config.log_level));

	let submitter = Submitter::new(config.endpoint, FetchTransport);
	log::debug!("Sign-up submissions will be sent to {}", submitter.endpoint());

	set_page_title("Sign Up");
	sycamore::render(|ctx| {
		provide_context(ctx, submitter);
		view! { ctx, App(initial=InitialValues::default()) }
	});
}
