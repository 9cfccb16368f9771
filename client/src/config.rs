// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::Level;
use onboarding_shared::DEFAULT_SUBMIT_ENDPOINT;
use std::str::FromStr;
use web_sys::window;

const ENDPOINT_META_NAME: &str = "onboarding-endpoint";
const LOG_LEVEL_META_NAME: &str = "onboarding-log-level";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
	pub endpoint: String,
	pub log_level: Level,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			endpoint: String::from(DEFAULT_SUBMIT_ENDPOINT),
			log_level: Level::Debug,
		}
	}
}

impl ClientConfig {
	/// Reads the configuration from `<meta>` tags in the hosting page. Anything missing or unreadable uses the
	/// default.
	pub fn from_document() -> Self {
		let endpoint = meta_content(ENDPOINT_META_NAME);
		let log_level = meta_content(LOG_LEVEL_META_NAME);
		Self::from_values(endpoint.as_deref(), log_level.as_deref())
	}

	pub fn from_values(endpoint: Option<&str>, log_level: Option<&str>) -> Self {
		let mut config = Self::default();

		if let Some(endpoint) = endpoint.map(str::trim) {
			if !endpoint.is_empty() {
				config.endpoint = String::from(endpoint);
			}
		}
		if let Some(level) = log_level.and_then(|level| Level::from_str(level.trim()).ok()) {
			config.log_level = level;
		}

		config
	}
}

fn meta_content(name: &str) -> Option<String> {
	let document = window()?.document()?;
	let selector = format!("meta[name=\"{}\"]", name);
	let element = document.query_selector(&selector).ok()??;
	element.get_attribute("content")
}
