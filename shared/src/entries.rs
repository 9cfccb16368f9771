// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::accepted::AcceptedEntry;

/// Entries the endpoint has accepted while the form has been shown, in the order they were accepted. Entries
/// are only ever added.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AcceptedEntries {
	entries: Vec<AcceptedEntry>,
}

impl AcceptedEntries {
	pub fn append(&mut self, entry: AcceptedEntry) {
		self.entries.push(entry);
	}

	pub fn entries(&self) -> &[AcceptedEntry] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
