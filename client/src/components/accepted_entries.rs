// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use onboarding_shared::entries::AcceptedEntries;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct AcceptedEntryListProps<'a> {
	entries: &'a ReadSignal<AcceptedEntries>,
}

#[component]
pub fn AcceptedEntryList<'a, G: Html>(ctx: Scope<'a>, props: AcceptedEntryListProps<'a>) -> View<G> {
	let entries_signal = props.entries;
	let entry_list = create_memo(ctx, move || entries_signal.get().entries().to_vec());

	view! {
		ctx,
		div(class="accepted_entries") {
			Indexed(
				iterable=entry_list,
				view=|ctx, entry| {
					let [name, email, password] = entry.display_lines();
					view! {
						ctx,
						ul(class="accepted_entry") {
							li { (name) }
							li { (email) }
							li { (password) }
						}
					}
				}
			)
		}
	}
}
