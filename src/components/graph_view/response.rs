use leptos::prelude::*;

use crate::graph::{ResponseSlot, parse_query_response};
use crate::sample::SAMPLE_RESPONSE;

/// Accepts a query response payload and shows its answer.
///
/// A payload that fails to decode is reported inline and leaves the previous
/// response in place.
#[component]
pub fn ResponsePanel(response: RwSignal<ResponseSlot>) -> impl IntoView {
	let (draft, set_draft) = signal(SAMPLE_RESPONSE.to_owned());
	let (error, set_error) = signal(None::<String>);

	let apply = move |_| {
		let result = draft.with(|json| parse_query_response(json)).map(Some);
		let message = result.as_ref().err().map(ToString::to_string);
		response.update(|slot| {
			let ticket = slot.begin_fetch();
			slot.complete(ticket, result);
		});
		set_error.set(message);
	};
	let clear = move |_| {
		response.update(|slot| slot.replace(None));
		set_error.set(None);
	};

	let answer = move || {
		response.with(|slot| {
			slot.value()
				.as_ref()
				.map(|r| r.answer.clone())
				.unwrap_or_default()
		})
	};
	let cypher = move || {
		response.with(|slot| {
			slot.value()
				.as_ref()
				.map(|r| r.cypher_query.clone())
				.unwrap_or_default()
		})
	};

	view! {
		<fieldset class="response-panel">
			<legend>"Query response"</legend>
			<textarea
				rows=10
				prop:value=move || draft.get()
				on:input=move |ev| set_draft.set(event_target_value(&ev))
			/>
			<div class="actions">
				<button on:click=apply>"Apply"</button>
				<button on:click=clear>"Clear"</button>
			</div>
			<Show when=move || error.with(Option::is_some)>
				<p class="error">{move || error.get().unwrap_or_default()}</p>
			</Show>
			<p class="answer">{answer}</p>
			<code class="cypher">{cypher}</code>
		</fieldset>
	}
}
