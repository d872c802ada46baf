//! Letter builder: addressing fields, body, and a formatted preview.

use leptos::prelude::*;

#[component]
pub fn LetterBuilderPage() -> impl IntoView {
    let sender = RwSignal::new(String::new());
    let recipient = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());

    view! {
        <div class="builder-page">
            <header class="builder-page__header">
                <h1>"Letter Builder"</h1>
                <p>"Compose a formal letter with a live preview."</p>
            </header>

            <div class="builder-page__columns">
                <section class="builder-page__form">
                    <label>
                        "From"
                        <input
                            class="builder__input"
                            type="text"
                            placeholder="Your name"
                            prop:value=move || sender.get()
                            on:input=move |ev| sender.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "To"
                        <input
                            class="builder__input"
                            type="text"
                            placeholder="Recipient"
                            prop:value=move || recipient.get()
                            on:input=move |ev| recipient.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Subject"
                        <input
                            class="builder__input"
                            type="text"
                            placeholder="Subject line"
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Date"
                        <input
                            class="builder__input"
                            type="date"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Body"
                        <textarea
                            class="builder__textarea builder__textarea--tall"
                            placeholder="Dear ..."
                            prop:value=move || body.get()
                            on:input=move |ev| body.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                </section>

                <aside class="builder-page__preview letter-preview">
                    <p class="letter-preview__date">{move || date.get()}</p>
                    <p class="letter-preview__recipient">{move || recipient.get()}</p>
                    <h2 class="letter-preview__subject">{move || subject.get()}</h2>
                    <pre class="letter-preview__body">{move || body.get()}</pre>
                    <p class="letter-preview__signature">
                        {move || {
                            let name = sender.get();
                            if name.is_empty() { String::new() } else { format!("Sincerely,\n{name}") }
                        }}
                    </p>
                </aside>
            </div>
        </div>
    }
}
