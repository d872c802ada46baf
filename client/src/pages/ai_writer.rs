//! AI Writer page.
//!
//! Generation is simulated: a fixed delay followed by a hardcoded sample
//! document. The delay is not cancellable, so the completion callback
//! checks an alive flag and drops its result if the page was navigated
//! away in the meantime.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Simulated generation latency.
#[cfg(feature = "hydrate")]
const GENERATION_DELAY_MS: u64 = 3_000;

/// The only output the simulated generator ever produces.
#[cfg(feature = "hydrate")]
const SAMPLE_CONTENT: &str = "Dear Hiring Manager,

I am writing to express my strong interest in the Senior Software Engineer position at Microsoft. With over 6 years of experience developing scalable web applications and cloud-based solutions, I am excited about the opportunity to contribute to Microsoft's innovative projects.

In my current role at TechCorp, I have led the development of several high-impact applications serving over 100,000 active users. My expertise includes frontend development with modern frameworks, backend API design, cloud deployment, and mentoring junior engineers across cross-functional teams.

I am particularly drawn to Microsoft's commitment to innovation and its impact on technology worldwide. I believe my technical skills and passion for creating user-centric solutions would be valuable additions to your engineering team.

Thank you for considering my application. I look forward to discussing how my experience can contribute to Microsoft's continued success.

Best regards,
[Your Name]";

const DOCUMENT_TYPES: [(&str, &str); 6] = [
    ("cover-letter", "Cover Letter"),
    ("resume-summary", "Resume Summary"),
    ("business-proposal", "Business Proposal"),
    ("email", "Professional Email"),
    ("contract", "Contract"),
    ("job-description", "Job Description"),
];

const PROMPT_EXAMPLES: [(&str, &str); 3] = [
    (
        "Cover Letter",
        "Write a cover letter for a Senior Software Engineer position at Microsoft, highlighting experience with web and cloud technologies.",
    ),
    (
        "Resume Summary",
        "Create a professional summary for a Product Manager with 5 years of experience in fintech and a background in data analytics.",
    ),
    (
        "Business Proposal",
        "Draft a business proposal for a mobile app development project for a fitness company, including timeline and budget considerations.",
    ),
];

#[component]
pub fn AiWriterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let prompt = RwSignal::new(String::new());
    let document_type = RwSignal::new(String::new());
    let generated = RwSignal::new(String::new());
    let generating = RwSignal::new(false);

    // Dropped on navigation; the pending timer callback checks it before
    // touching any signals.
    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_generate = move |_| {
        if prompt.get().trim().is_empty() || document_type.get().is_empty() {
            return;
        }
        if generating.get() {
            return;
        }
        generating.set(true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(GENERATION_DELAY_MS))
                    .await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                generated.set(SAMPLE_CONTENT.to_owned());
                generating.set(false);
            });
        }
    };

    let on_copy = move |_| {
        #[cfg(not(feature = "hydrate"))]
        let _ = &toasts;
        #[cfg(feature = "hydrate")]
        {
            let text = generated.get();
            if text.is_empty() {
                return;
            }
            leptos::task::spawn_local(async move {
                if let Some(window) = web_sys::window() {
                    let promise = window.navigator().clipboard().write_text(&text);
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                        toasts.update(|state| {
                            state.push(ToastKind::Success, "Copied", "Document copied to clipboard.");
                        });
                    }
                }
            });
        }
    };

    view! {
        <div class="ai-writer">
            <header class="ai-writer__header">
                <h1>"AI Writer"</h1>
                <p>"Let our AI assistant help you create professional documents in seconds"</p>
            </header>

            <div class="ai-writer__columns">
                <section class="ai-writer__compose">
                    <label class="ai-writer__label">
                        "Document Type"
                        <select
                            class="ai-writer__select"
                            on:change=move |ev| document_type.set(event_target_value(&ev))
                        >
                            <option value="">"Select a document type"</option>
                            {DOCUMENT_TYPES
                                .into_iter()
                                .map(|(value, label)| {
                                    view! { <option value=value>{label}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>

                    <label class="ai-writer__label">
                        "Prompt"
                        <textarea
                            class="ai-writer__prompt"
                            placeholder="Describe the document you need..."
                            prop:value=move || prompt.get()
                            on:input=move |ev| prompt.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <button
                        class="btn btn--primary"
                        disabled=move || generating.get()
                        on:click=on_generate
                    >
                        {move || if generating.get() { "Generating..." } else { "Generate" }}
                    </button>

                    <div class="ai-writer__examples">
                        <h3>"Need inspiration?"</h3>
                        {PROMPT_EXAMPLES
                            .into_iter()
                            .map(|(kind, example)| {
                                view! {
                                    <button
                                        class="ai-writer__example"
                                        on:click=move |_| prompt.set(example.to_owned())
                                    >
                                        <span class="badge">{kind}</span>
                                        <span>{example}</span>
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="ai-writer__output">
                    <h3>"Your AI-generated document will appear here"</h3>
                    <Show
                        when=move || !generated.get().is_empty()
                        fallback=move || {
                            view! {
                                <p class="ai-writer__placeholder">
                                    {move || {
                                        if generating.get() {
                                            "Writing your document..."
                                        } else {
                                            "Pick a type, describe what you need, and hit Generate."
                                        }
                                    }}
                                </p>
                            }
                        }
                    >
                        <pre class="ai-writer__content">{move || generated.get()}</pre>
                        <button class="btn btn--outline" on:click=on_copy>
                            "Copy"
                        </button>
                    </Show>
                </section>
            </div>
        </div>
    }
}
