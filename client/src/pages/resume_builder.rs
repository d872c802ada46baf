//! Resume builder with personal details, summary, and experience entries.

use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct Experience {
    role: String,
    company: String,
    years: String,
}

#[component]
pub fn ResumeBuilderPage() -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let summary = RwSignal::new(String::new());
    let experiences = RwSignal::new(vec![Experience::default()]);

    let add_experience = move |_| experiences.update(|list| list.push(Experience::default()));

    let text_field = move |label: &'static str,
                           placeholder: &'static str,
                           value: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    class="builder__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    let experience_rows = move || {
        experiences
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                view! {
                    <li class="builder__experience">
                        <input
                            class="builder__input"
                            type="text"
                            placeholder="Role"
                            prop:value=entry.role.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                experiences
                                    .update(|list| {
                                        if let Some(entry) = list.get_mut(index) {
                                            entry.role = value.clone();
                                        }
                                    });
                            }
                        />
                        <input
                            class="builder__input"
                            type="text"
                            placeholder="Company"
                            prop:value=entry.company.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                experiences
                                    .update(|list| {
                                        if let Some(entry) = list.get_mut(index) {
                                            entry.company = value.clone();
                                        }
                                    });
                            }
                        />
                        <input
                            class="builder__input builder__input--narrow"
                            type="text"
                            placeholder="2020 - 2024"
                            prop:value=entry.years.clone()
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                experiences
                                    .update(|list| {
                                        if let Some(entry) = list.get_mut(index) {
                                            entry.years = value.clone();
                                        }
                                    });
                            }
                        />
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| {
                                experiences
                                    .update(|list| {
                                        if list.len() > 1 {
                                            list.remove(index);
                                        }
                                    });
                            }
                        >
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="builder-page">
            <header class="builder-page__header">
                <h1>"Resume Builder"</h1>
                <p>"Fill in your details and watch the preview update as you type."</p>
            </header>

            <div class="builder-page__columns">
                <section class="builder-page__form">
                    {text_field("Full Name", "Jane Doe", full_name)}
                    {text_field("Professional Title", "Product Designer", title)}
                    {text_field("Email", "jane@example.com", email)}
                    {text_field("Phone", "+1 555 010 0100", phone)}

                    <label>
                        "Professional Summary"
                        <textarea
                            class="builder__textarea"
                            placeholder="A short paragraph about you..."
                            prop:value=move || summary.get()
                            on:input=move |ev| summary.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <h3>"Experience"</h3>
                    <ul class="builder__experiences">{experience_rows}</ul>
                    <button class="btn btn--outline" on:click=add_experience>
                        "+ Add Experience"
                    </button>
                </section>

                <aside class="builder-page__preview resume-preview">
                    <h2>{move || full_name.get()}</h2>
                    <p class="resume-preview__title">{move || title.get()}</p>
                    <p class="resume-preview__contact">
                        {move || {
                            let email = email.get();
                            let phone = phone.get();
                            match (email.is_empty(), phone.is_empty()) {
                                (false, false) => format!("{email} · {phone}"),
                                (false, true) => email,
                                (true, false) => phone,
                                (true, true) => String::new(),
                            }
                        }}
                    </p>
                    <p class="resume-preview__summary">{move || summary.get()}</p>
                    <ul class="resume-preview__experience">
                        {move || {
                            experiences
                                .get()
                                .into_iter()
                                .filter(|entry| !entry.role.is_empty() || !entry.company.is_empty())
                                .map(|entry| {
                                    view! {
                                        <li>
                                            <strong>{entry.role}</strong>
                                            {" at "}
                                            {entry.company}
                                            <span class="resume-preview__years">{entry.years}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </aside>
            </div>
        </div>
    }
}
