//! Invoice builder with itemized lines and a live total.
//!
//! Everything is local form state; there is no export path.

#[cfg(test)]
#[path = "invoice_builder_test.rs"]
mod tests;

use leptos::prelude::*;

/// One billable line on the invoice.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

impl Default for LineItem {
    fn default() -> Self {
        Self {
            description: String::new(),
            quantity: 1,
            unit_price: 0.0,
        }
    }
}

pub(crate) fn line_total(item: &LineItem) -> f64 {
    f64::from(item.quantity) * item.unit_price
}

pub(crate) fn invoice_total(items: &[LineItem]) -> f64 {
    items.iter().map(line_total).sum()
}

pub(crate) fn format_amount(amount: f64) -> String {
    format!("${amount:.2}")
}

#[component]
pub fn InvoiceBuilderPage() -> impl IntoView {
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());
    let invoice_number = RwSignal::new("INV-0001".to_owned());
    let due_date = RwSignal::new(String::new());
    let items = RwSignal::new(vec![LineItem::default()]);

    let total = move || format_amount(invoice_total(&items.get()));

    let add_item = move |_| items.update(|list| list.push(LineItem::default()));

    let rows = move || {
        items
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let description = item.description.clone();
                let quantity = item.quantity.to_string();
                let unit_price = item.unit_price.to_string();
                let amount = format_amount(line_total(&item));
                view! {
                    <li class="invoice__row">
                        <input
                            class="invoice__input invoice__input--wide"
                            type="text"
                            placeholder="Description"
                            prop:value=description
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                items
                                    .update(|list| {
                                        if let Some(item) = list.get_mut(index) {
                                            item.description = value.clone();
                                        }
                                    });
                            }
                        />
                        <input
                            class="invoice__input"
                            type="number"
                            min="0"
                            prop:value=quantity
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0);
                                items
                                    .update(|list| {
                                        if let Some(item) = list.get_mut(index) {
                                            item.quantity = value;
                                        }
                                    });
                            }
                        />
                        <input
                            class="invoice__input"
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=unit_price
                            on:input=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(0.0);
                                items
                                    .update(|list| {
                                        if let Some(item) = list.get_mut(index) {
                                            item.unit_price = value;
                                        }
                                    });
                            }
                        />
                        <span class="invoice__amount">{amount}</span>
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| {
                                items
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
                <h1>"Invoice Builder"</h1>
                <p>"Itemize your work and get a running total as you type."</p>
            </header>

            <div class="builder-page__columns">
                <section class="builder-page__form">
                    <label>
                        "From"
                        <input
                            class="invoice__input"
                            type="text"
                            placeholder="Your name or business"
                            prop:value=move || from.get()
                            on:input=move |ev| from.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Bill To"
                        <input
                            class="invoice__input"
                            type="text"
                            placeholder="Client name"
                            prop:value=move || to.get()
                            on:input=move |ev| to.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Invoice #"
                        <input
                            class="invoice__input"
                            type="text"
                            prop:value=move || invoice_number.get()
                            on:input=move |ev| invoice_number.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Due Date"
                        <input
                            class="invoice__input"
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| due_date.set(event_target_value(&ev))
                        />
                    </label>

                    <h3>"Line Items"</h3>
                    <ul class="invoice__items">{rows}</ul>
                    <button class="btn btn--outline" on:click=add_item>
                        "+ Add Item"
                    </button>
                </section>

                <aside class="builder-page__preview">
                    <h2>{move || invoice_number.get()}</h2>
                    <p>{move || format!("From: {}", from.get())}</p>
                    <p>{move || format!("To: {}", to.get())}</p>
                    <p>{move || {
                        let date = due_date.get();
                        if date.is_empty() { String::new() } else { format!("Due: {date}") }
                    }}</p>
                    <div class="invoice__total">
                        <span>"Total"</span>
                        <strong>{total}</strong>
                    </div>
                </aside>
            </div>
        </div>
    }
}
