use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{CURRENCY_CODE, DISCOUNT_RATE, DISCOUNT_THRESHOLD, LARGE_ORDER, TAX_RATE};
use crate::currency::format_currency;
use crate::pricing::quote_breakdown;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let quantity = use_state(|| LARGE_ORDER.0);
    let unit_price = use_state(|| LARGE_ORDER.1);

    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            // Half-typed or negative values leave the last good quantity in place
            if let Ok(value) = input.value().trim().parse::<u32>() {
                quantity.set(value);
            }
        })
    };
    let on_price = {
        let unit_price = unit_price.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(value) = input.value().trim().parse::<f64>() {
                if value.is_finite() && value >= 0.0 {
                    unit_price.set(value);
                }
            }
        })
    };

    let breakdown = quote_breakdown(*quantity, *unit_price);
    let quote = breakdown.format();

    html! {
        <>
            <h2>{"Pricing"}</h2>
            <p>
                {format!(
                    "Prices in {}. Orders of more than {} units get {:.0}% off. VAT is {:.0}%.",
                    CURRENCY_CODE,
                    DISCOUNT_THRESHOLD,
                    DISCOUNT_RATE * 100.0,
                    TAX_RATE * 100.0
                )}
            </p>
            <div class="calculator">
                <label>
                    {"Quantity"}
                    <input type="number" min="0" value={(*quantity).to_string()} oninput={on_quantity} />
                </label>
                <label>
                    {"Price per unit"}
                    <input type="number" min="0" step="0.01" value={(*unit_price).to_string()} oninput={on_price} />
                </label>
            </div>
            <table class="quote-table">
                <tr><td>{"Subtotal"}</td><td>{ &quote.subtotal }</td></tr>
                <tr><td>{"Bulk discount"}</td><td>{ &quote.discount }</td></tr>
                <tr><td>{"Taxable"}</td><td>{ format_currency(breakdown.taxable) }</td></tr>
                <tr><td>{"VAT"}</td><td>{ &quote.tax }</td></tr>
                <tr class="total"><td>{"Total"}</td><td>{ &quote.total }</td></tr>
            </table>
            if breakdown.has_bulk_discount() {
                <p class="bulk-note">{"Bulk discount applied."}</p>
            }
        </>
    }
}
