#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

use flexicars_core::CurrencyConfig;
use flexicars_core::money::{format_inr, group_thousands};

/// Daily price as shown on a card, grouped per the browser locale (`1,800`).
#[must_use]
pub fn fmt_price(amount: u32) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let nf = Intl::NumberFormat::new(&Array::new(), &Object::new());
        let format_fn: Function = nf.format();
        if let Some(text) = format_fn
            .call1(&nf, &JsValue::from_f64(f64::from(amount)))
            .ok()
            .and_then(|v| v.as_string())
        {
            return text;
        }
    }
    group_thousands(u64::from(amount))
}

/// Whole-unit currency amount, e.g. `₹1,00,000` for `en-IN`/`INR`.
#[must_use]
pub fn fmt_currency(amount: u64, currency: &CurrencyConfig) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(text) = intl_currency(amount, currency) {
            return text;
        }
    }
    if currency.code == "INR" {
        format_inr(amount)
    } else {
        format!("{} {}", currency.code, group_thousands(amount))
    }
}

#[cfg(target_arch = "wasm32")]
fn intl_currency(amount: u64, currency: &CurrencyConfig) -> Option<String> {
    let locales = Array::new();
    locales.push(&JsValue::from_str(&currency.locale));
    let opts = Object::new();
    Reflect::set(&opts, &"style".into(), &"currency".into()).ok()?;
    Reflect::set(&opts, &"currency".into(), &currency.code.as_str().into()).ok()?;
    Reflect::set(&opts, &"minimumFractionDigits".into(), &JsValue::from_f64(0.0)).ok()?;
    Reflect::set(&opts, &"maximumFractionDigits".into(), &JsValue::from_f64(0.0)).ok()?;
    let nf = Intl::NumberFormat::new(&locales, &opts);
    let format_fn: Function = nf.format();
    #[allow(clippy::cast_precision_loss)]
    let value = JsValue::from_f64(amount as f64);
    format_fn.call1(&nf, &value).ok().and_then(|v| v.as_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_price_uses_thousands_grouping() {
        assert_eq!(fmt_price(1800), "1,800");
        assert_eq!(fmt_price(950), "950");
    }

    #[test]
    fn host_currency_uses_indian_grouping() {
        let inr = CurrencyConfig::default();
        assert_eq!(fmt_currency(100_000, &inr), "₹1,00,000");
        let usd = CurrencyConfig {
            code: String::from("USD"),
            locale: String::from("en-US"),
        };
        assert_eq!(fmt_currency(1_000_000, &usd), "USD 1,000,000");
    }
}
