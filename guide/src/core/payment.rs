//! Payment rail categories offered by the filter panel.

/// Category label paired with the rail names it covers (lowercase).
const CATEGORIES: &[(&str, &[&str])] = &[
    ("credit card", &["visa", "mastercard", "amex", "american express", "jcb"]),
    ("e-wallet", &["gcash", "paymaya", "maya", "skrill", "neteller", "paypal", "grabpay"]),
    ("cryptocurrency", &["bitcoin", "ethereum", "litecoin", "dogecoin", "tether", "usdt"]),
    ("bank transfer", &["bank transfer", "instapay", "pesonet"]),
];

/// Filter options in display order.
pub const PAYMENT_OPTIONS: [&str; 6] = [
    "Credit Card",
    "E-Wallet",
    "Bank Transfer",
    "Cryptocurrency",
    "GCash",
    "PayMaya",
];

/// True if `requested` names `method` itself or a category containing it.
/// Comparison ignores case and surrounding whitespace.
pub fn method_matches(method: &str, requested: &str) -> bool {
    let method = method.trim().to_lowercase();
    let requested = requested.trim().to_lowercase();
    if method == requested {
        return true;
    }
    CATEGORIES
        .iter()
        .find(|(category, _)| *category == requested)
        .is_some_and(|(_, members)| members.contains(&method.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_names_match_case_insensitively() {
        assert!(method_matches("GCash", "gcash"));
        assert!(method_matches("Bitcoin", " Bitcoin "));
        assert!(!method_matches("GCash", "PayMaya"));
    }

    #[test]
    fn categories_cover_their_rails() {
        assert!(method_matches("Visa", "Credit Card"));
        assert!(method_matches("Skrill", "E-Wallet"));
        assert!(method_matches("Tether", "Cryptocurrency"));
        assert!(!method_matches("Visa", "Cryptocurrency"));
        assert!(!method_matches("Visa", "Bank Transfer"));
    }

    #[test]
    fn every_option_is_either_a_category_or_a_rail() {
        for option in PAYMENT_OPTIONS {
            let lowered = option.to_lowercase();
            let known = CATEGORIES.iter().any(|(category, members)| {
                *category == lowered || members.contains(&lowered.as_str())
            });
            assert!(known, "{option}");
        }
    }
}
