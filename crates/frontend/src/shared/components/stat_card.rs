use crate::shared::icons::icon;
use leptos::prelude::*;

/// Group digits in threes: 12345 -> "12,345"
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Dashboard tile showing a record count
#[component]
pub fn StatCard(
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// `None` while loading or after a failed fetch
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// Set when the count could not be loaded
    #[prop(into, optional)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || {
        if error.get().is_some() {
            "stat-card stat-card--error"
        } else {
            "stat-card"
        }
    };

    let formatted = move || match value.get() {
        Some(v) => format_count(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class=status_class title=move || error.get().unwrap_or_default()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
