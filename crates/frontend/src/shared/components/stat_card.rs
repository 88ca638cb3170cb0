use crate::shared::icons::icon;
use leptos::prelude::*;

/// Colour accent of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl StatTone {
    fn class(self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Warning => "stat-card stat-card--warning",
            StatTone::Error => "stat-card stat-card--error",
        }
    }
}

/// One aggregate figure above a table; `None` renders a dash while loading.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    icon_name: &'static str,
    #[prop(into)] value: Signal<Option<usize>>,
    #[prop(optional)] tone: StatTone,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}
                </div>
            </div>
        </div>
    }
}
