use contracts::domain::common::RecordStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StatusBadge(status: RecordStatus) -> impl IntoView {
    let color = if status.is_active() {
        BadgeColor::Success
    } else {
        BadgeColor::Danger
    };

    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.label()}
        </Badge>
    }
}
