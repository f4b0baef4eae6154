//! Coloured message box for search and upload outcomes.

use common::advisory::AdvisoryKind;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdCheckCircle, md_alert_icons::{MdErrorOutline, MdWarning}}};

fn palette(kind: AdvisoryKind) -> (&'static str, &'static str, &'static str) {
    // background, border, text
    match kind {
        AdvisoryKind::Success => ("#F0FDF4", "#BBF7D0", "#15803D"),
        AdvisoryKind::Warning => ("#FEFCE8", "#FEF08A", "#854D0E"),
        AdvisoryKind::Error => ("#FEF2F2", "#FECACA", "#B91C1C"),
    }
}

fn advisory_icon(kind: AdvisoryKind) -> Element {
    match kind {
        AdvisoryKind::Success => rsx! { Icon { icon: MdCheckCircle, style: "width: 20px; height: 20px; flex-shrink: 0;" } },
        AdvisoryKind::Warning => rsx! { Icon { icon: MdWarning, style: "width: 20px; height: 20px; flex-shrink: 0;" } },
        AdvisoryKind::Error => rsx! { Icon { icon: MdErrorOutline, style: "width: 20px; height: 20px; flex-shrink: 0;" } },
    }
}

#[component]
pub fn AdvisoryBanner(kind: AdvisoryKind, text: String) -> Element {
    let (background, border, color) = palette(kind);
    rsx! {
        div {
            role: if kind == AdvisoryKind::Error { "alert" } else { "status" },
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 10px;
                background: {background};
                border: 1px solid {border};
                color: {color};
                padding: 12px 16px;
                border-radius: 6px;
                font-size: 15px;
            ",
            {advisory_icon(kind)}
            span { "{text}" }
        }
    }
}
