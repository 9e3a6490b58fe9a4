use dioxus::prelude::*;
use tracing::info;
use uuid::Uuid;

use crate::constants::{
    ACCENT_PRIMARY, BG_ELEVATED, BG_HOVER, BG_SURFACE, BORDER_DEFAULT, BORDER_SUBTLE,
    MEDIA_PANEL_WIDTH, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::state::{MediaFilter, MediaItem};

const FILTERS: [MediaFilter; 4] = [
    MediaFilter::All,
    MediaFilter::Video,
    MediaFilter::Image,
    MediaFilter::Audio,
];

/// Media library sidebar: filter tabs and a thumbnail grid.
#[component]
pub fn MediaPanel(items: Vec<MediaItem>) -> Element {
    let mut filter = use_signal(|| MediaFilter::All);
    let mut selected: Signal<Option<Uuid>> = use_signal(|| None);

    let visible: Vec<_> = items
        .iter()
        .filter(|item| filter().admits(item.kind))
        .cloned()
        .collect();

    let import_files = move |_| {
        // Demo build: selection is only logged, nothing lands in the library.
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter(
                "Media Files",
                &["mp4", "mov", "webm", "mp3", "wav", "png", "jpg", "jpeg"],
            )
            .set_title("Import Media")
            .pick_files()
        {
            for path in paths {
                info!(path = %path.display(), "media import requested");
            }
        }
    };

    rsx! {
        div {
            style: "
                width: {MEDIA_PANEL_WIDTH}px; flex-shrink: 0;
                display: flex; flex-direction: column;
                background-color: {BG_ELEVATED};
                border-right: 1px solid {BORDER_DEFAULT};
            ",

            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    padding: 12px 16px; border-bottom: 1px solid {BORDER_SUBTLE};
                ",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_PRIMARY};", "Media Library" }
                div {
                    style: "display: flex; gap: 6px;",
                    button {
                        class: "toolbar-btn",
                        onclick: move |_| {
                            if let Some(folder) = rfd::FileDialog::new()
                                .set_title("Browse Media Folder")
                                .pick_folder()
                            {
                                info!(path = %folder.display(), "media folder browse requested");
                            }
                        },
                        "Browse"
                    }
                    button {
                        class: "toolbar-btn",
                        onclick: import_files,
                        "Import"
                    }
                }
            }

            div {
                style: "display: flex; gap: 4px; padding: 8px 16px; border-bottom: 1px solid {BORDER_SUBTLE};",
                for tab in FILTERS {
                    button {
                        key: "{tab.label()}",
                        class: "toolbar-btn",
                        style: if filter() == tab {
                            format!("background-color: {BG_HOVER}; color: {TEXT_PRIMARY};")
                        } else {
                            format!("color: {TEXT_MUTED};")
                        },
                        onclick: move |_| filter.set(tab),
                        "{tab.label()}"
                    }
                }
            }

            div {
                style: "
                    flex: 1; overflow-y: auto; padding: 12px;
                    display: grid; grid-template-columns: 1fr 1fr;
                    gap: 10px; align-content: start;
                ",
                for item in visible.iter() {
                    MediaCard {
                        key: "{item.id}",
                        item: item.clone(),
                        is_selected: selected() == Some(item.id),
                        on_select: move |id| selected.set(Some(id)),
                    }
                }
                // Import placeholder tile
                div {
                    style: "
                        display: flex; flex-direction: column; align-items: center; justify-content: center;
                        gap: 4px; aspect-ratio: 4 / 3;
                        border: 1px dashed {BORDER_DEFAULT}; border-radius: 6px;
                        color: {TEXT_DIM}; font-size: 11px; cursor: pointer;
                    ",
                    onclick: import_files,
                    span { style: "font-size: 18px;", "+" }
                    span { "Import" }
                }
            }
        }
    }
}

#[component]
fn MediaCard(item: MediaItem, is_selected: bool, on_select: EventHandler<Uuid>) -> Element {
    let border = if is_selected { ACCENT_PRIMARY } else { BORDER_SUBTLE };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                border: 1px solid {border}; border-radius: 6px;
                overflow: hidden; cursor: pointer; background-color: {BG_SURFACE};
            ",
            onclick: {
                let name = item.name.clone();
                let id = item.id;
                move |_| {
                    info!(media = %name, "media item selected");
                    on_select.call(id);
                }
            },
            div {
                style: "position: relative; aspect-ratio: 16 / 10; background-color: #000000;",
                if let Some(url) = item.thumbnail.as_deref() {
                    img {
                        src: "{url}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                } else {
                    div {
                        style: "
                            width: 100%; height: 100%;
                            display: flex; align-items: center; justify-content: center;
                            font-size: 20px;
                        ",
                        "{item.kind.icon()}"
                    }
                }
                if let Some(duration) = item.duration.as_deref() {
                    span {
                        style: "
                            position: absolute; right: 4px; bottom: 4px;
                            padding: 1px 4px; border-radius: 3px;
                            background-color: rgba(0, 0, 0, 0.7);
                            font-size: 9px; color: #ffffff;
                        ",
                        "{duration}"
                    }
                }
            }
            div {
                style: "
                    display: flex; align-items: center; gap: 4px; padding: 6px 8px;
                    font-size: 11px; color: {TEXT_SECONDARY};
                ",
                span { "{item.kind.icon()}" }
                span {
                    style: "white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{item.name}"
                }
            }
        }
    }
}
