use dioxus::prelude::*;
use uuid::Uuid;

use crate::state::Clip;
use crate::timeline::layout::clip_geometry;

/// One clip block on a track row.
#[component]
pub(crate) fn ClipElement(
    clip: Clip,
    scale: f64,
    is_selected: bool,
    on_select: EventHandler<Uuid>,
) -> Element {
    let geometry = clip_geometry(clip.start, clip.end, scale);
    let color = clip.color.hex();
    let clip_id = clip.id;

    let ring = if is_selected {
        "box-shadow: 0 0 0 2px #ffffff;"
    } else {
        ""
    };

    rsx! {
        div {
            style: "
                position: absolute;
                left: {geometry.left}px;
                width: {geometry.width}px;
                top: 8px;
                height: 48px;
                background-color: {color};
                border-radius: 4px;
                cursor: pointer;
                overflow: hidden;
                {ring}
            ",
            onclick: move |e| {
                e.stop_propagation();
                on_select.call(clip_id);
            },

            div {
                style: "
                    padding: 4px 8px;
                    font-size: 10px;
                    font-weight: 500;
                    color: #ffffff;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    user-select: none;
                ",
                "{clip.name}"
            }

            // Trim handles. Visual affordance only, resizing is not wired up.
            div {
                style: "position: absolute; left: 0; top: 0; width: 4px; height: 100%; cursor: ew-resize;",
            }
            div {
                style: "position: absolute; right: 0; top: 0; width: 4px; height: 100%; cursor: ew-resize;",
            }
        }
    }
}
