use dioxus::prelude::*;

use crate::constants::{BORDER_STRONG, RULER_HEIGHT, TEXT_DIM};
use crate::timeline::layout::{format_time, TOTAL_DURATION_SECONDS};

/// Time ruler with a tick and label every second.
/// Everything here uses pointer-events: none so clicks fall through.
#[component]
pub(crate) fn TimeRuler(scale: f64) -> Element {
    let num_ticks = TOTAL_DURATION_SECONDS as i32;

    rsx! {
        div {
            style: "position: relative; height: {RULER_HEIGHT}px; pointer-events: none;",

            for i in 0..=num_ticks {
                {
                    let t = i as f64;
                    let x = t * scale;
                    let label_x = x + 3.0;
                    let label = format_time(t);

                    rsx! {
                        div {
                            key: "tick-{i}",
                            div {
                                style: "
                                    position: absolute;
                                    left: {x}px;
                                    bottom: 0;
                                    width: 1px;
                                    height: 10px;
                                    background-color: {BORDER_STRONG};
                                    pointer-events: none;
                                ",
                            }
                            div {
                                style: "
                                    position: absolute;
                                    left: {label_x}px;
                                    top: 4px;
                                    font-size: 9px;
                                    color: {TEXT_DIM};
                                    font-family: 'SF Mono', Consolas, monospace;
                                    user-select: none;
                                    pointer-events: none;
                                ",
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
