use leptos::{html, prelude::*};
use leptos_use::{
    use_element_size, use_media_query, use_raf_fn, use_window_scroll, UseElementSizeReturn,
    UseRafFnCallbackArgs,
};

use crate::motion::{
    road::{ROAD_RADIUS, ROAD_WIDTH},
    RoadCar,
};

use super::REDUCED_MOTION_QUERY;

fn max_scroll() -> f64 {
    let document_height = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or_default();
    let viewport_height = window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    document_height - viewport_height
}

/// A road down the right edge of the page; the car's position tracks how far
/// the page has been scrolled.
#[component]
pub fn ScrollRoadCar() -> impl IntoView {
    let road_ref = NodeRef::<html::Div>::new();
    let UseElementSizeReturn { height, .. } = use_element_size(road_ref);
    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);
    let (_, scroll_y) = use_window_scroll();

    let car = RwSignal::new(RoadCar::default());
    let (now, set_now) = signal(0.0);

    Effect::new(move |_| {
        let y = scroll_y.get();
        car.update(|c| c.on_scroll(y, max_scroll()));
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let reduced = reduced_motion.get_untracked();
        car.update(|c| c.tick(args.timestamp, reduced));
        set_now.set(args.timestamp);
    });

    let car_y = move || car.with(|c| c.car_y(height.get()));
    let road_style = move || {
        let offset = if reduced_motion.get() {
            0.0
        } else {
            car.with(RoadCar::line_offset)
        };
        format!(
            "width: {ROAD_WIDTH}px; border-radius: {ROAD_RADIUS}px; \
             background-image: repeating-linear-gradient(0deg, transparent 0 12px, rgba(255,255,255,0.6) 12px 18px, transparent 18px 30px); \
             background-position-y: {offset}px;"
        )
    };
    let puffs = move || {
        if reduced_motion.get() {
            return Vec::new();
        }
        let now = now.get();
        let y = car_y();
        car.with(|c| {
            c.visible_puffs(now)
                .map(|puff| {
                    let style = puff.style(now, y);
                    view! {
                        <div
                            class="absolute rounded-full bg-slate-200/70 blur-[1px]"
                            style=format!(
                                "left: calc(50% - 8px + {}px); top: {}px; width: 10px; height: 10px; opacity: {}; transform: scale({});",
                                puff.x,
                                style.top,
                                style.opacity,
                                style.scale,
                            )
                        />
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="hidden md:flex fixed top-20 bottom-20 right-2 lg:right-4 z-20 pointer-events-none">
            <div
                node_ref=road_ref
                class="relative h-full bg-gradient-to-b from-slate-900 to-slate-800 shadow-lg overflow-hidden"
                style=road_style
            >
                <div
                    class="absolute left-1/2 flex flex-col items-center"
                    style=move || format!("transform: translate(-50%, {}px);", car_y())
                >
                    <div class="h-[10px] w-[18px] bg-slate-200 rounded-[5px] shadow" />
                    <div class="relative mt-[-4px] h-[14px] w-[22px] bg-slate-100 rounded-[7px] shadow flex items-center justify-between px-1">
                        <div class="h-[7px] w-[7px] bg-slate-700 rounded-full shadow-inner" />
                        <div class="h-[7px] w-[7px] bg-slate-700 rounded-full shadow-inner" />
                    </div>
                </div>
                {puffs}
                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-transparent to-slate-900/60 pointer-events-none" />
            </div>
        </div>
    }
}
