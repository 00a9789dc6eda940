//! Hero statistic that counts up from zero once started.

use leptos::prelude::*;

use crate::util::counter::{CounterAnimation, parse_counter_target};

#[component]
pub fn StatCounter(
    /// Raw `data-target` value; falls back to the digits of `text`.
    #[prop(optional_no_strip)]
    data_target: Option<&'static str>,
    text: &'static str,
    #[prop(optional)] suffix: &'static str,
    label: &'static str,
    #[prop(into)] started: Signal<bool>,
) -> impl IntoView {
    let display = RwSignal::new(text.to_owned());
    let target = parse_counter_target(data_target, text);

    // Runs the animation exactly once, on the first `started == true`.
    Effect::new(move |ran: Option<bool>| {
        if ran == Some(true) {
            return true;
        }
        if !started.get() {
            return false;
        }
        run_counter(display, CounterAnimation::new(target));
        true
    });

    view! {
        <div class="stat">
            <span class="stat-number" data-target=data_target>
                {move || display.get()}
            </span>
            <span class="stat-suffix">{suffix}</span>
            <span class="stat-label">{label}</span>
        </div>
    }
}

fn run_counter(display: RwSignal<String>, counter: CounterAnimation) {
    log::debug!("counting up to {}", counter.target());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::util::counter::COUNTER_FRAME_MS;

        let mut counter = counter;
        loop {
            let frame = counter.tick();
            display.set(frame.text);
            if frame.done {
                break;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(COUNTER_FRAME_MS))).await;
        }
    });
    #[cfg(not(feature = "csr"))]
    display.set(crate::util::counter::format_grouped(counter.target()));
}
