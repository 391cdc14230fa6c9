//! Clock Display Component

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::clock::now_clock;
use crate::config::CLOCK_TICK_MS;

/// Local time, refreshed every second for the life of the page
#[component]
pub fn ClockDisplay() -> impl IntoView {
    let (time, set_time) = signal(now_clock());

    // Runs until the page unloads
    Interval::new(CLOCK_TICK_MS, move || set_time.set(now_clock())).forget();

    view! { <span class="clock">{move || time.get()}</span> }
}
