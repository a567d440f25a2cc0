use gloo_timers::callback::Interval;
use leptos::prelude::*;
use shared::CONFIG;
use wasm_bindgen::JsValue;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

/// Break a millisecond distance to the deadline into display units.
/// Clamps to zero once the deadline has passed.
fn breakdown(diff_ms: f64) -> TimeLeft {
    if diff_ms <= 0.0 {
        return TimeLeft::default();
    }
    let total_secs = (diff_ms / 1000.0) as u64;
    TimeLeft {
        days: total_secs / 86_400,
        hours: (total_secs / 3_600) % 24,
        minutes: (total_secs / 60) % 60,
        seconds: total_secs % 60,
    }
}

fn millis_until_switchover() -> f64 {
    let deadline = js_sys::Date::new(&JsValue::from_str(CONFIG.switchover_deadline)).get_time();
    deadline - js_sys::Date::now()
}

/// Live countdown to the PSTN switch-off, ticking once per second.
#[component]
pub fn CountdownTimer(
    #[prop(optional)] dark: bool,
    #[prop(optional)] show_label: bool,
) -> impl IntoView {
    let (left, set_left) = signal(breakdown(millis_until_switchover()));

    Effect::new(move |_| {
        // Tick for the life of the page; torn down with it on navigation.
        Interval::new(1_000, move || {
            set_left.set(breakdown(millis_until_switchover()));
        })
        .forget();
    });

    let variant = if dark { "countdown countdown-dark" } else { "countdown countdown-light" };

    view! {
        <div class=variant>
            {show_label.then(|| view! { <span class="countdown-label">"Until PSTN Switch-Off"</span> })}
            <div class="countdown-timer">
                {move || {
                    let t = left.get();
                    [
                        (t.days, "Days"),
                        (t.hours, "Hours"),
                        (t.minutes, "Minutes"),
                        (t.seconds, "Seconds"),
                    ]
                    .into_iter()
                    .map(|(value, unit)| view! {
                        <div class="countdown-unit">
                            <span class="countdown-value">{format!("{value:02}")}</span>
                            <span class="countdown-unit-label">{unit}</span>
                        </div>
                    })
                    .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_splits_units() {
        // 1 day, 1 hour, 1 minute, 1 second
        let t = breakdown(90_061_000.0);
        assert_eq!(
            t,
            TimeLeft { days: 1, hours: 1, minutes: 1, seconds: 1 }
        );
    }

    #[test]
    fn breakdown_clamps_after_the_deadline() {
        assert_eq!(breakdown(0.0), TimeLeft::default());
        assert_eq!(breakdown(-5_000.0), TimeLeft::default());
    }

    #[test]
    fn breakdown_truncates_sub_second_remainders() {
        let t = breakdown(1_999.0);
        assert_eq!(t.seconds, 1);
        assert_eq!(t.days + t.hours + t.minutes, 0);
    }
}
