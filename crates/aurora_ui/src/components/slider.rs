use leptos::logging;

use super::*;

token_enum! {
    /// Slider track treatments.
    pub enum SliderVariant {
        /// Flat track.
        Default => "default",
        /// Glowing range and thumbs.
        Glow => "glow",
    }
    default Default;
}

/// Clamps every value into `[min, max]`, warning once per call when any was outside.
fn clamp_values(values: &[f64], min: f64, max: f64) -> Vec<f64> {
    let outside = values.iter().filter(|value| **value < min || **value > max).count();
    if outside > 0 {
        logging::warn!("{outside} slider value(s) outside [{min}, {max}], clamping");
    }
    values.iter().map(|value| value.max(min).min(max)).collect()
}

/// Form field name for a thumb's hidden input.
fn input_name(name: &str, thumb_count: usize) -> String {
    if thumb_count > 1 {
        format!("{name}[]")
    } else {
        name.to_string()
    }
}

/// Position of `value` along the track as a percentage.
fn percent(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

/// Snaps `value` to the nearest step counted from `min`.
fn snap(value: f64, min: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    min + ((value - min) / step).round() * step
}

/// Value after a navigation key, or `None` for keys the slider ignores.
fn stepped_value(key: &str, current: f64, min: f64, max: f64, step: f64) -> Option<f64> {
    let big_step = step * 10.0;
    let next = match key {
        "ArrowRight" | "ArrowUp" => current + step,
        "ArrowLeft" | "ArrowDown" => current - step,
        "PageUp" => current + big_step,
        "PageDown" => current - big_step,
        "Home" => min,
        "End" => max,
        _ => return None,
    };
    Some(snap(next, min, step).max(min).min(max))
}

/// Replaces the thumb at `index`, keeping it between its neighbours.
fn with_thumb(values: &[f64], index: usize, next: f64) -> Vec<f64> {
    let lower = index
        .checked_sub(1)
        .and_then(|previous| values.get(previous))
        .copied()
        .unwrap_or(f64::NEG_INFINITY);
    let upper = values.get(index + 1).copied().unwrap_or(f64::INFINITY);
    let mut values = values.to_vec();
    if let Some(thumb) = values.get_mut(index) {
        *thumb = next.max(lower).min(upper);
    }
    values
}

/// Inline style for the filled range between the lowest and highest thumb.
/// A single thumb fills from the start of the track.
fn range_style(values: &[f64], min: f64, max: f64, orientation: Orientation) -> String {
    let start = if values.len() > 1 {
        values.first().map_or(0.0, |first| percent(*first, min, max))
    } else {
        0.0
    };
    let end = values.last().map_or(0.0, |last| percent(*last, min, max));
    let (from, to) = match orientation {
        Orientation::Horizontal => ("left", "right"),
        Orientation::Vertical => ("bottom", "top"),
    };
    format!("{from}: {start}%; {to}: {}%", 100.0 - end)
}

fn thumb_style(value: f64, min: f64, max: f64, orientation: Orientation) -> String {
    let edge = match orientation {
        Orientation::Horizontal => "left",
        Orientation::Vertical => "bottom",
    };
    format!("{edge}: {}%", percent(value, min, max))
}

#[component]
/// Range input with one thumb per value.
///
/// Values outside `[min, max]` are clamped. Arrow keys step by `step`,
/// Page Up and Page Down by ten steps, Home and End jump to the bounds.
pub fn Slider(
    #[prop(default = SliderVariant::Default)] variant: SliderVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional, into)] value: Option<MaybeSignal<Vec<f64>>>,
    #[prop(optional)] default_value: Option<Vec<f64>>,
    #[prop(optional)] on_value_change: Option<Callback<Vec<f64>>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] node_ref: NodeRef<html::Span>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let state = use_controllable(value, default_value.unwrap_or_else(|| vec![min]), on_value_change);
    let values = create_memo(move |_| state.value.with(|values| clamp_values(values, min, max)));
    let name = store_value(name);

    let thumb = move |index: usize| {
        let current = move || values.with(|values| values.get(index).copied().unwrap_or(min));
        view! {
            <span
                role="slider"
                tabindex=move || if disabled.get() { None } else { Some("0") }
                aria-valuemin=min
                aria-valuemax=max
                aria-valuenow=current
                aria-orientation=orientation.token()
                aria-disabled=move || disabled.get().then_some("true")
                class="aurora-slider-thumb"
                style=move || thumb_style(current(), min, max, orientation)
                on:keydown=move |ev: KeyboardEvent| {
                    if disabled.get_untracked() {
                        return;
                    }
                    let Some(next) = stepped_value(&ev.key(), current(), min, max, step) else {
                        return;
                    };
                    ev.prevent_default();
                    let next = values.with_untracked(|values| with_thumb(values, index, next));
                    state.set.call(next);
                }
            ></span>
            {name.get_value().map(|name| {
                view! {
                    <input
                        type="hidden"
                        name=move || input_name(&name, values.with(Vec::len))
                        value=current
                        prop:value=move || current().to_string()
                    />
                }
            })}
        }
    };

    view! {
        <span
            class=cn!("aurora-slider", class)
            data-variant=variant.token()
            data-size=size.token()
            data-orientation=orientation.token()
            data-disabled=move || flag_token(disabled.get())
            {..attrs}
            node_ref=node_ref
        >
            <span class="aurora-slider-track">
                <span
                    class="aurora-slider-range"
                    style=move || values.with(|values| range_style(values, min, max, orientation))
                ></span>
            </span>
            <For each=move || 0..values.with(Vec::len) key=|index: &usize| *index children=thumb />
        </span>
    }
}
