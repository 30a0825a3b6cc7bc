//! Controlled/uncontrolled value plumbing for interactive components.

use leptos::*;

/// Current value plus the setter an interactive component writes through.
pub struct Controllable<T: 'static> {
    /// Reactive current value; the caller's signal when controlled.
    pub value: Signal<T>,
    /// Requests a new value. Reports it to the change callback and, when
    /// uncontrolled, stores it locally.
    pub set: Callback<T>,
}

impl<T: 'static> Clone for Controllable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Controllable<T> {}

impl<T: Clone + 'static> Controllable<T> {
    /// Reads the current value without tracking.
    pub fn get_untracked(&self) -> T {
        self.value.get_untracked()
    }
}

/// Resolves a component's value source.
///
/// When `value` is supplied the component is controlled and never stores
/// state of its own; otherwise it starts from `default_value`. Writes equal to
/// the current value are ignored. `on_change` is forwarded verbatim.
pub fn use_controllable<T>(
    value: Option<MaybeSignal<T>>,
    default_value: T,
    on_change: Option<Callback<T>>,
) -> Controllable<T>
where
    T: Clone + PartialEq + 'static,
{
    let internal = create_rw_signal(default_value);
    let controlled = value.is_some();
    let current = Signal::derive(move || match value.as_ref() {
        Some(value) => value.get(),
        None => internal.get(),
    });
    let set = Callback::new(move |next: T| {
        if current.with_untracked(|current| *current == next) {
            return;
        }
        if !controlled {
            internal.set(next.clone());
        }
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(next);
        }
    });
    Controllable {
        value: current,
        set,
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn uncontrolled_value_updates_locally_and_reports() {
        let runtime = create_runtime();
        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reported);
        let state = use_controllable(
            None,
            false,
            Some(Callback::new(move |next: bool| sink.borrow_mut().push(next))),
        );
        state.set.call(true);
        state.set.call(true);
        assert!(state.get_untracked());
        assert_eq!(*reported.borrow(), vec![true]);
        runtime.dispose();
    }

    #[test]
    fn controlled_value_only_changes_through_the_caller() {
        let runtime = create_runtime();
        let external = create_rw_signal(String::from("a"));
        let requested = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&requested);
        let state = use_controllable(
            Some(external.into()),
            String::from("ignored"),
            Some(Callback::new(move |next: String| *sink.borrow_mut() = Some(next))),
        );
        assert_eq!(state.get_untracked(), "a");

        state.set.call(String::from("b"));
        assert_eq!(state.get_untracked(), "a");
        assert_eq!(requested.borrow().as_deref(), Some("b"));

        external.set(String::from("b"));
        assert_eq!(state.get_untracked(), "b");
        runtime.dispose();
    }
}
