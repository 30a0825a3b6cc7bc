//! Class-name composition shared by every component root.

/// A value that may contribute a class name to [`cn`].
///
/// Empty strings and `None` are falsy and never contribute.
pub trait ClassCandidate {
    /// Returns the class text when the candidate is truthy.
    fn as_class(&self) -> Option<&str>;
}

impl ClassCandidate for str {
    fn as_class(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self)
    }
}

impl ClassCandidate for &str {
    fn as_class(&self) -> Option<&str> {
        (**self).as_class()
    }
}

impl ClassCandidate for String {
    fn as_class(&self) -> Option<&str> {
        self.as_str().as_class()
    }
}

impl ClassCandidate for &String {
    fn as_class(&self) -> Option<&str> {
        self.as_str().as_class()
    }
}

impl<T: ClassCandidate> ClassCandidate for Option<T> {
    fn as_class(&self) -> Option<&str> {
        self.as_ref().and_then(ClassCandidate::as_class)
    }
}

/// Joins the truthy candidates with a single space, preserving order.
///
/// Candidates are neither trimmed nor deduplicated. An empty input yields an
/// empty string.
pub fn cn<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut merged = String::new();
    for class in candidates.into_iter().flatten() {
        if class.is_empty() {
            continue;
        }
        if !merged.is_empty() {
            merged.push(' ');
        }
        merged.push_str(class);
    }
    merged
}

/// Variadic form of [`cn`] accepting any mix of [`ClassCandidate`] values.
///
/// ```
/// use aurora_core::cn;
///
/// let active = true;
/// let custom: Option<String> = None;
/// assert_eq!(cn!("aurora-button", active.then_some("active"), custom), "aurora-button active");
/// assert_eq!(cn!(), "");
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($candidate:expr),+ $(,)?) => {
        $crate::class::cn([$($crate::class::ClassCandidate::as_class(&$candidate)),+])
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn merges_multiple_class_names() {
        assert_eq!(cn!("foo", "bar"), "foo bar");
    }

    #[test]
    fn filters_falsy_values() {
        let none: Option<&str> = None;
        assert_eq!(cn!("foo", "", none, Some("bar")), "foo bar");
    }

    #[test]
    fn handles_conditional_classes() {
        let is_active = true;
        let is_disabled = false;
        assert_eq!(
            cn!(
                "base",
                is_active.then_some("active"),
                is_disabled.then_some("disabled")
            ),
            "base active"
        );
    }

    #[test]
    fn no_arguments_yield_empty_string() {
        assert_eq!(cn!(), "");
        assert_eq!(cn(std::iter::empty()), "");
    }

    #[test]
    fn keeps_duplicates_and_inner_whitespace() {
        assert_eq!(cn!("a", "a", " b "), "a a  b ");
    }

    #[test]
    fn owned_and_borrowed_strings_mix() {
        let owned = String::from("owned");
        let custom = Some(String::from("custom"));
        assert_eq!(cn!("base", &owned, custom), "base owned custom");
    }

    proptest! {
        #[test]
        fn output_is_the_joined_truthy_subsequence(
            candidates in proptest::collection::vec(
                proptest::option::of("[a-z-]{0,6}"),
                0..12,
            )
        ) {
            let expected = candidates
                .iter()
                .filter_map(|candidate| candidate.as_deref())
                .filter(|class| !class.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            let merged = cn(candidates.iter().map(|candidate| candidate.as_deref()));
            prop_assert_eq!(merged, expected);
        }
    }
}
