//! googletest matchers used in tests in multiple crates within the workspace.

use std::{
    fmt::{Debug, Display},
    marker::PhantomData,
};

use googletest::{
    description::Description,
    matcher::{Matcher, MatcherBase, MatcherResult},
};

/// Creates a matcher against an `anyhow::Error` that downcasts to the given
/// type and matches the inner matcher. Context layers added with
/// `anyhow::Context` are looked through.
pub fn anyhow_downcasts_to<E, M>(inner: M) -> AnyhowDowncastTo<E, M> {
    AnyhowDowncastTo::<E, M> {
        inner,
        phantom_e: Default::default(),
    }
}

pub struct AnyhowDowncastTo<E, M> {
    inner: M,
    phantom_e: PhantomData<E>,
}

impl<E, M> MatcherBase for AnyhowDowncastTo<E, M> {}

impl<E, M> Matcher<&anyhow::Error> for AnyhowDowncastTo<E, M>
where
    E: Copy + Display + Debug + Send + Sync + 'static,
    M: Matcher<E>,
{
    fn matches(&self, actual: &anyhow::Error) -> MatcherResult {
        actual
            .downcast_ref::<E>()
            .map_or(MatcherResult::NoMatch, |e| self.inner.matches(*e))
    }

    fn explain_match(&self, actual: &anyhow::Error) -> Description {
        match actual.downcast_ref::<E>() {
            Some(e) => Description::new()
                .text(format!("which downcasts to {}", std::any::type_name::<E>()))
                .nested(self.inner.explain_match(*e)),
            None => Description::new().text(format!(
                "which does not downcast to {}: {actual:#}",
                std::any::type_name::<E>()
            )),
        }
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        format!(
            "downcasts to {} with value which {}",
            std::any::type_name::<E>(),
            self.inner.describe(matcher_result)
        )
        .into()
    }
}

/// Creates a matcher against an `anyhow::Error` where some message in its
/// chain of context and causes contains `fragment`.
pub fn error_chain_contains(fragment: &str) -> ErrorChainContains {
    ErrorChainContains {
        fragment: fragment.to_string(),
    }
}

pub struct ErrorChainContains {
    fragment: String,
}

impl MatcherBase for ErrorChainContains {}

impl Matcher<&anyhow::Error> for ErrorChainContains {
    fn matches(&self, actual: &anyhow::Error) -> MatcherResult {
        actual
            .chain()
            .any(|cause| cause.to_string().contains(&self.fragment))
            .into()
    }

    fn explain_match(&self, actual: &anyhow::Error) -> Description {
        Description::new().text(format!("which has the error chain {actual:#}"))
    }

    fn describe(&self, matcher_result: MatcherResult) -> Description {
        match matcher_result {
            MatcherResult::Match => {
                format!("has an error chain containing {:?}", self.fragment).into()
            }
            MatcherResult::NoMatch => {
                format!("has no error chain containing {:?}", self.fragment).into()
            }
        }
    }
}

/// Provides a value suitable as a starting point in tests, to be overridden
/// with struct update syntax.
pub trait DefaultForTest {
    fn default_for_test() -> Self;
}
