//! Caller-driven cancellation.
//!
//! Dropping a call's future already aborts the in-flight request. When the
//! decision to cancel is made elsewhere (another task, a shutdown signal),
//! pair the call with an [`AbortRegistration`] and trigger the matching
//! [`AbortHandle`]; the call then resolves to [`Error::Cancelled`].

use std::future::Future;

pub use futures_util::future::{AbortHandle, AbortRegistration};
use futures_util::future::{Abortable, Aborted};

use crate::{Error, Result};

/// Run `future` until it completes or `registration` is aborted.
///
/// An abort that happens before the first poll means no request is sent.
///
/// # Example
///
/// ```no_run
/// use moneytree::client::{cancellable, AbortHandle};
/// use moneytree::AccessToken;
///
/// # async fn example(client: moneytree::MoneytreeClient) -> moneytree::Result<()> {
/// let token = AccessToken::new("access-token");
/// let (handle, registration) = AbortHandle::new_pair();
///
/// // hand `handle` to whoever may cancel, e.g. a shutdown hook
/// let shutdown = handle.clone();
/// # drop(shutdown);
/// let profiles = client.profile();
/// match cancellable(profiles.get(&token), registration).await {
///     Ok(profile) => println!("signed in as {}", profile.moneytree_id),
///     Err(err) if err.is_cancelled() => println!("cancelled"),
///     Err(err) => return Err(err),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn cancellable<F, T>(future: F, registration: AbortRegistration) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match Abortable::new(future, registration).await {
        Ok(result) => result,
        Err(Aborted) => {
            tracing::debug!("request cancelled by caller");
            Err(Error::Cancelled)
        }
    }
}
