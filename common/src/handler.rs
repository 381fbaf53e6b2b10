//! [`Handler`] abstractions.

use std::future::Future;

use tokio::runtime::{self, Runtime};

/// Executable handler.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}

thread_local! {
    /// [`Runtime`] driving [`Blocking::execute_blocking()`] on the current
    /// thread.
    static RUNTIME: Runtime = runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|e| panic!("cannot build `tokio` runtime: {e}"));
}

/// Synchronous form of a [`Handler`].
///
/// Drives [`Handler::execute()`] to completion on a current-thread `tokio`
/// [`Runtime`] owned by the calling thread, so the outcome is exactly the
/// one of the asynchronous form, and timers and sockets make progress.
///
/// Must not be called from inside an asynchronous runtime.
pub trait Blocking<Args = ()>: Handler<Args> {
    /// Executes this [`Handler`] with the provided arguments, blocking the
    /// current thread until it completes.
    ///
    /// # Errors
    ///
    /// Whenever [`Handler::execute()`] errors.
    ///
    /// # Panics
    ///
    /// If called from inside an asynchronous runtime, or if the `tokio`
    /// [`Runtime`] cannot be built for the current thread.
    fn execute_blocking(&self, args: Args) -> Result<Self::Ok, Self::Err> {
        RUNTIME.with(|rt| rt.block_on(self.execute(args)))
    }
}

impl<H, Args> Blocking<Args> for H where H: Handler<Args> + ?Sized {}

#[cfg(test)]
mod spec {
    use std::{cell::Cell, time::Duration};

    use super::{Blocking as _, Handler};

    #[derive(Debug, Default)]
    struct Counter(Cell<u32>);

    impl Handler<u32> for Counter {
        type Ok = u32;
        type Err = &'static str;

        async fn execute(&self, by: u32) -> Result<Self::Ok, Self::Err> {
            if by == 0 {
                return Err("zero step");
            }
            self.0.set(self.0.get() + by);
            Ok(self.0.get())
        }
    }

    /// Handler waiting on a timer before answering.
    #[derive(Debug)]
    struct Delayed;

    impl Handler<Duration> for Delayed {
        type Ok = Duration;
        type Err = ();

        async fn execute(&self, delay: Duration) -> Result<Self::Ok, Self::Err> {
            tokio::time::sleep(delay).await;
            Ok(delay)
        }
    }

    #[test]
    fn blocking_matches_async_outcome() {
        let counter = Counter::default();

        assert_eq!(counter.execute_blocking(2), Ok(2));
        assert_eq!(counter.execute_blocking(3), Ok(5));
        assert_eq!(counter.execute_blocking(0), Err("zero step"));

        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        assert_eq!(rt.block_on(counter.execute(1)), Ok(6));
    }

    #[test]
    fn blocking_drives_timers() {
        let delay = Duration::from_millis(5);

        assert_eq!(Delayed.execute_blocking(delay), Ok(delay));
        assert_eq!(Delayed.execute_blocking(delay), Ok(delay));
    }
}
