//! Lifecycle event hooks.
//!
//! With the `tracing` feature enabled every storage transition emits a
//! `TRACE` event carrying the active index and the alternative's type name.
//! Without it the macro expands to nothing.

macro_rules! lifecycle_event {
    ($list:ty, $index:expr, $message:literal) => {
        #[cfg(feature = "tracing")]
        {
            let index: usize = $index;
            let alternative =
                <$list as $crate::list::TypeList>::name_at(index).unwrap_or("<vacant>");
            ::tracing::trace!(index, alternative, $message);
        }
    };
}

pub(crate) use lifecycle_event;
