// Wraps calls into the 'log' crate so that they disappear entirely when the
// 'logging' feature is disabled.
//
//     log!(log::trace!("epsilon {} -> {}", from, to));
macro_rules! log {
    ($($tt:tt)*) => {
        #[cfg(feature = "logging")]
        {
            $($tt)*
        }
    }
}
