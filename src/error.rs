pub trait ResultOkDebugExt<T, E> {
    /// Converts the result into an [`Option`], logging any error at debug
    /// level. Used where a failure means "skip this item", not "fail".
    fn ok_debug(self) -> Option<T>;
}

impl<T, E> ResultOkDebugExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn ok_debug(self) -> Option<T> {
        match self {
            Ok(ok) => Some(ok),
            Err(err) => {
                log::debug!("{err}");
                None
            }
        }
    }
}
