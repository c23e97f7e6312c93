#[macro_export]
macro_rules! app_err {
  ($http_code:expr, $resp_code:expr, $msg:literal $(,)?) => {{
    $crate::error::AnyhowWrapper(
      ::anyhow::anyhow!($msg)
        .context($crate::error::AppError::new().http_code($http_code).resp_code($resp_code))
    )
  }};
  ($http_code:expr, $resp_code:expr, $fmt:expr, $($arg:tt)*) => {{
    $crate::error::AnyhowWrapper(
      ::anyhow::anyhow!($fmt, $($arg)*)
        .context($crate::error::AppError::new().http_code($http_code).resp_code($resp_code))
    )
  }};
}
