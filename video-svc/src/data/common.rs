use std::fmt;

use serde::{Deserialize, Serialize};

/// Failure wire shape. Successful responses carry their plain JSON body
/// directly, so only errors are wrapped.
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
  pub code: RespCode,
  pub message: String,
}

impl ErrorBody {
  pub fn new(code: RespCode, message: String) -> ErrorBody {
    ErrorBody { code, message }
  }
}

#[repr(transparent)]
#[derive(Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RespCode(u32);

impl fmt::Debug for RespCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Debug::fmt(&self.0, f)
  }
}

impl RespCode {
  #[inline]
  pub const fn success(self) -> bool {
    self.0 == 0
  }

  #[inline]
  pub const fn failure(self) -> bool {
    self.0 != 0
  }

  #[inline]
  pub const fn as_u32(self) -> u32 {
    self.0
  }
}

macro_rules! resp_codes {
  (
    $(
      ( $num:expr, $name:ident $(,)? )
    ),+
    $(,)?
  ) => {
    impl RespCode {
      $(
      pub const $name: RespCode = RespCode($num);
      )+

      pub fn describe(self) -> Option<&'static str> {
        match self.0 {
          $(
            $num => Some(stringify!($name)),
          )+
          _ => None
        }
      }

    }
  }
}

resp_codes! {
  (0, SUCCESS),
  (1, INVALID_PARAMS),
  (2, VIDEO_NOT_FOUND),
  (3, DATA_NOT_FOUND),
  (4, ALREADY_LIKED),
  (5, NOT_LIKED),
  (100, DATABASE_ERROR),
  (10000, UNKNOWN),
}

impl From<u32> for RespCode {
  #[inline]
  fn from(value: u32) -> Self {
    RespCode(value)
  }
}
