// Shorthand for return Err(TagError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant(value))     -> return Err(TagError::new(ErrorKind::Variant(value)))
// - err!(@INVALID "message") -> return Err(TagError::invalid_data("message"))
macro_rules! err {
	(@INVALID $reason:literal) => {
		return Err(crate::error::TagError::invalid_data($reason))
	};
	($variant:ident($value:expr)) => {
		return Err(crate::error::TagError::new(
			crate::error::ErrorKind::$variant($value),
		))
	};
}

pub(crate) use err;
