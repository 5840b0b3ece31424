use crate::shared::infrastructure::codec::ContentCodec;
use std::borrow::Cow;
use std::io;

/// Passes the body through untouched.
pub struct Identity;

impl ContentCodec for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn decode<'a>(&self, body: &'a [u8]) -> io::Result<Cow<'a, [u8]>> {
        Ok(Cow::Borrowed(body))
    }
}
