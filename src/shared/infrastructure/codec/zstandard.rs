use crate::shared::infrastructure::codec::ContentCodec;
use std::borrow::Cow;
use std::io;

pub struct Zstd;

impl ContentCodec for Zstd {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn decode<'a>(&self, body: &'a [u8]) -> io::Result<Cow<'a, [u8]>> {
        zstd::stream::decode_all(body).map(Cow::Owned)
    }
}
