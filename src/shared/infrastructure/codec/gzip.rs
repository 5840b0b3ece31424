use crate::shared::infrastructure::codec::ContentCodec;
use flate2::read::MultiGzDecoder;
use std::borrow::Cow;
use std::io::{self, Read};

pub struct Gzip;

impl ContentCodec for Gzip {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn decode<'a>(&self, body: &'a [u8]) -> io::Result<Cow<'a, [u8]>> {
        // Concatenated members are one stream as far as senders are concerned.
        let mut decoder = MultiGzDecoder::new(body);
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        Ok(Cow::Owned(decompressed))
    }
}
