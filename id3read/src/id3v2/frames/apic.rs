use super::encoding;
use crate::core::io::BufStream;
use crate::err::ParseResult;
use crate::string::{self, Encoding};
use log::warn;
use std::fmt::{self, Display, Formatter};

const NUL: &[u8] = &[0, 0];

/// An embedded picture, borrowed from the payload of an `APIC` frame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttachedPicture<'a> {
    encoding: Encoding,
    mime: String,
    pic_type: PictureType,
    desc: String,
    picture: &'a [u8],
}

impl<'a> AttachedPicture<'a> {
    pub(crate) fn parse(payload: &'a [u8]) -> ParseResult<Self> {
        let mut stream = BufStream::new(payload);

        // The encoding only applies to the description. The MIME type is always Latin1.
        let encoding = encoding::parse(stream.read_u8()?)?;
        let mime = string::decode(Encoding::Latin1, stream.read_terminated(&NUL[..1])?)?;
        let pic_type = PictureType::parse(stream.read_u8()?);

        let desc_data = stream.read_terminated(&NUL[..encoding.nul_size()])?;

        // A description that cannot be decoded does not make the picture itself unusable.
        let desc = if desc_data.is_empty() {
            String::new()
        } else {
            string::decode(encoding, desc_data).unwrap_or_else(|err| {
                warn!("could not decode picture description: {}", err);
                String::new()
            })
        };

        Ok(AttachedPicture {
            encoding,
            mime,
            pic_type,
            desc,
            picture: stream.take_rest(),
        })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn pic_type(&self) -> PictureType {
        self.pic_type
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn picture(&self) -> &'a [u8] {
        self.picture
    }

    /// Whether this picture is a front or back cover.
    pub fn is_cover(&self) -> bool {
        matches!(self.pic_type, PictureType::FrontCover | PictureType::BackCover)
    }
}

impl<'a> Display for AttachedPicture<'a> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write![f, "{} ", self.mime]?;

        if !self.desc.is_empty() {
            write![f, "\"{}\" ", self.desc]?;
        }

        write![f, "[{:?}, {} bytes]", self.pic_type, self.picture.len()]
    }
}

byte_enum! {
    pub enum PictureType {
        Other = 0x00,
        FileIcon = 0x01,
        OtherFileIcon = 0x02,
        FrontCover = 0x03,
        BackCover = 0x04,
        LeafletPage = 0x05,
        Media = 0x06,
        LeadArtist = 0x07,
        Artist = 0x08,
        Conductor = 0x09,
        Band = 0x0A,
        Composer = 0x0B,
        Writer = 0x0C,
        RecordingLocation = 0x0D,
        DuringRecording = 0x0E,
        DuringPerformance = 0x0F,
        MovieScreenCapture = 0x10,
        ColoredFish = 0x11,
        Illustration = 0x12,
        BandLogo = 0x13,
        PublisherLogo = 0x14,
    };
    PictureType::Other
}
