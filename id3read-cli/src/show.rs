use crate::stdout::{self, Listing};
use clap::Values;
use id3read::id3v2::frames::AttachedPicture;
use id3read::id3v2::{Tag, Termination};
use id3read::ParseError;
use log::{info, warn};
use std::error;
use std::fmt::{self, Display, Formatter};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

pub struct Options<'a> {
    pub cover_dir: Option<&'a Path>,
    pub frames: bool,
}

#[derive(Debug)]
pub enum ShowError {
    IoError(io::Error),
    ParseError(ParseError),
}

impl Display for ShowError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::IoError(err) => write![f, "{}", err],
            Self::ParseError(err) => write![f, "{}", err],
        }
    }
}

impl error::Error for ShowError {
    // Nothing to implement
}

impl From<io::Error> for ShowError {
    fn from(other: io::Error) -> Self {
        Self::IoError(other)
    }
}

impl From<ParseError> for ShowError {
    fn from(other: ParseError) -> Self {
        Self::ParseError(other)
    }
}

pub type ShowResult = Result<(), ShowError>;

/// Shows every file, returning whether all of them could be read.
pub fn show(paths: Values, opts: &Options) -> bool {
    let mut ok = true;

    for path in paths {
        // It's okay if a file fails to parse here, just log the problem and move on.
        if let Err(err) = show_file(Path::new(path), opts) {
            stdout::file_error(path, &err);
            ok = false;
        }
    }

    ok
}

fn show_file(path: &Path, opts: &Options) -> ShowResult {
    if path.is_dir() {
        return Err(io::Error::new(io::ErrorKind::Other, "Is a directory").into());
    }

    let mut reader = BufReader::new(File::open(path)?);
    let tag = Tag::read(&mut reader)?;

    let mut listing = Listing::new();

    listing.tag(path, tag.version(), tag.revision())?;

    show_text(&mut listing, "title", tag.title())?;
    show_text(&mut listing, "artist", tag.artist())?;
    show_text(&mut listing, "album", tag.album())?;
    show_text(&mut listing, "composer", tag.composer())?;

    match tag.cover() {
        Ok(cover) => {
            listing.field("cover", &cover)?;

            if let Some(dir) = opts.cover_dir {
                write_cover(dir, path, &cover)?;
            }
        }

        Err(ParseError::PictureNotFound) => {}
        Err(err) => warn!("could not read cover: {}", err),
    }

    if opts.frames {
        for frame in tag.frames() {
            listing.field(
                frame.id(),
                format_args!("{} bytes {:?}", frame.size(), frame.flags()),
            )?;
        }
    }

    if tag.termination() == Termination::Truncated {
        warn!("{}: tag is truncated, some frames may be missing", path.display());
    }

    Ok(())
}

fn show_text(listing: &mut Listing, name: &str, text: Result<String, ParseError>) -> io::Result<()> {
    match text {
        Ok(text) => listing.field(name, text)?,
        Err(ParseError::FrameNotFound(_)) => {}
        Err(err) => warn!("could not read {}: {}", name, err),
    }

    Ok(())
}

fn write_cover(dir: &Path, path: &Path, cover: &AttachedPicture) -> io::Result<()> {
    let ext = match cover.mime() {
        "image/png" | "PNG" => "png",
        "image/jpeg" | "image/jpg" | "JPG" => "jpg",
        "image/gif" => "gif",
        "image/bmp" => "bmp",
        _ => "bin",
    };

    let stem = path.file_stem().unwrap_or_else(|| path.as_os_str());
    let out = dir.join(stem).with_extension(ext);

    fs::write(&out, cover.picture())?;
    info!("wrote cover to {}", out.display());

    Ok(())
}
