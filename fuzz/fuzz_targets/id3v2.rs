#![no_main]

use id3read::id3v2::Tag;
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Readers are generic, so the bytes can be fed in directly without going through a file.
    let mut cursor = Cursor::new(data);

    if let Ok(tag) = Tag::read(&mut cursor) {
        let _ = tag.title();
        let _ = tag.artist();
        let _ = tag.album();
        let _ = tag.composer();
        let _ = tag.cover_image();

        for frame in tag.frames() {
            let _ = frame.id().as_str();
        }

        assert!(tag.frames().iter().map(|f| f.size() + 10).sum::<usize>() <= tag.size() as usize);
    }
});
