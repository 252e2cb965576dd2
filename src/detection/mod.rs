pub mod signatures;

pub use signatures::{Signature, SignatureSniffer};

use std::io::{Read, Seek, SeekFrom};

use log::debug;

use crate::error::DetectionError;

/// Content based type sniffing, in the shape of libmagic: results come back
/// as raw bytes and are decoded by the caller.
pub trait Sniffer {
    fn mime_type(&self, data: &[u8]) -> Vec<u8>;
    fn description(&self, data: &[u8]) -> Vec<u8>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectedType {
    pub mime_type: String,
    pub description: String,
}

/// Decode sniffer output as UTF-8, falling back to ISO-8859-1.
pub fn decode_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => encoding_rs::mem::decode_latin1(bytes).into_owned(),
    }
}

pub fn mime_type<R: Read + Seek>(stream: &mut R) -> Result<String, DetectionError> {
    mime_type_with(&SignatureSniffer::new(), stream)
}

pub fn description<R: Read + Seek>(stream: &mut R) -> Result<String, DetectionError> {
    description_with(&SignatureSniffer::new(), stream)
}

pub fn detect<R: Read + Seek>(stream: &mut R) -> Result<DetectedType, DetectionError> {
    detect_with(&SignatureSniffer::new(), stream)
}

pub fn mime_type_with<S, R>(sniffer: &S, stream: &mut R) -> Result<String, DetectionError>
where
    S: Sniffer + ?Sized,
    R: Read + Seek,
{
    let data = read_whole(stream)?;
    Ok(decode_bytes(&sniffer.mime_type(&data)))
}

pub fn description_with<S, R>(sniffer: &S, stream: &mut R) -> Result<String, DetectionError>
where
    S: Sniffer + ?Sized,
    R: Read + Seek,
{
    let data = read_whole(stream)?;
    Ok(decode_bytes(&sniffer.description(&data)))
}

pub fn detect_with<S, R>(sniffer: &S, stream: &mut R) -> Result<DetectedType, DetectionError>
where
    S: Sniffer + ?Sized,
    R: Read + Seek,
{
    let detected = DetectedType {
        mime_type: mime_type_with(sniffer, stream)?,
        description: description_with(sniffer, stream)?,
    };

    debug!("Detected {} ({})", detected.mime_type, detected.description);

    Ok(detected)
}

// Reads everything from the start and puts the cursor back where it was.
fn read_whole<R: Read + Seek>(stream: &mut R) -> Result<Vec<u8>, DetectionError> {
    let last_pos = stream.stream_position()?;
    stream.seek(SeekFrom::Start(0))?;

    let mut data = Vec::new();
    let read = stream.read_to_end(&mut data);

    // Restore even when the read failed half way.
    stream.seek(SeekFrom::Start(last_pos))?;
    read?;

    Ok(data)
}
