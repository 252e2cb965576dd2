use super::Sniffer;

const ZIP_LOCAL: &[u8] = &[0x50, 0x4B, 0x03, 0x04];
const ZIP_EMPTY: &[u8] = &[0x50, 0x4B, 0x05, 0x06];
const ZIP_SPANNED: &[u8] = &[0x50, 0x4B, 0x07, 0x08];
const RAR4: &[u8] = &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00];
const RAR5: &[u8] = &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00];

/// Content formats the sniffer can tell apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signature {
    Zip,
    ZipEmpty,
    Rar4,
    Rar5,
    SevenZip,
    Gzip,
    Bzip2,
    Xz,
    Tar,
    Pdf,
    Png,
    Jpeg,
    Gif,
    Empty,
    Data,
}

impl Signature {
    pub fn identify(data: &[u8]) -> Signature {
        match data {
            [] => Signature::Empty,
            _ if data.starts_with(ZIP_LOCAL) || data.starts_with(ZIP_SPANNED) => Signature::Zip,
            _ if data.starts_with(ZIP_EMPTY) => Signature::ZipEmpty,
            _ if data.starts_with(RAR5) => Signature::Rar5,
            _ if data.starts_with(RAR4) => Signature::Rar4,
            [0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C, ..] => Signature::SevenZip,
            [0x1F, 0x8B, ..] => Signature::Gzip,
            [0x42, 0x5A, 0x68, ..] => Signature::Bzip2,
            [0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00, ..] => Signature::Xz,
            [0x25, 0x50, 0x44, 0x46, 0x2D, ..] => Signature::Pdf,
            [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, ..] => Signature::Png,
            [0xFF, 0xD8, 0xFF, ..] => Signature::Jpeg,
            _ if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") => Signature::Gif,
            _ if is_tar_header(data) => Signature::Tar,
            _ => Signature::Data,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Signature::Zip | Signature::ZipEmpty => "application/zip",
            Signature::Rar4 | Signature::Rar5 => "application/x-rar",
            Signature::SevenZip => "application/x-7z-compressed",
            Signature::Gzip => "application/gzip",
            Signature::Bzip2 => "application/x-bzip2",
            Signature::Xz => "application/x-xz",
            Signature::Tar => "application/x-tar",
            Signature::Pdf => "application/pdf",
            Signature::Png => "image/png",
            Signature::Jpeg => "image/jpeg",
            Signature::Gif => "image/gif",
            Signature::Empty => "application/x-empty",
            Signature::Data => "application/octet-stream",
        }
    }
}

fn is_tar_header(data: &[u8]) -> bool {
    data.len() >= 512 && (data[257..263] == *b"ustar\0" || data[257..265] == *b"ustar  \0")
}

/// Magic number sniffer covering the container formats comics ship in,
/// plus enough neighbours to name what was handed over instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignatureSniffer;

impl SignatureSniffer {
    pub fn new() -> Self {
        SignatureSniffer
    }
}

impl Sniffer for SignatureSniffer {
    fn mime_type(&self, data: &[u8]) -> Vec<u8> {
        Signature::identify(data).mime_type().as_bytes().to_vec()
    }

    fn description(&self, data: &[u8]) -> Vec<u8> {
        match Signature::identify(data) {
            Signature::Zip => zip_description(data),
            Signature::ZipEmpty => b"Zip archive data (empty)".to_vec(),
            Signature::Rar4 => b"RAR archive data, v4".to_vec(),
            Signature::Rar5 => b"RAR archive data, v5".to_vec(),
            Signature::SevenZip => seven_zip_description(data),
            Signature::Gzip => b"gzip compressed data".to_vec(),
            Signature::Bzip2 => b"bzip2 compressed data".to_vec(),
            Signature::Xz => b"XZ compressed data".to_vec(),
            Signature::Tar => b"POSIX tar archive".to_vec(),
            Signature::Pdf => pdf_description(data),
            Signature::Png => b"PNG image data".to_vec(),
            Signature::Jpeg => b"JPEG image data".to_vec(),
            Signature::Gif => b"GIF image data".to_vec(),
            Signature::Empty => b"empty".to_vec(),
            Signature::Data => b"data".to_vec(),
        }
    }
}

// "version needed to extract" sits right after the local header magic.
fn zip_description(data: &[u8]) -> Vec<u8> {
    match data.get(4..6) {
        Some(&[lo, hi]) if data.starts_with(ZIP_LOCAL) => {
            let version = u16::from_le_bytes([lo, hi]);
            format!(
                "Zip archive data, at least v{}.{} to extract",
                version / 10,
                version % 10
            )
            .into_bytes()
        }
        _ => b"Zip archive data".to_vec(),
    }
}

fn seven_zip_description(data: &[u8]) -> Vec<u8> {
    match data.get(6..8) {
        Some(&[major, minor]) => {
            format!("7-zip archive data, version {}.{}", major, minor).into_bytes()
        }
        _ => b"7-zip archive data".to_vec(),
    }
}

// The version is copied verbatim from the header up to the first line break,
// so whatever bytes the file holds there end up in the description.
fn pdf_description(data: &[u8]) -> Vec<u8> {
    let header = &data[5..];
    let end = header
        .iter()
        .take(8)
        .position(|b| matches!(b, b'\r' | b'\n' | b' '))
        .unwrap_or_else(|| header.len().min(8));

    let mut out = b"PDF document, version ".to_vec();
    out.extend_from_slice(&header[..end]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identify_zip_local_header() {
        let header = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x00, 0x00];
        assert_eq!(Signature::identify(&header), Signature::Zip);
        assert_eq!(
            SignatureSniffer::new().description(&header),
            b"Zip archive data, at least v2.0 to extract"
        );
    }

    #[test]
    fn identify_empty_zip() {
        let mut header = vec![0x50, 0x4B, 0x05, 0x06];
        header.extend_from_slice(&[0u8; 18]);
        assert_eq!(Signature::identify(&header), Signature::ZipEmpty);
        assert_eq!(Signature::ZipEmpty.mime_type(), "application/zip");
    }

    #[test]
    fn identify_rar_versions() {
        let rar4 = b"Rar!\x1a\x07\x00\xcf\x90\x73";
        let rar5 = b"Rar!\x1a\x07\x01\x00\x33\x92";
        assert_eq!(Signature::identify(rar4), Signature::Rar4);
        assert_eq!(Signature::identify(rar5), Signature::Rar5);
        assert_eq!(Signature::Rar4.mime_type(), "application/x-rar");
        assert_eq!(Signature::Rar5.mime_type(), "application/x-rar");
    }

    #[test]
    fn identify_pdf_with_version() {
        let data = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3";
        assert_eq!(Signature::identify(data), Signature::Pdf);
        assert_eq!(
            SignatureSniffer::new().description(data),
            b"PDF document, version 1.7"
        );
    }

    #[test]
    fn identify_tar_header() {
        let mut header = [0u8; 512];
        header[257..263].copy_from_slice(b"ustar\0");
        assert_eq!(Signature::identify(&header), Signature::Tar);
    }

    #[test]
    fn truncated_tar_header_is_data() {
        let short = [0u8; 256];
        assert_eq!(Signature::identify(&short), Signature::Data);
    }

    #[test]
    fn empty_and_unknown() {
        assert_eq!(Signature::identify(&[]), Signature::Empty);
        assert_eq!(
            Signature::identify(&[0xDE, 0xAD, 0xBE, 0xEF]),
            Signature::Data
        );
        assert_eq!(Signature::Data.mime_type(), "application/octet-stream");
    }
}
