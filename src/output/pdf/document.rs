//! PDF file structure: objects, cross-reference table and trailer.

use std::fmt::Write;

use super::canvas::{Font, encode_text};

/// A4 portrait in points.
pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;

// Fixed object numbers; page objects follow the fonts and info dictionary.
const CATALOG_ID: usize = 1;
const PAGES_ID: usize = 2;
const FIRST_FONT_ID: usize = 3;
const INFO_ID: usize = FIRST_FONT_ID + Font::ALL.len();
const FIRST_PAGE_ID: usize = INFO_ID + 1;

/// Serialize finished page content streams into a PDF 1.4 file.
///
/// Output depends only on the inputs: no timestamps or random IDs are embedded.
#[must_use]
pub fn assemble(title: &str, pages: &[Vec<u8>]) -> Vec<u8> {
    let mut writer = ObjectWriter::new();

    writer.object(
        CATALOG_ID,
        format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>").as_bytes(),
    );

    let kids: Vec<String> = (0..pages.len())
        .map(|i| format!("{} 0 R", page_id(i)))
        .collect();
    writer.object(
        PAGES_ID,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            pages.len()
        )
        .as_bytes(),
    );

    for (i, font) in Font::ALL.iter().enumerate() {
        writer.object(
            FIRST_FONT_ID + i,
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                font.base_font()
            )
            .as_bytes(),
        );
    }

    writer.object(
        INFO_ID,
        format!(
            "<< /Title ({}) /Producer (sales-report) >>",
            encode_text(title)
        )
        .as_bytes(),
    );

    let mut fonts = String::new();
    for (i, font) in Font::ALL.iter().enumerate() {
        write!(fonts, "/{} {} 0 R ", font.resource(), FIRST_FONT_ID + i).ok();
    }
    for (i, content) in pages.iter().enumerate() {
        let id = page_id(i);
        writer.object(
            id,
            format!(
                "<< /Type /Page /Parent {PAGES_ID} 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                 /Resources << /Font << {}>> >> /Contents {} 0 R >>",
                fonts,
                id + 1
            )
            .as_bytes(),
        );
        writer.stream(id + 1, content);
    }

    writer.finish()
}

const fn page_id(index: usize) -> usize {
    FIRST_PAGE_ID + index * 2
}

/// Appends numbered objects while recording their byte offsets.
struct ObjectWriter {
    buf: Vec<u8>,
    offsets: Vec<(usize, usize)>,
}

impl ObjectWriter {
    fn new() -> Self {
        let mut buf = Vec::new();
        buf.extend_from_slice(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n");
        Self {
            buf,
            offsets: Vec::new(),
        }
    }

    fn object(&mut self, id: usize, body: &[u8]) {
        self.offsets.push((id, self.buf.len()));
        self.buf.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    fn stream(&mut self, id: usize, content: &[u8]) {
        let mut body = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(b"\nendstream");
        self.object(id, &body);
    }

    fn finish(mut self) -> Vec<u8> {
        self.offsets.sort_unstable();
        let size = self.offsets.len() + 1;
        let xref_offset = self.buf.len();

        let mut xref = format!("xref\n0 {size}\n0000000000 65535 f \n");
        for (_, offset) in &self.offsets {
            writeln!(xref, "{offset:010} 00000 n ").ok();
        }
        write!(
            xref,
            "trailer\n<< /Size {size} /Root {CATALOG_ID} 0 R /Info {INFO_ID} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
        )
        .ok();
        self.buf.extend_from_slice(xref.as_bytes());
        self.buf
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
