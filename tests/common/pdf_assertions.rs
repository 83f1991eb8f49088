use lopdf::Document as LopdfDocument;

/// Wrapper around produced PDF bytes with helper methods.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, lopdf::Error> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}

#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $expected:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $expected,
            "expected {} page(s) in produced PDF, got {}",
            $expected,
            $pdf.page_count()
        );
    };
}
