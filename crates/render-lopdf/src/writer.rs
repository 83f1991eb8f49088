use inkpress_render_core::utils::flip_y;
use inkpress_render_core::{
    DocumentWriter, LineCap, LineJoin, RenderError, VectorDocument, VectorPage,
};
use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::io::Write;

/// Serializes a [`VectorDocument`] to PDF: one content stream per page,
/// MediaBox equal to the canvas size, stroked paths with round caps and
/// joins.
pub struct LopdfWriter {
    version: &'static str,
}

impl LopdfWriter {
    pub fn new() -> Self {
        Self { version: "1.7" }
    }
}

impl Default for LopdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> DocumentWriter<W> for LopdfWriter {
    fn write_document(self, document: &VectorDocument, mut writer: W) -> Result<W, RenderError> {
        let mut doc = Document::with_version(self.version);
        let pages_id = doc.new_object_id();

        let mut page_ids = Vec::with_capacity(document.pages.len());
        for page in &document.pages {
            let content = page_content(page);
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![
                    0.0f32.into(),
                    0.0f32.into(),
                    page.size.width.into(),
                    page.size.height.into(),
                ],
                "Contents" => content_id,
            });
            page_ids.push(page_id);
        }

        let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_ids.len() as i64,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc.save_to(&mut writer)?;
        debug!("wrote PDF with {} page(s)", document.pages.len());
        Ok(writer)
    }
}

fn page_content(page: &VectorPage) -> Content {
    let mut operations = Vec::new();
    for path in &page.paths {
        let Some(first) = path.points.first() else {
            continue;
        };
        operations.push(Operation::new("w", vec![path.width.into()]));
        operations.push(Operation::new("RG", vec![
            (path.color.r as f32 / 255.0).into(),
            (path.color.g as f32 / 255.0).into(),
            (path.color.b as f32 / 255.0).into(),
        ]));
        operations.push(Operation::new("J", vec![cap_code(path.cap).into()]));
        operations.push(Operation::new("j", vec![join_code(path.join).into()]));
        operations.push(Operation::new("m", vec![
            first.x.into(),
            flip_y(first.y, page.size.height).into(),
        ]));
        for point in &path.points[1..] {
            operations.push(Operation::new("l", vec![
                point.x.into(),
                flip_y(point.y, page.size.height).into(),
            ]));
        }
        operations.push(Operation::new("S", vec![]));
    }
    Content { operations }
}

fn cap_code(cap: LineCap) -> i64 {
    match cap {
        LineCap::Butt => 0,
        LineCap::Round => 1,
        LineCap::Square => 2,
    }
}

fn join_code(join: LineJoin) -> i64 {
    match join {
        LineJoin::Miter => 0,
        LineJoin::Round => 1,
        LineJoin::Bevel => 2,
    }
}
