use std::path::Path;

use crate::error::LoadError;

/// Extracts the text of every page. A page that fails on its own becomes `None`.
#[cfg(feature = "pdf")]
pub(super) fn extract_pages(path: &Path, bytes: Vec<u8>) -> Result<Vec<Option<String>>, LoadError> {
    let doc = extract::PdfText::open(path, std::sync::Arc::new(bytes))?;
    let page_count = doc.page_count();
    if page_count == 0 {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok((0..page_count)
        .map(|page| match doc.page_text(page) {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(page, error = %err, "pdf text extraction failed");
                None
            }
        })
        .collect())
}

#[cfg(not(feature = "pdf"))]
pub(super) fn extract_pages(
    _path: &Path,
    _bytes: Vec<u8>,
) -> Result<Vec<Option<String>>, LoadError> {
    Err(LoadError::MissingCapability { format: "pdf" })
}

#[cfg(feature = "pdf")]
mod extract {
    use std::path::Path;
    use std::sync::Arc;

    use hayro::hayro_interpret::font::Glyph;
    use hayro::hayro_interpret::util::{PageExt, RectExt};
    use hayro::hayro_interpret::{
        BlendMode, ClipPath, Context, Device, GlyphDrawMode, Image, InterpreterSettings, Paint,
        PathDrawMode, SoftMask, interpret_page,
    };
    use hayro::hayro_syntax::Pdf;
    use hayro::hayro_syntax::page::Page;
    use kurbo::{Affine, BezPath, Point};

    use crate::error::LoadError;

    const LINE_BREAK_THRESHOLD: f64 = 6.0;

    pub(super) struct PdfText {
        pdf: Pdf,
    }

    impl PdfText {
        pub(super) fn open(path: &Path, bytes: Arc<Vec<u8>>) -> Result<Self, LoadError> {
            if !bytes.as_slice().starts_with(b"%PDF-") {
                return Err(LoadError::corrupt(
                    "pdf",
                    format!("missing PDF header in {}", path.display()),
                ));
            }
            let pdf = Pdf::new(bytes)
                .map_err(|_| LoadError::corrupt("pdf", "document structure could not be parsed"))?;
            Ok(Self { pdf })
        }

        pub(super) fn page_count(&self) -> usize {
            self.pdf.pages().len()
        }

        pub(super) fn page_text(&self, page: usize) -> Result<String, LoadError> {
            let page_ref = self
                .pdf
                .pages()
                .get(page)
                .ok_or_else(|| LoadError::corrupt("pdf", format!("page {page} is missing")))?;
            Ok(collect_page_text(page_ref).trim().to_owned())
        }
    }

    fn collect_page_text(page: &Page<'_>) -> String {
        let mut context = Context::new(
            page.initial_transform(true),
            page.intersected_crop_box().to_kurbo(),
            page.xref(),
            InterpreterSettings::default(),
        );
        let mut collector = GlyphTextCollector::default();
        interpret_page(page, &mut context, &mut collector);
        collector.text
    }

    /// Interpreter device that ignores painting and only records glyph text,
    /// inserting a newline whenever the baseline jumps.
    #[derive(Default)]
    struct GlyphTextCollector {
        text: String,
        last_point: Option<Point>,
        last_glyph: Option<(char, i32, i32)>,
    }

    impl GlyphTextCollector {
        fn push_char(&mut self, ch: char, at: Point) {
            if ch == '\n' || ch == '\r' {
                push_newline(&mut self.text);
            } else if ch.is_whitespace() {
                if !self.text.ends_with([' ', '\n']) {
                    self.text.push(' ');
                }
            } else {
                if self
                    .last_point
                    .is_some_and(|last| (at.y - last.y).abs() > LINE_BREAK_THRESHOLD)
                {
                    push_newline(&mut self.text);
                }
                self.text.push(ch);
            }
            self.last_point = Some(at);
        }
    }

    impl<'a> Device<'a> for GlyphTextCollector {
        fn set_soft_mask(&mut self, _mask: Option<SoftMask<'a>>) {}

        fn set_blend_mode(&mut self, _blend_mode: BlendMode) {}

        fn draw_path(
            &mut self,
            _path: &BezPath,
            _transform: Affine,
            _paint: &Paint<'a>,
            _draw_mode: &PathDrawMode,
        ) {
        }

        fn push_clip_path(&mut self, _clip_path: &ClipPath) {}

        fn push_transparency_group(
            &mut self,
            _opacity: f32,
            _mask: Option<SoftMask<'a>>,
            _blend_mode: BlendMode,
        ) {
        }

        fn draw_glyph(
            &mut self,
            glyph: &Glyph<'a>,
            transform: Affine,
            glyph_transform: Affine,
            _paint: &Paint<'a>,
            _draw_mode: &GlyphDrawMode,
        ) {
            let Some(ch) = glyph.as_unicode() else {
                return;
            };

            let at = (transform * glyph_transform) * Point::ORIGIN;
            // Fake-bold text draws the same glyph twice at one spot.
            let key = (ch, quantize(at.x), quantize(at.y));
            if self.last_glyph == Some(key) {
                return;
            }
            self.last_glyph = Some(key);
            self.push_char(ch, at);
        }

        fn draw_image(&mut self, _image: Image<'a, '_>, _transform: Affine) {}

        fn pop_clip_path(&mut self) {}

        fn pop_transparency_group(&mut self) {}
    }

    fn quantize(value: f64) -> i32 {
        (value * 100.0).round() as i32
    }

    fn push_newline(out: &mut String) {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
    }
}
