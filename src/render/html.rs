use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    composition::model::{DeckMeta, SlideKind, SlideSpec, TextRun},
    foundation::{core::Rgb8, error::DeckResult},
    render::sink::{RenderSink, encode_image, write_artifact},
};

// Slides are laid out on a 10in x 7.5in page.
const STYLESHEET: &str = "\
body{margin:0;padding:24px 0;display:flex;flex-direction:column;align-items:center;gap:24px}\n\
.slide{position:relative;width:10in;height:7.5in;overflow:hidden;box-shadow:0 2px 12px rgba(0,0,0,.35)}\n\
.slide.title{display:flex;flex-direction:column;justify-content:center;align-items:center;text-align:center}\n\
.slide.title h1{margin:0 0.5in 0.25in}\n\
.slide.title p{margin:0 0.5in}\n\
.slide.content h2{position:absolute;left:0.5in;top:0.3in;width:9in;margin:0}\n\
.slide.content .body{position:absolute;left:0.5in;top:1.5in;width:5.5in;height:5in;overflow:hidden;margin:0}\n\
.slide.content img{position:absolute;left:6in;top:1.5in;width:4in}\n";

/// Writes the deck as one self-contained HTML page, one `<section>` per slide.
///
/// Images are inlined as `data:` URIs so the page stays intact after asset cleanup.
#[derive(Clone, Debug, Default)]
pub struct HtmlDeckSink;

impl RenderSink for HtmlDeckSink {
    fn extension(&self) -> &'static str {
        "html"
    }

    #[tracing::instrument(skip(self, meta, slides), fields(slides = slides.len()))]
    fn render(
        &mut self,
        meta: &DeckMeta,
        slides: &[SlideSpec],
        out_path: &Path,
    ) -> DeckResult<()> {
        let doc = render_document(meta, slides)?;
        write_artifact(out_path, doc.as_bytes())
    }
}

/// Render the full HTML document for `slides`.
pub fn render_document(meta: &DeckMeta, slides: &[SlideSpec]) -> DeckResult<String> {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", encode_text(&meta.topic)));
    out.push_str("<style>\n");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n");
    out.push_str(&format!(
        "<body style=\"background:{}\">\n",
        contrast_backdrop(meta.background).to_hex()
    ));

    for (idx, slide) in slides.iter().enumerate() {
        render_slide(&mut out, idx, slide)?;
    }

    out.push_str("</body>\n</html>\n");
    Ok(out)
}

fn render_slide(out: &mut String, idx: usize, slide: &SlideSpec) -> DeckResult<()> {
    let class = match slide.kind {
        SlideKind::Title => "title",
        SlideKind::Content => "content",
    };
    out.push_str(&format!(
        "<section class=\"slide {class}\" data-slide=\"{idx}\" style=\"background:{}\">\n",
        slide.background.to_hex()
    ));

    match slide.kind {
        SlideKind::Title => {
            push_run(out, "h1", None, &slide.title);
            if let Some(sub) = &slide.subtitle {
                push_run(out, "p", None, sub);
            }
        }
        SlideKind::Content => {
            push_run(out, "h2", None, &slide.title);
            if let Some(body) = &slide.body {
                push_run(out, "p", Some("body"), body);
            }
            if let Some(image) = &slide.image {
                out.push_str(&format!(
                    "<img src=\"data:{};base64,{}\" alt=\"{}\">\n",
                    image.format.mime_type(),
                    encode_image(image)?,
                    encode_double_quoted_attribute(&slide.title.text)
                ));
            }
        }
    }

    out.push_str("</section>\n");
    Ok(())
}

fn push_run(out: &mut String, tag: &str, class: Option<&str>, run: &TextRun) {
    let class_attr = class.map(|c| format!(" class=\"{c}\"")).unwrap_or_default();
    out.push_str(&format!(
        "<{tag}{class_attr} style=\"{}\">{}</{tag}>\n",
        run_css(run),
        encode_text(&run.text)
    ));
}

/// Inline CSS for a text run.
pub fn run_css(run: &TextRun) -> String {
    format!(
        "font-family:'{}',{};font-size:{}pt;font-weight:{};color:{}",
        run.style.font.name(),
        run.style.font.generic_fallback(),
        run.role.size_pt(),
        if run.role.bold() { "bold" } else { "normal" },
        run.style.color.to_hex()
    )
}

/// Page backdrop behind the slides, chosen to set the slides apart.
fn contrast_backdrop(background: Rgb8) -> Rgb8 {
    if background == Rgb8::BLACK {
        Rgb8::new(0x2a, 0x2a, 0x2a)
    } else {
        Rgb8::new(0xd8, 0xd8, 0xd8)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/html.rs"]
mod tests;
