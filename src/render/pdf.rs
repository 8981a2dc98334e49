use std::path::Path;

use svg2pdf::{ConversionOptions, PageOptions};

use crate::Error;

pub fn render_svg_to_pdf(svg: impl AsRef<str>, output: &Path) -> Result<(), Error> {
    let mut options = svg2pdf::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = svg2pdf::usvg::Tree::from_str(svg.as_ref(), &options)
        .map_err(|e| Error::RenderError(format!("Invalid SVG: {e}")))?;

    let pdf = svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| Error::RenderError(format!("Failed to render PDF: {e}")))?;
    std::fs::write(output, pdf).map_err(Error::io(output))
}
