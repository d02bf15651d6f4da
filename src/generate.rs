use crate::calendar::{generate_weeks, CalendarPage, GridGeometry, PageLayout, StartDate};
use crate::canvas::{PdfCanvas, PdfError};
use crate::variant::{Variant, VariantKind};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info};

/// Directory used when none is given on the command line
pub(crate) const DEFAULT_OUTPUT_DIR: &str = "output";

/// Where generated calendars are written
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct OutputConfig {
    dir: PathBuf,
}

impl OutputConfig {
    pub(crate) fn new<P: Into<PathBuf>>(dir: P) -> OutputConfig {
        OutputConfig { dir: dir.into() }
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn path_for(&self, variant: &Variant) -> PathBuf {
        self.dir.join(variant.file_name())
    }

    /// Creates the output directory if it does not already exist
    pub(crate) fn ensure_dir(&self) -> Result<(), GenerateError> {
        let dir = self.dir();
        debug!(dir = %dir.display(), "ensuring output directory exists");
        fs::create_dir_all(dir).map_err(|source| GenerateError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
    }
}

impl Default for OutputConfig {
    fn default() -> OutputConfig {
        OutputConfig::new(DEFAULT_OUTPUT_DIR)
    }
}

#[derive(Debug, Error)]
pub(crate) enum GenerateError {
    #[error("failed to create output directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to render {}", .path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: PdfError,
    },
}

/// Renders one calendar and writes it into the output directory, returning
/// the path of the new file
pub(crate) fn generate(
    variant: &Variant,
    start: StartDate,
    config: &OutputConfig,
) -> Result<PathBuf, GenerateError> {
    config.ensure_dir()?;
    let path = config.path_for(variant);
    let weeks = generate_weeks(start);
    debug!(
        variant = %variant.kind(),
        first = %weeks.first_day(),
        last = %weeks.last_day(),
        "laying out calendar"
    );
    let schema = variant.schema();
    let content = variant.content();
    let page = PageLayout::LETTER_LANDSCAPE;
    let geometry = GridGeometry::compute(&schema, page);
    debug!(
        columns = schema.len(),
        row_height = geometry.row_height(),
        "computed grid"
    );
    let render_error = |source| GenerateError::Render {
        path: path.clone(),
        source,
    };
    let title = variant.kind().file_stem();
    let mut canvas = PdfCanvas::new(title, page.width, page.height).map_err(render_error)?;
    CalendarPage::new(&weeks, &schema, &content).render(&geometry, &mut canvas);
    canvas.save(&path).map_err(render_error)?;
    info!(path = %path.display(), "wrote calendar");
    Ok(path)
}

/// Generates each variant in turn.  A failure is logged and recorded for its
/// variant only; the remaining variants are still attempted.
pub(crate) fn generate_all(
    variants: &[Variant],
    start: StartDate,
    config: &OutputConfig,
) -> Vec<(VariantKind, Result<PathBuf, GenerateError>)> {
    variants
        .iter()
        .map(|variant| {
            let r = generate(variant, start, config);
            if let Err(ref e) = r {
                error!(variant = %variant.kind(), error = %e, "failed to generate calendar");
            }
            (variant.kind(), r)
        })
        .collect()
}
