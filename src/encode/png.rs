use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameSink, SinkConfig, check_frame};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BannerError, BannerResult};
use crate::foundation::math::flatten_premul_over_bg;
use crate::render::backend::FrameRGBA;

/// Writes each frame to `<dir>/<prefix><index:05>.png`.
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    bg: [u8; 3],
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    scratch: Vec<u8>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Sink writing into `dir` (created on `begin`), flattening alpha over `bg`.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, bg: [u8; 3]) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            bg,
            cfg: None,
            last_idx: None,
            scratch: Vec::new(),
            written: Vec::new(),
        }
    }

    /// Path the frame with index `idx` is written to.
    pub fn path_for(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}{:05}.png", self.prefix, idx.0))
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> BannerResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> BannerResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| BannerError::encode("png sink not started"))?;
        check_frame(cfg, self.last_idx, idx, frame)?;
        self.last_idx = Some(idx);

        let path = self.path_for(idx);
        write_png(&path, frame, self.bg, &mut self.scratch)?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> BannerResult<()> {
        tracing::debug!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "png sequence done"
        );
        self.cfg = None;
        Ok(())
    }
}

/// Write one frame as an opaque PNG.
pub fn write_png(
    path: &Path,
    frame: &FrameRGBA,
    bg: [u8; 3],
    scratch: &mut Vec<u8>,
) -> BannerResult<()> {
    scratch.resize(frame.data.len(), 0);
    let data: &[u8] = if frame.premultiplied {
        if !flatten_premul_over_bg(scratch, &frame.data, bg) {
            return Err(BannerError::validation(
                "frame.data length must be a multiple of 4",
            ));
        }
        scratch
    } else {
        &frame.data
    };

    image::save_buffer_with_format(
        path,
        data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| BannerError::encode(format!("write png '{}': {e}", path.display())))
}
