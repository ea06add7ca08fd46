use std::io::{Read as _, Write as _};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::encode::sink::{FrameSink, SinkConfig, check_frame};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BannerError, BannerResult};
use crate::foundation::math::flatten_premul_over_bg;
use crate::render::backend::FrameRGBA;

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 path.
    pub out_path: PathBuf,
    /// Overwrite the output if it exists.
    pub overwrite: bool,
    /// Background used to flatten alpha.
    pub bg: [u8; 3],
}

impl FfmpegSinkOpts {
    /// Options writing to `out_path`, overwriting, over black.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg: [0, 0, 0],
        }
    }
}

/// Streams raw frames into a spawned `ffmpeg`, producing an h264/yuv420p MP4.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    /// Create a sink; `ffmpeg` is spawned on `begin`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }
}

/// Validate `cfg` for yuv420p output and build the `ffmpeg` argument list.
fn ffmpeg_args(cfg: &SinkConfig, opts: &FfmpegSinkOpts) -> BannerResult<Vec<String>> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(BannerError::validation(
            "ffmpeg sink width/height must be non-zero",
        ));
    }
    if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
        return Err(BannerError::validation(format!(
            "ffmpeg sink width/height must be even for yuv420p (got {}x{})",
            cfg.width, cfg.height
        )));
    }

    let mut args: Vec<String> = vec![if opts.overwrite { "-y" } else { "-n" }.to_owned()];
    args.extend(
        [
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &format!("{}/{}", cfg.fps.num, cfg.fps.den),
            "-i",
            "pipe:0",
            "-an",
            "-c:v",
            "libx264",
            "-pix_fmt",
            "yuv420p",
            "-movflags",
            "+faststart",
        ]
        .map(str::to_owned),
    );
    args.push(opts.out_path.to_string_lossy().into_owned());
    Ok(args)
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> BannerResult<()> {
        let args = ffmpeg_args(&cfg, &self.opts)?;

        if let Some(parent) = self.opts.out_path.parent() {
            use anyhow::Context as _;
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(BannerError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(BannerError::encode(
                "ffmpeg is required for MP4 encoding, but was not found on PATH",
            ));
        }

        tracing::debug!(?args, "spawning ffmpeg");
        let mut child = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| BannerError::encode(format!("failed to spawn ffmpeg: {e}")))?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| BannerError::encode("failed to open ffmpeg stdin"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| BannerError::encode("failed to open ffmpeg stderr"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> BannerResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| BannerError::encode("ffmpeg sink not started"))?;
        check_frame(cfg, self.last_idx, idx, frame)?;
        self.last_idx = Some(idx);

        let data: &[u8] = if frame.premultiplied {
            flatten_premul_over_bg(&mut self.scratch, &frame.data, self.opts.bg);
            &self.scratch
        } else {
            &frame.data
        };

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(BannerError::encode("ffmpeg sink is already finalized"));
        };
        stdin
            .write_all(data)
            .map_err(|e| BannerError::encode(format!("failed to write frame to ffmpeg: {e}")))
    }

    fn end(&mut self) -> BannerResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| BannerError::encode("ffmpeg sink not started"))?;

        let status = child
            .wait()
            .map_err(|e| BannerError::encode(format!("failed to wait for ffmpeg: {e}")))?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| BannerError::encode("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| BannerError::encode(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };

        self.cfg = None;
        if !status.success() {
            return Err(BannerError::encode(format!(
                "ffmpeg exited with status {status}: {}",
                String::from_utf8_lossy(&stderr_bytes).trim()
            )));
        }
        Ok(())
    }
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
