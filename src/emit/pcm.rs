//! Single-cycle PCM emission for wavetables.
//!
//! Each wavetable becomes a mono 16-bit WAV whose sample rate equals its
//! frame count, so one second of playback at the nominal rate is exactly one
//! cycle of the waveform. Downstream bank packaging relies on that property
//! to treat every file as a single-cycle source.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use crate::error::Error;
use crate::quantize::quantize;

/// Renders normalized samples as a complete in-memory WAV image.
///
/// Samples are quantized to signed 16-bit PCM on the way in.
///
/// # Errors
///
/// Returns the underlying [`hound::Error`] if encoding fails.
pub fn render_wav(samples: &[f32]) -> Result<Vec<u8>, hound::Error> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: samples.len() as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    for &sample in samples {
        writer.write_sample(quantize(sample))?;
    }
    writer.finalize()?;

    Ok(cursor.into_inner())
}

/// Renders and writes a wavetable to `path` in one shot.
///
/// # Errors
///
/// Returns [`Error::Wav`] when encoding fails and [`Error::Io`] when the
/// write fails, both carrying the offending path. No partial file is left
/// behind in either case.
pub fn write_wav(samples: &[f32], path: &Path) -> Result<(), Error> {
    let image = render_wav(samples).map_err(|source| Error::Wav {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, image).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
