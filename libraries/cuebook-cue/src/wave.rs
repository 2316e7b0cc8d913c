//! RIFF/WAVE container-header reader
//!
//! Companion wave files are found next to a track listing by matching base
//! filename. Only the header is read; sample data is never decoded. The
//! reader iterates sub-chunks by their declared lengths, so it makes no
//! assumption about chunk order and skips chunk types it does not know.

use crate::error::WaveError;
use cuebook_core::types::WaveInfo;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Uncompressed PCM format code in the fmt sub-chunk.
const FORMAT_PCM: u16 = 1;

/// Fields of the fmt sub-chunk the reader cares about.
struct FmtChunk {
    audio_format: u16,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
}

/// Read the container header of a wave file.
///
/// Requires a `fmt ` and a `data` sub-chunk. Fails with
/// [`WaveError::UnsupportedFormat`] for non-PCM audio or when a required
/// sub-chunk is absent, and with [`WaveError::Malformed`] when a declared
/// length is inconsistent with the file's actual size.
///
/// The file handle lives only for the duration of this call and is closed
/// on every exit path.
pub fn read_wave_info(path: &Path) -> Result<WaveInfo, WaveError> {
    let file = File::open(path)?;
    let file_len = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    let mut header = [0u8; 12];
    read_fully(&mut reader, &mut header)?;
    if &header[0..4] != b"RIFF" {
        return Err(WaveError::UnsupportedFormat(
            "missing RIFF group identifier".to_string(),
        ));
    }
    if &header[8..12] != b"WAVE" {
        return Err(WaveError::UnsupportedFormat(
            "missing WAVE format identifier".to_string(),
        ));
    }

    let mut fmt: Option<FmtChunk> = None;
    let mut data_len: Option<u32> = None;
    let mut offset: u64 = 12;

    // Walk sub-chunks using each declared length to find the next one.
    while offset + 8 <= file_len {
        reader.seek(SeekFrom::Start(offset))?;
        let mut chunk_header = [0u8; 8];
        read_fully(&mut reader, &mut chunk_header)?;

        let mut chunk_id = [0u8; 4];
        chunk_id.copy_from_slice(&chunk_header[0..4]);
        let chunk_len = u32::from_le_bytes([
            chunk_header[4],
            chunk_header[5],
            chunk_header[6],
            chunk_header[7],
        ]);
        let body_start = offset + 8;

        if body_start + u64::from(chunk_len) > file_len {
            return Err(WaveError::Malformed(format!(
                "chunk {} declares {} bytes past end of file",
                String::from_utf8_lossy(&chunk_id).trim_end(),
                chunk_len,
            )));
        }

        match &chunk_id {
            b"fmt " => {
                if chunk_len < 16 {
                    return Err(WaveError::Malformed(format!(
                        "fmt chunk too short: {chunk_len} bytes"
                    )));
                }
                let mut body = [0u8; 16];
                read_fully(&mut reader, &mut body)?;
                fmt = Some(FmtChunk {
                    audio_format: u16::from_le_bytes([body[0], body[1]]),
                    channels: u16::from_le_bytes([body[2], body[3]]),
                    sample_rate: u32::from_le_bytes([body[4], body[5], body[6], body[7]]),
                    bits_per_sample: u16::from_le_bytes([body[14], body[15]]),
                });
            }
            b"data" => {
                data_len = Some(chunk_len);
            }
            // Unrecognized sub-chunk types are skipped.
            _ => {}
        }

        // Chunk bodies are padded to even length per RIFF.
        offset = body_start + u64::from(chunk_len) + u64::from(chunk_len % 2);
    }

    let fmt = fmt.ok_or_else(|| WaveError::UnsupportedFormat("missing fmt chunk".to_string()))?;
    let data_len =
        data_len.ok_or_else(|| WaveError::UnsupportedFormat("missing data chunk".to_string()))?;

    if fmt.audio_format != FORMAT_PCM {
        return Err(WaveError::UnsupportedFormat(format!(
            "non-PCM audio format code {}",
            fmt.audio_format
        )));
    }
    if fmt.channels == 0 || fmt.bits_per_sample == 0 || fmt.sample_rate == 0 {
        return Err(WaveError::Malformed(
            "fmt chunk declares zero channels, bit depth, or sample rate".to_string(),
        ));
    }

    let bytes_per_frame = u32::from(fmt.channels) * u32::from(fmt.bits_per_sample) / 8;
    if bytes_per_frame == 0 {
        return Err(WaveError::Malformed(
            "fmt chunk declares a sub-byte frame size".to_string(),
        ));
    }

    let total_samples = data_len / bytes_per_frame;
    let duration_seconds = f64::from(total_samples) / f64::from(fmt.sample_rate);

    Ok(WaveInfo {
        file_path: path.display().to_string(),
        channels: fmt.channels,
        sample_rate: fmt.sample_rate,
        bits_per_sample: fmt.bits_per_sample,
        sample_format: "Int".to_string(),
        duration_seconds,
        total_samples,
    })
}

/// `read_exact` with end-of-file reported as a malformed header rather
/// than a bare I/O error, since it means a declared size overran the file.
fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), WaveError> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            WaveError::Malformed("header truncated".to_string())
        } else {
            WaveError::Io(e)
        }
    })
}
