use std::{error::Error, path::Path};

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};

/// A decoded WAV file, one vector per channel.
pub(crate) struct Audio {
    pub(crate) sample_rate: u32,
    pub(crate) channels: Vec<Vec<f32>>,
}

impl Audio {
    /// Number of frames (samples per channel).
    pub(crate) fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    /// Grows (zero-filled) or shrinks every channel by `padding` frames.
    pub(crate) fn pad(&mut self, padding: i64) {
        let frames = (self.frames() as i64 + padding).max(0) as usize;
        for channel in &mut self.channels {
            channel.resize(frames, 0.0);
        }
    }

    /// Returns the two channels of a stereo signal. Mono input is duplicated.
    pub(crate) fn stereo(&self) -> Result<(&[f32], &[f32]), Box<dyn Error>> {
        match self.channels.as_slice() {
            [mono] => Ok((mono.as_slice(), mono.as_slice())),
            [left, right] => Ok((left.as_slice(), right.as_slice())),
            channels => Err(format!("Unsupported channel count: {}", channels.len()).into()),
        }
    }
}

pub(crate) fn read(path: &Path) -> Result<(Audio, WavSpec), Box<dyn Error>> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
        SampleFormat::Int => {
            // Convert integer samples to f32 in range [-1.0, 1.0]
            let max_value = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_value))
                .collect::<Result<_, _>>()?
        }
    };

    let channel_count = usize::from(spec.channels);
    let mut channels = vec![Vec::with_capacity(samples.len() / channel_count); channel_count];
    for frame in samples.chunks_exact(channel_count) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    Ok((
        Audio {
            sample_rate: spec.sample_rate,
            channels,
        },
        spec,
    ))
}

/// Writes the channels as an interleaved 32-bit float WAV file.
pub(crate) fn write(path: &Path, audio: &Audio) -> Result<(), Box<dyn Error>> {
    let spec = WavSpec {
        channels: u16::try_from(audio.channels.len())?,
        sample_rate: audio.sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for frame in 0..audio.frames() {
        for channel in &audio.channels {
            writer.write_sample(channel[frame])?;
        }
    }
    writer.finalize()?;

    Ok(())
}
