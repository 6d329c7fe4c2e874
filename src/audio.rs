//! Sound output
//!
//! The controller talks to an [`AudioSink`]; it never touches a mixer
//! directly. [`SilentAudio`] is the "sound disabled" fallback and is what the
//! game runs with when built without the `audio` feature or when the audio
//! device cannot be opened.

use crate::game::types::{MusicTrack, Sfx};
use log::warn;

/// Fire-and-forget sound output. Playback failures are logged by the
/// implementation, never reported to the caller.
pub trait AudioSink {
    fn play_sfx(&mut self, sfx: Sfx);

    /// Start looping `track` from the beginning, replacing whatever played
    fn play_music(&mut self, track: MusicTrack);

    fn stop_music(&mut self);

    /// Gains in 0.0-1.0. SFX clips are further scaled by their own factor.
    fn set_volumes(&mut self, sfx_gain: f32, music_gain: f32);

    /// False for the "sound disabled" sink
    fn is_enabled(&self) -> bool {
        true
    }
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play_sfx(&mut self, sfx: Sfx) {
        (**self).play_sfx(sfx);
    }

    fn play_music(&mut self, track: MusicTrack) {
        (**self).play_music(track);
    }

    fn stop_music(&mut self) {
        (**self).stop_music();
    }

    fn set_volumes(&mut self, sfx_gain: f32, music_gain: f32) {
        (**self).set_volumes(sfx_gain, music_gain);
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Discards everything
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play_sfx(&mut self, _sfx: Sfx) {}
    fn play_music(&mut self, _track: MusicTrack) {}
    fn stop_music(&mut self) {}
    fn set_volumes(&mut self, _sfx_gain: f32, _music_gain: f32) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Box an opened backend, or fall back to [`SilentAudio`] when it failed
#[cfg_attr(not(feature = "audio"), allow(dead_code))]
pub fn sink_or_silent<S: AudioSink + 'static>(opened: Result<S, String>) -> Box<dyn AudioSink> {
    match opened {
        Ok(sink) => Box::new(sink),
        Err(e) => {
            warn!("Audio disabled: {}", e);
            Box::new(SilentAudio)
        }
    }
}

/// Effective clip volume on the mixer's 0-`max` scale
#[cfg_attr(not(feature = "audio"), allow(dead_code))]
pub fn clip_volume(sfx: Sfx, sfx_gain: f32, max: i32) -> i32 {
    (sfx.volume_factor() * sfx_gain.clamp(0.0, 1.0) * max as f32).round() as i32
}

#[cfg(feature = "audio")]
pub use mixer::MixerAudio;

#[cfg(feature = "audio")]
mod mixer {
    use super::{AudioSink, clip_volume};
    use crate::assets::{AssetLoad, AssetPaths};
    use crate::game::types::{MusicTrack, Sfx};
    use log::{info, warn};
    use sdl2::mixer::{self, Channel, Chunk, InitFlag, Music, Sdl2MixerContext};
    use sdl2::{AudioSubsystem, Sdl};
    use std::collections::HashMap;

    const FREQUENCY: i32 = 44_100;
    const CHANNELS: i32 = 2;
    const CHUNK_SIZE: i32 = 1_024;
    const MIXING_CHANNELS: i32 = 16;

    /// SDL2_mixer backend. Clips that fail to load are silently skipped.
    /// Fields drop in order: clips and tracks go before the mixer and the
    /// audio subsystem they depend on.
    pub struct MixerAudio {
        clips: HashMap<Sfx, Chunk>,
        tracks: HashMap<MusicTrack, Music<'static>>,
        sfx_gain: f32,
        _context: Sdl2MixerContext,
        _subsystem: AudioSubsystem,
    }

    impl MixerAudio {
        /// Start the audio subsystem, open the device and load every clip
        /// and track
        pub fn open(sdl: &Sdl, paths: &AssetPaths) -> Result<Self, String> {
            let subsystem = sdl.audio()?;
            mixer::open_audio(FREQUENCY, mixer::DEFAULT_FORMAT, CHANNELS, CHUNK_SIZE)?;
            let context = mixer::init(InitFlag::MP3 | InitFlag::OGG)?;
            mixer::allocate_channels(MIXING_CHANNELS);

            let mut clips = HashMap::new();
            for sfx in Sfx::all() {
                let path = paths.audio(sfx.file_name());
                if let AssetLoad::Loaded(chunk) =
                    AssetLoad::from_result(Chunk::from_file(&path)).logged(sfx.file_name())
                {
                    clips.insert(sfx, chunk);
                }
            }

            let mut tracks = HashMap::new();
            for track in [MusicTrack::Menu, MusicTrack::Gameplay] {
                let Some(path) = paths.first_audio(&track.file_candidates()) else {
                    warn!("No music file found for {:?}", track);
                    continue;
                };
                match Music::from_file(&path) {
                    Ok(music) => {
                        info!("Loaded music {}", path.display());
                        tracks.insert(track, music);
                    }
                    Err(e) => warn!("Failed to load {}: {}", path.display(), e),
                }
            }

            Ok(MixerAudio {
                clips,
                tracks,
                sfx_gain: 0.0,
                _context: context,
                _subsystem: subsystem,
            })
        }
    }

    impl AudioSink for MixerAudio {
        fn play_sfx(&mut self, sfx: Sfx) {
            if let Some(chunk) = self.clips.get(&sfx) {
                if let Err(e) = Channel::all().play(chunk, 0) {
                    warn!("Could not play {:?}: {}", sfx, e);
                }
            }
        }

        fn play_music(&mut self, track: MusicTrack) {
            if let Some(music) = self.tracks.get(&track) {
                Music::halt();
                if let Err(e) = music.play(-1) {
                    warn!("Could not play {:?} music: {}", track, e);
                }
            }
        }

        fn stop_music(&mut self) {
            Music::halt();
        }

        fn set_volumes(&mut self, sfx_gain: f32, music_gain: f32) {
            self.sfx_gain = sfx_gain;
            for (sfx, chunk) in self.clips.iter_mut() {
                chunk.set_volume(clip_volume(*sfx, self.sfx_gain, mixer::MAX_VOLUME));
            }
            Music::set_volume((music_gain.clamp(0.0, 1.0) * mixer::MAX_VOLUME as f32).round() as i32);
        }
    }
}

/// Records every call, for asserting sound feedback in tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub sfx: Vec<Sfx>,
    pub music: Vec<Option<MusicTrack>>,
    pub volumes: Option<(f32, f32)>,
}

#[cfg(test)]
impl AudioSink for RecordingAudio {
    fn play_sfx(&mut self, sfx: Sfx) {
        self.sfx.push(sfx);
    }

    fn play_music(&mut self, track: MusicTrack) {
        self.music.push(Some(track));
    }

    fn stop_music(&mut self) {
        self.music.push(None);
    }

    fn set_volumes(&mut self, sfx_gain: f32, music_gain: f32) {
        self.volumes = Some((sfx_gain, music_gain));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_volume_applies_factor() {
        assert_eq!(clip_volume(Sfx::Laser, 0.5, 128), 64);
        assert_eq!(clip_volume(Sfx::Click, 1.0, 100), 30);
        assert_eq!(clip_volume(Sfx::Explosion, 0.5, 100), 5);
        assert_eq!(clip_volume(Sfx::GameOver, 2.0, 100), 25);
        assert_eq!(clip_volume(Sfx::Laser, 0.0, 128), 0);
    }

    #[test]
    fn test_failed_backend_falls_back_to_silence() {
        let sink = sink_or_silent::<RecordingAudio>(Err("no audio device".to_string()));
        assert!(!sink.is_enabled());

        let sink = sink_or_silent(Ok(RecordingAudio::default()));
        assert!(sink.is_enabled());
    }
}
