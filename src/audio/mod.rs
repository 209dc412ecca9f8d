//! Audio domain: sound effect playback and music.
//!
//! Playback is fire and forget: each request spawns an `AudioPlayer`
//! entity that despawns itself when the clip ends. There is no mixing
//! or routing beyond what the engine provides.

use std::collections::HashMap;

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content::GameContent;
use crate::core::{gameplay_active, GameState};
use crate::movement::{MovementState, Player, PlayerJumped, PlayerLanded};

#[cfg(test)]
mod tests;

/// Minimum horizontal speed that counts as running for footsteps
const FOOTSTEP_MIN_SPEED: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundKind {
    Jump,
    Land,
    Footstep,
    PlayerHurt,
    EnemyHurt,
    Stomp,
    Checkpoint,
    Pickup,
    Door,
}

/// Loaded clips per sound kind, plus the music tracks.
#[derive(Resource, Debug, Default)]
pub struct SoundLibrary {
    pub clips: HashMap<SoundKind, Vec<Handle<AudioSource>>>,
    pub music_tracks: Vec<Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn clip_count(&self, kind: SoundKind) -> usize {
        self.clips.get(&kind).map(Vec::len).unwrap_or(0)
    }
}

/// Request to play one sound effect. Without an index a random clip of
/// that kind is chosen.
#[derive(Debug)]
pub struct PlaySound {
    pub kind: SoundKind,
    pub index: Option<usize>,
}

impl PlaySound {
    pub fn any(kind: SoundKind) -> Self {
        Self { kind, index: None }
    }

    pub fn exact(kind: SoundKind, index: usize) -> Self {
        Self {
            kind,
            index: Some(index),
        }
    }
}

impl Message for PlaySound {}

/// Swap the looping music to another track.
#[derive(Debug)]
pub struct ChangeMusic {
    pub index: usize,
}

impl Message for ChangeMusic {}

/// Marks the entity playing the current music track
#[derive(Component, Debug)]
pub struct MusicChannel;

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundLibrary>()
            .add_message::<PlaySound>()
            .add_message::<ChangeMusic>()
            .add_systems(
                Startup,
                setup_sound_library.after(crate::content::load_game_content),
            )
            .add_systems(OnEnter(GameState::MainMenu), start_music)
            .add_systems(Update, (play_requested_sounds, change_music))
            .add_systems(
                Update,
                (play_movement_sounds, play_footsteps).run_if(gameplay_active),
            );
    }
}

/// Resolves the sound manifest into asset handles.
pub(crate) fn setup_sound_library(
    mut library: ResMut<SoundLibrary>,
    content: Res<GameContent>,
    asset_server: Res<AssetServer>,
) {
    for entry in &content.sounds.sounds {
        let handles: Vec<Handle<AudioSource>> = entry
            .clips
            .iter()
            .map(|path| asset_server.load(path.as_str()))
            .collect();
        library.clips.insert(entry.kind, handles);
    }
    library.music_tracks = content
        .sounds
        .music_tracks
        .iter()
        .map(|path| asset_server.load(path.as_str()))
        .collect();

    info!(
        "Sound library: {} kinds, {} music tracks",
        library.clips.len(),
        library.music_tracks.len()
    );
}

/// Starts the configured music track once. Re-entering the menu leaves a
/// running track alone.
pub(crate) fn start_music(
    mut commands: Commands,
    content: Res<GameContent>,
    library: Res<SoundLibrary>,
    channel_query: Query<(), With<MusicChannel>>,
) {
    if !channel_query.is_empty() {
        return;
    }
    if !content.sounds.play_music_on_start {
        return;
    }
    let Some(track) = library.music_tracks.first() else {
        debug!("No music tracks loaded, staying silent");
        return;
    };

    info!("Starting music");
    commands.spawn((
        MusicChannel,
        AudioPlayer::new(track.clone()),
        music_playback(content.sounds.music_loop),
    ));
}

pub(crate) fn change_music(
    mut commands: Commands,
    mut requests: MessageReader<ChangeMusic>,
    content: Res<GameContent>,
    library: Res<SoundLibrary>,
    channel_query: Query<Entity, With<MusicChannel>>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };
    let Some(track) = library.music_tracks.get(request.index) else {
        warn!("Music track {} does not exist", request.index);
        return;
    };

    for entity in channel_query.iter() {
        commands.entity(entity).despawn();
    }
    info!("Switching music to track {}", request.index);
    commands.spawn((
        MusicChannel,
        AudioPlayer::new(track.clone()),
        music_playback(content.sounds.music_loop),
    ));
}

/// Spawns a self-despawning audio entity per sound request.
pub(crate) fn play_requested_sounds(
    mut commands: Commands,
    mut requests: MessageReader<PlaySound>,
    library: Res<SoundLibrary>,
) {
    let mut rng = rand::rng();

    for request in requests.read() {
        let Some(clips) = library.clips.get(&request.kind) else {
            warn!("No clips registered for {:?}", request.kind);
            continue;
        };
        let Some(index) = pick_clip(clips.len(), request.index, &mut rng) else {
            warn!(
                "No playable clip for {:?} (requested index {:?}, {} available)",
                request.kind,
                request.index,
                clips.len()
            );
            continue;
        };
        commands.spawn((
            AudioPlayer::new(clips[index].clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}

pub(crate) fn play_movement_sounds(
    mut jumps: MessageReader<PlayerJumped>,
    mut landings: MessageReader<PlayerLanded>,
    mut sounds: MessageWriter<PlaySound>,
) {
    for _ in jumps.read() {
        sounds.write(PlaySound::any(SoundKind::Jump));
    }
    for _ in landings.read() {
        sounds.write(PlaySound::any(SoundKind::Land));
    }
}

/// Footsteps on a fixed interval while running on the ground. Clips cycle
/// in registration order so strides alternate instead of repeating one
/// sample back to back.
pub(crate) fn play_footsteps(
    time: Res<Time>,
    content: Res<GameContent>,
    library: Res<SoundLibrary>,
    player_query: Query<(&MovementState, &LinearVelocity), With<Player>>,
    mut sounds: MessageWriter<PlaySound>,
    mut elapsed: Local<f32>,
    mut stride: Local<usize>,
) {
    let Ok((state, velocity)) = player_query.single() else {
        return;
    };
    if !state.on_ground || velocity.x.abs() < FOOTSTEP_MIN_SPEED {
        *elapsed = 0.0;
        return;
    }

    *elapsed += time.delta_secs();
    if *elapsed >= content.config.footstep_interval {
        *elapsed = 0.0;
        let clips = library.clip_count(SoundKind::Footstep);
        if clips == 0 {
            return;
        }
        *stride = (*stride + 1) % clips;
        sounds.write(PlaySound::exact(SoundKind::Footstep, *stride));
    }
}

// ==== Decision helpers ======================================================

fn music_playback(looped: bool) -> PlaybackSettings {
    if looped {
        PlaybackSettings::LOOP
    } else {
        PlaybackSettings::DESPAWN
    }
}

/// Picks which clip to play. Explicit indices must be in range; random
/// choice only rolls when there is more than one clip.
pub(crate) fn pick_clip(
    available: usize,
    requested: Option<usize>,
    rng: &mut impl Rng,
) -> Option<usize> {
    match requested {
        Some(index) if index < available => Some(index),
        Some(_) => None,
        None if available == 0 => None,
        None if available == 1 => Some(0),
        None => Some(rng.random_range(0..available)),
    }
}
