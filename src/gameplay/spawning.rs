use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::components::{Bullet, Enemy, Player, SpriteExtent};
use crate::core::config::{EnemyConfig, GameConfig};
use crate::core::geometry::{heading_angle, random_between, GameArea, SceneSize};
use crate::core::system::system_order::SpawnSet;
use crate::gameplay::actions::{ActionSequence, SceneCue, SpriteAction};
use crate::rendering::sprites::{sprite_or_placeholder, GameAssets, BULLET_COLOR, ENEMY_COLOR};

/// Request one bullet from the player's current position.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireBullet;

#[derive(Resource, Deref, DerefMut)]
pub struct SpawnRng(pub StdRng);

impl SpawnRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnCounters {
    pub bullets_fired: u64,
    pub enemies_spawned: u64,
}

/// Straight-line path of one enemy plus the rotation that faces along it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyFlight {
    pub start: Vec2,
    pub end: Vec2,
    pub rotation: f32,
}

/// Pick random entry/exit x positions inside the game area. Entry is above the top
/// edge and exit below the bottom edge, per `EnemyConfig` fractions.
pub fn plan_enemy_flight<R: Rng + ?Sized>(
    rng: &mut R,
    area: &GameArea,
    scene: &SceneSize,
    cfg: &EnemyConfig,
) -> EnemyFlight {
    let start_x = random_between(rng, area.min_x(), area.max_x());
    let end_x = random_between(rng, area.min_x(), area.max_x());
    let start = Vec2::new(start_x, scene.height() * cfg.start_y_fraction);
    let end = Vec2::new(end_x, scene.height() * cfg.end_y_fraction);
    EnemyFlight {
        start,
        end,
        rotation: heading_angle(start, end),
    }
}

pub struct SpawningPlugin;

impl Plugin for SpawningPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<FireBullet>()
            .init_resource::<SpawnCounters>()
            .add_systems(PreStartup, init_spawn_rng)
            .add_systems(Update, (fire_bullets, spawn_enemies).in_set(SpawnSet));
    }
}

fn init_spawn_rng(mut commands: Commands, cfg: Res<GameConfig>) {
    if let Some(seed) = cfg.rng_seed {
        info!(seed, "enemy spawn rng seeded");
    }
    commands.insert_resource(SpawnRng::new(cfg.rng_seed));
}

pub fn fire_bullets(
    mut commands: Commands,
    mut events: EventReader<FireBullet>,
    cfg: Res<GameConfig>,
    scene: Res<SceneSize>,
    assets: Res<GameAssets>,
    q_player: Query<&Transform, With<Player>>,
    mut counters: ResMut<SpawnCounters>,
) {
    let Ok(player_tf) = q_player.single() else {
        events.clear();
        return;
    };
    let size = cfg.bullet.size.as_vec2() * cfg.bullet.scale;
    for _ in events.read() {
        let mut steps = Vec::with_capacity(3);
        if let Some(sound) = &assets.bullet_sound {
            steps.push(SpriteAction::PlaySound(sound.clone()));
        }
        // Fully off the top before removal.
        steps.push(SpriteAction::MoveToY {
            y: scene.height() + size.y,
            duration: cfg.bullet.travel_duration,
        });
        steps.push(SpriteAction::Remove);

        let start = player_tf.translation.truncate();
        commands.spawn((
            Name::new("Bullet"),
            Bullet,
            SpriteExtent(size),
            sprite_or_placeholder(&assets.bullet, BULLET_COLOR, size),
            Transform::from_translation(start.extend(cfg.bullet.z)),
            ActionSequence::sequence(steps),
        ));
        counters.bullets_fired += 1;
        debug!(x = start.x, y = start.y, "bullet fired");
    }
}

#[allow(clippy::too_many_arguments)]
pub fn spawn_enemies(
    mut commands: Commands,
    mut cues: EventReader<SceneCue>,
    cfg: Res<GameConfig>,
    scene: Res<SceneSize>,
    area: Res<GameArea>,
    assets: Res<GameAssets>,
    mut rng: ResMut<SpawnRng>,
    mut counters: ResMut<SpawnCounters>,
) {
    let size = cfg.enemy.size.as_vec2() * cfg.enemy.scale;
    for cue in cues.read() {
        match cue {
            SceneCue::SpawnEnemy => {
                let flight = plan_enemy_flight(&mut rng.0, &area, &scene, &cfg.enemy);
                commands.spawn((
                    Name::new("Enemy"),
                    Enemy,
                    SpriteExtent(size),
                    sprite_or_placeholder(&assets.enemy, ENEMY_COLOR, size),
                    Transform::from_translation(flight.start.extend(cfg.enemy.z))
                        .with_rotation(Quat::from_rotation_z(flight.rotation)),
                    ActionSequence::sequence(vec![
                        SpriteAction::MoveTo {
                            target: flight.end,
                            duration: cfg.enemy.travel_duration,
                        },
                        SpriteAction::Remove,
                    ]),
                ));
                counters.enemies_spawned += 1;
                debug!(
                    from_x = flight.start.x,
                    to_x = flight.end.x,
                    rotation = flight.rotation,
                    "enemy spawned"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_enters_above_and_exits_below() {
        let scene = SceneSize(Vec2::new(1536.0, 2048.0));
        let area = GameArea::from_scene(scene.0, 16.0 / 9.0);
        let cfg = EnemyConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let f = plan_enemy_flight(&mut rng, &area, &scene, &cfg);
            assert!(f.start.x >= area.min_x() && f.start.x <= area.max_x());
            assert!(f.end.x >= area.min_x() && f.end.x <= area.max_x());
            assert!((f.start.y - 2048.0 * 1.2).abs() < 1e-3);
            assert!((f.end.y + 2048.0 * 0.2).abs() < 1e-3);
            // Always heading downward.
            assert!(f.rotation < 0.0, "{}", f.rotation);
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let scene = SceneSize(Vec2::new(800.0, 600.0));
        let area = GameArea(Rect::new(100.0, 0.0, 700.0, 600.0));
        let cfg = EnemyConfig::default();
        let mut a = SpawnRng::new(Some(9));
        let mut b = SpawnRng::new(Some(9));
        for _ in 0..10 {
            assert_eq!(
                plan_enemy_flight(&mut a.0, &area, &scene, &cfg),
                plan_enemy_flight(&mut b.0, &area, &scene, &cfg)
            );
        }
    }
}
