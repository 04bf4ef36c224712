//! Four-phase weapon cycle: AIM → FIRE → RECOIL → RELOAD → AIM.
//!
//! * Only AIM reacts to the trigger; everywhere else it is ignored.
//! * FIRE holds until the cooldown has elapsed since the shot.
//! * RECOIL and RELOAD last exactly one tick each.

use std::time::Duration;

use super::audio::Sound;

/// Time between the shot and the recoil frame in the reference setup.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeaponState {
    #[default]
    Aim,
    Fire,
    Recoil,
    Reload,
}

impl WeaponState {
    pub const ALL: [WeaponState; 4] = [
        WeaponState::Aim,
        WeaponState::Fire,
        WeaponState::Recoil,
        WeaponState::Reload,
    ];

    /// Successor in the cycle.
    #[inline]
    pub fn next(self) -> Self {
        match self {
            WeaponState::Aim => WeaponState::Fire,
            WeaponState::Fire => WeaponState::Recoil,
            WeaponState::Recoil => WeaponState::Reload,
            WeaponState::Reload => WeaponState::Aim,
        }
    }

    /// Texture-bank name of the sprite shown in this pose.
    pub fn sprite_name(self) -> &'static str {
        match self {
            WeaponState::Aim => "WEAPON_AIM",
            WeaponState::Fire => "WEAPON_FIRE",
            WeaponState::Recoil => "WEAPON_RECOIL",
            WeaponState::Reload => "WEAPON_RELOAD",
        }
    }
}

/// Weapon pose plus the timestamp of the last shot.
///
/// Times are monotonic offsets from an arbitrary origin owned by the
/// caller (usually program start).
#[derive(Clone, Debug)]
pub struct WeaponStateMachine {
    state: WeaponState,
    last_fire: Duration,
    cooldown: Duration,
}

impl Default for WeaponStateMachine {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

impl WeaponStateMachine {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            state: WeaponState::Aim,
            last_fire: Duration::ZERO,
            cooldown,
        }
    }

    #[inline]
    pub fn current_pose(&self) -> WeaponState {
        self.state
    }

    #[inline]
    pub fn last_fire(&self) -> Duration {
        self.last_fire
    }

    #[inline]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Trigger edge.  Returns the sound to play when the shot is taken,
    /// `None` when the trigger was ignored.
    pub fn fire_triggered(&mut self, now: Duration) -> Option<Sound> {
        if self.state != WeaponState::Aim {
            return None;
        }
        self.state = WeaponState::Fire;
        self.last_fire = now;
        tracing::debug!(at_ms = now.as_millis() as u64, "weapon fired");
        Some(Sound::Shotgun)
    }

    /// Time-driven advance, called once per frame.
    pub fn tick(&mut self, now: Duration) {
        let next = match self.state {
            WeaponState::Aim => return,
            WeaponState::Fire => {
                if now.saturating_sub(self.last_fire) < self.cooldown {
                    return;
                }
                self.state.next()
            }
            WeaponState::Recoil | WeaponState::Reload => self.state.next(),
        };
        tracing::trace!(from = ?self.state, to = ?next, "weapon state");
        self.state = next;
    }
}
