//=========================================================================
// Arbiter
//
// Ready-made single-player driver around the hotkey core.
//
// Architecture:
// ```text
//     ArbiterBuilder  ──build()──>  Arbiter  ──tick(player)──>  TickControl
//         │                           │
//         ├─ with_config()            ├─ EventCollector (drain channel)
//         ├─ with_channel_capacity()  ├─ StateTracker   (edge detection)
//         └─ with_max_events_per_tick()└─ HotkeyPlayer  (arbitration)
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use crossbeam_channel::{bounded, Sender};
use log::info;

//=== Internal Dependencies ===============================================

use crate::core::hotkeys::HotkeyConfig;
use crate::core::input::StateTracker;
use crate::core::platform_bridge::{EventCollector, PlatformEvent, TickControl};
use crate::core::player::{HotkeyPlayer, PlayerControls};

//=== ArbiterBuilder ======================================================

/// Builder for configuring and constructing an [`Arbiter`].
///
/// # Default Values
///
/// - **Config**: [`HotkeyConfig::default()`]
/// - **Channel capacity**: 128 messages
/// - **Max events per tick**: 64 messages
///
/// # Examples
///
/// ```
/// use hotkey_arbiter::prelude::*;
///
/// let config = HotkeyConfig::builder()
///     .bind(4, "F")
///     .bind(5, "Mouse4")
///     .build()
///     .unwrap();
///
/// let arbiter = ArbiterBuilder::new()
///     .with_config(config)
///     .with_channel_capacity(256)
///     .build();
///
/// assert!(!arbiter.hotkeys().has_queued_action());
/// ```
#[derive(Debug)]
pub struct ArbiterBuilder {
    config: HotkeyConfig,
    channel_capacity: usize,
    max_events_per_tick: usize,
}

impl ArbiterBuilder {
    pub fn new() -> Self {
        Self {
            config: HotkeyConfig::default(),
            channel_capacity: 128,
            max_events_per_tick: 64,
        }
    }

    /// Replaces the stock binding table.
    pub fn with_config(mut self, config: HotkeyConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the capacity of the host → arbiter channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Caps how many channel messages one tick drains.
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn with_max_events_per_tick(mut self, max: usize) -> Self {
        assert!(max > 0, "Max events per tick must be positive");
        self.max_events_per_tick = max;
        self
    }

    pub fn build(self) -> Arbiter {
        info!(
            "Building arbiter ({} hotkeys, channel: {}, max events/tick: {})",
            self.config.len(),
            self.channel_capacity,
            self.max_events_per_tick
        );

        let (sender, receiver) = bounded(self.channel_capacity);

        Arbiter {
            collector: EventCollector::new(receiver, self.max_events_per_tick),
            sender,
            tracker: StateTracker::new(),
            hotkeys: HotkeyPlayer::new(Arc::new(self.config)),
        }
    }
}

impl Default for ArbiterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Arbiter =============================================================

/// Channel-fed hotkey driver for one player.
///
/// Host threads push [`PlatformEvent`]s through [`input_sender`](Self::input_sender);
/// the simulation thread calls [`tick`](Self::tick) once per tick.
pub struct Arbiter {
    collector: EventCollector,
    sender: Sender<PlatformEvent>,
    tracker: StateTracker,
    hotkeys: HotkeyPlayer,
}

impl Arbiter {
    /// A new sender for host input threads.
    pub fn input_sender(&self) -> Sender<PlatformEvent> {
        self.sender.clone()
    }

    /// Runs one tick: drain input, sample hotkeys, arbitrate on `player`.
    ///
    /// On `Exit` the player is left untouched.
    pub fn tick<P: PlayerControls + ?Sized>(&mut self, player: &mut P) -> TickControl {
        if self.collector.collect_tick() == TickControl::Exit {
            return TickControl::Exit;
        }

        self.tracker.clear();
        for event in self.collector.events() {
            match event {
                PlatformEvent::Inputs(batch) => self.tracker.process_events(batch),
                PlatformEvent::FocusLost => self.tracker.release_all(),
                PlatformEvent::Shutdown => {}
            }
        }

        self.hotkeys.process_triggers(&self.tracker);
        self.hotkeys.pre_item_check(player);

        TickControl::Continue
    }

    pub fn hotkeys(&self) -> &HotkeyPlayer {
        &self.hotkeys
    }

    /// `true` if the last tick left input messages in the channel.
    pub fn is_input_backlogged(&self) -> bool {
        self.collector.is_backlogged()
    }

    /// Input state as of the last tick.
    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    /// Clears arbitration state (respawn, world exit); held keys stay tracked.
    pub fn reset(&mut self) {
        self.hotkeys.reset();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::arbitration::UseAction;
    use crate::core::input::{InputEvent, KeyCode, MouseButton};
    use crate::core::inventory::ItemSnapshot;
    use crate::core::player::BasicPlayer;

    fn player() -> BasicPlayer {
        let mut items = vec![ItemSnapshot::EMPTY; 10];
        items[4] = ItemSnapshot::one_shot();
        items[5] = ItemSnapshot::auto_reuse();
        let mut player = BasicPlayer::new(items);
        player.selected_slot = 1;
        player
    }

    fn send(arbiter: &Arbiter, events: &[InputEvent]) {
        arbiter
            .input_sender()
            .send(PlatformEvent::Inputs(events.to_vec()))
            .unwrap();
    }

    //=====================================================================
    // ArbiterBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = ArbiterBuilder::new();
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.max_events_per_tick, 64);
        assert_eq!(builder.config.len(), 6);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        ArbiterBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Max events per tick must be positive")]
    fn builder_with_max_events_panics_on_zero() {
        ArbiterBuilder::new().with_max_events_per_tick(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let config = HotkeyConfig::builder().bind(2, "Mouse5").build().unwrap();
        let arbiter = ArbiterBuilder::new()
            .with_config(config)
            .with_channel_capacity(4)
            .with_max_events_per_tick(2)
            .build();

        assert_eq!(arbiter.hotkeys().engine().config().len(), 1);
    }

    //=====================================================================
    // Tick Tests
    //=====================================================================

    #[test]
    fn press_hold_release_cycle() {
        let mut arbiter = ArbiterBuilder::new().build();
        let mut player = player();

        // "V" is bound to slot 5 (auto-reuse)
        send(&arbiter, &[InputEvent::KeyDown(KeyCode::KeyV)]);
        assert_eq!(arbiter.tick(&mut player), TickControl::Continue);
        assert_eq!(player.selected_slot, 5);
        assert!(player.control_use_item);

        // No new events: key still held
        arbiter.tick(&mut player);
        assert_eq!(player.selected_slot, 5);
        assert_eq!(arbiter.hotkeys().last_outcome().use_item, UseAction::Assert);

        send(&arbiter, &[InputEvent::KeyUp(KeyCode::KeyV)]);
        arbiter.tick(&mut player);
        arbiter.tick(&mut player);

        assert_eq!(player.selected_slot, 1);
        assert!(!arbiter.hotkeys().has_original_selection());
    }

    #[test]
    fn mouse_hotkeys_are_tracked() {
        let config = HotkeyConfig::builder().bind(4, "Mouse4").build().unwrap();
        let mut arbiter = ArbiterBuilder::new().with_config(config).build();
        let mut player = player();

        send(&arbiter, &[InputEvent::MouseButtonDown(MouseButton::Back)]);
        arbiter.tick(&mut player);

        assert_eq!(player.selected_slot, 4);
        assert!(arbiter.tracker().is_down(MouseButton::Back.into()));
    }

    #[test]
    fn focus_loss_releases_held_hotkeys() {
        let mut arbiter = ArbiterBuilder::new().build();
        let mut player = player();

        send(&arbiter, &[InputEvent::KeyDown(KeyCode::KeyV)]);
        arbiter.tick(&mut player);
        assert!(arbiter.hotkeys().has_queued_action());

        arbiter.input_sender().send(PlatformEvent::FocusLost).unwrap();
        arbiter.tick(&mut player);
        arbiter.tick(&mut player);

        assert!(!arbiter.hotkeys().has_queued_action());
        assert_eq!(player.selected_slot, 1);
    }

    #[test]
    fn backlog_carries_over_to_next_tick() {
        let mut arbiter = ArbiterBuilder::new().with_max_events_per_tick(1).build();
        let mut player = player();

        send(&arbiter, &[InputEvent::KeyDown(KeyCode::KeyC)]);
        send(&arbiter, &[InputEvent::KeyDown(KeyCode::KeyV)]);

        arbiter.tick(&mut player);
        assert!(arbiter.is_input_backlogged());
        assert_eq!(player.selected_slot, 1);

        arbiter.tick(&mut player);
        assert!(!arbiter.is_input_backlogged());
        assert_eq!(player.selected_slot, 5);
    }

    #[test]
    fn shutdown_exits_without_touching_player() {
        let mut arbiter = ArbiterBuilder::new().build();
        let mut player = player();

        send(&arbiter, &[InputEvent::KeyDown(KeyCode::KeyF)]);
        arbiter.input_sender().send(PlatformEvent::Shutdown).unwrap();

        assert_eq!(arbiter.tick(&mut player), TickControl::Exit);
        assert_eq!(player.selected_slot, 1);
    }
}
