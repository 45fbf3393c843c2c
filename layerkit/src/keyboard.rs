use layerkit_types::action::Action;
use layerkit_types::layer::Layer;

use crate::channel::KEY_EVENT_CHANNEL;
use crate::config::PersonalityConfig;
use crate::event::KeyboardEvent;
use crate::hid::HidHost;
use crate::layer_state::LayerState;
use crate::personality::PersonalityState;

/// A long running task
pub trait Runnable {
    async fn run(&mut self);
}

impl<H: HidHost> Runnable for Keyboard<H> {
    /// Main keyboard processing task, it receives key events from `KEY_EVENT_CHANNEL` and
    /// processes them one by one.
    async fn run(&mut self) {
        loop {
            let event = KEY_EVENT_CHANNEL.receive().await;
            self.process(event);
        }
    }
}

pub struct Keyboard<H: HidHost> {
    /// Active layers
    pub(crate) layers: LayerState,
    /// Lock flag, layer-tap modifiers and the escape/grave selector
    pub(crate) personality: PersonalityState,
    /// Personality tables
    pub(crate) config: PersonalityConfig,
    /// Where keys go
    pub(crate) host: H,
}

impl<H: HidHost> Keyboard<H> {
    pub fn new(config: PersonalityConfig, host: H) -> Self {
        Self {
            layers: LayerState::new(),
            personality: PersonalityState::new(),
            config,
            host,
        }
    }

    pub fn layers(&self) -> &LayerState {
        &self.layers
    }

    pub fn personality(&self) -> &PersonalityState {
        &self.personality
    }

    pub fn config(&self) -> &PersonalityConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Process a single key transition to completion.
    ///
    /// Custom keys go to the personality dispatcher first. Anything it doesn't consume gets
    /// the built-in handling. If the event changed the active layers, the new set goes
    /// through the reducer once before it's committed.
    pub fn process(&mut self, event: KeyboardEvent) {
        debug!("Processing key event: {:?}", event);
        let consumed = match event.action {
            Action::Custom(key) => {
                self.personality
                    .dispatch(&self.config, &mut self.layers, key, event.pressed, &mut self.host)
            }
            _ => false,
        };

        if !consumed {
            self.process_action(event.action, event.pressed);
        }

        if self.layers.is_dirty() {
            self.layers.commit(&mut self.personality, &self.config, &mut self.host);
        }
    }

    fn process_action(&mut self, action: Action, pressed: bool) {
        match action {
            Action::No | Action::Custom(_) => (),
            Action::Key(key) => {
                if pressed {
                    self.host.register_key(key);
                } else {
                    self.host.unregister_key(key);
                }
            }
            Action::Momentary(layer) => self.process_action_layer_switch(layer, pressed),
            Action::Toggle(layer) => {
                // Toggle a layer when the key is released
                if !pressed {
                    self.layers.toggle(layer);
                }
            }
            Action::To(layer) => {
                // Activate a layer and deactivate all other layers(except the base layer)
                if pressed {
                    self.layers.move_to(layer);
                }
            }
            Action::Reset => {
                if pressed {
                    warn!("Jumping to bootloader");
                    self.host.jump_to_bootloader();
                }
            }
        }
    }

    fn process_action_layer_switch(&mut self, layer: Layer, pressed: bool) {
        // Change layer state only when the key's state is changed
        if pressed {
            self.layers.activate(layer);
        } else {
            self.layers.deactivate(layer);
        }
    }
}
