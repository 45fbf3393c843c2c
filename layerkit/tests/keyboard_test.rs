mod common;

use layerkit::types::action::Action;
use layerkit::types::keycode::{CustomKey, HidKeyCode};
use layerkit::types::layer::{Layer, LayerMask};

use crate::common::*;

#[test]
fn test_key_press_and_release() {
    let mut keyboard = create_test_keyboard();
    press(&mut keyboard, Action::Key(HidKeyCode::A));
    release(&mut keyboard, Action::Key(HidKeyCode::A));
    assert_eq!(keyboard.host_mut().take(), vec![Down(HidKeyCode::A), Up(HidKeyCode::A)]);
    assert_eq!(keyboard.layers().current(), LayerMask::BASE);
}

#[test]
fn test_no_action() {
    let mut keyboard = create_test_keyboard();
    tap(&mut keyboard, Action::No);
    assert!(keyboard.host_mut().take().is_empty());
    assert_eq!(keyboard.layers().current(), LayerMask::BASE);
}

#[test]
fn test_momentary_layer() {
    let mut keyboard = create_test_keyboard();
    let arrows = Action::Momentary(Layer::Arrows);

    press(&mut keyboard, arrows);
    assert_eq!(keyboard.layers().top(), Layer::Arrows);
    assert_eq!(keyboard.layers().current(), mask(&[Layer::Base, Layer::Middle, Layer::Arrows]));

    release(&mut keyboard, arrows);
    assert_eq!(keyboard.layers().current(), LayerMask::BASE);
}

#[test]
fn test_stacked_momentary_layers() {
    let mut keyboard = create_test_keyboard();
    let numpad = Action::Momentary(Layer::Numpad);
    let digits = Action::Momentary(Layer::NumpadDigits);

    press(&mut keyboard, numpad);
    press(&mut keyboard, digits);
    assert_eq!(keyboard.layers().top(), Layer::NumpadDigits);

    release(&mut keyboard, numpad);
    assert_eq!(
        keyboard.layers().current(),
        mask(&[Layer::Base, Layer::Middle, Layer::NumpadDigits])
    );
    release(&mut keyboard, digits);
    assert_eq!(keyboard.layers().current(), LayerMask::BASE);
}

#[test]
fn test_toggle_acts_on_release() {
    let mut keyboard = create_test_keyboard();
    let safe = Action::Toggle(Layer::SafeBase);

    press(&mut keyboard, safe);
    assert_eq!(keyboard.layers().current(), LayerMask::BASE);
    release(&mut keyboard, safe);
    assert_eq!(keyboard.layers().current(), mask(&[Layer::Base, Layer::Middle, Layer::SafeBase]));

    tap(&mut keyboard, safe);
    assert_eq!(keyboard.layers().current(), LayerMask::BASE);
}

#[test]
fn test_to_replaces_other_layers() {
    let mut keyboard = create_test_keyboard();
    tap(&mut keyboard, Action::Toggle(Layer::Numpad));
    tap(&mut keyboard, Action::Toggle(Layer::Function));

    press(&mut keyboard, Action::To(Layer::Game));
    assert_eq!(keyboard.layers().current(), mask(&[Layer::Base, Layer::Middle, Layer::Game]));
    release(&mut keyboard, Action::To(Layer::Game));
    assert_eq!(keyboard.layers().current(), mask(&[Layer::Base, Layer::Middle, Layer::Game]));

    tap(&mut keyboard, Action::To(Layer::Base));
    assert_eq!(keyboard.layers().current(), LayerMask::BASE);
}

#[test]
fn test_to_mouse_taps_entry_key() {
    let mut keyboard = create_test_keyboard();
    tap(&mut keyboard, Action::To(Layer::Mouse));
    assert_eq!(
        keyboard.host_mut().take(),
        vec![Down(HidKeyCode::MouseAccel2), Up(HidKeyCode::MouseAccel2)]
    );

    // Staying on the mouse layer doesn't tap again
    tap(&mut keyboard, Action::Key(HidKeyCode::MouseBtn1));
    assert_eq!(
        keyboard.host_mut().take(),
        vec![Down(HidKeyCode::MouseBtn1), Up(HidKeyCode::MouseBtn1)]
    );

    // Coming back from a deeper layer does
    tap(&mut keyboard, Action::Toggle(Layer::Function));
    tap(&mut keyboard, Action::Toggle(Layer::Function));
    assert_eq!(
        keyboard.host_mut().take(),
        vec![Down(HidKeyCode::MouseAccel2), Up(HidKeyCode::MouseAccel2)]
    );
}

#[test]
fn test_reset_on_press() {
    let mut keyboard = create_test_keyboard();
    press(&mut keyboard, Action::Reset);
    assert_eq!(keyboard.host_mut().take(), vec![Bootloader]);
    release(&mut keyboard, Action::Reset);
    assert!(keyboard.host_mut().take().is_empty());
}

#[test]
fn test_base_survives_deactivation() {
    let mut keyboard = create_test_keyboard();
    tap(&mut keyboard, Action::Momentary(Layer::Base));
    tap(&mut keyboard, Action::Toggle(Layer::Base));
    assert_eq!(keyboard.layers().current(), LayerMask::BASE);
}

#[test]
fn test_layer_change_from_dispatcher_and_builtin_in_one_stream() {
    let mut keyboard = create_test_keyboard();
    let mouse = Action::Momentary(Layer::Mouse);

    press(&mut keyboard, mouse);
    press(&mut keyboard, custom(CustomKey::TapCtrl));
    release(&mut keyboard, mouse);
    release(&mut keyboard, custom(CustomKey::TapCtrl));

    assert_eq!(
        keyboard.host_mut().take(),
        vec![
            Down(HidKeyCode::MouseAccel2),
            Up(HidKeyCode::MouseAccel2),
            Down(HidKeyCode::LCtrl),
            // Reaching base releases ctrl on its own
            Up(HidKeyCode::LCtrl),
            // The late release goes out as well
            Up(HidKeyCode::LCtrl),
        ]
    );
    assert!(keyboard.personality().tap_mods().is_empty());
}
