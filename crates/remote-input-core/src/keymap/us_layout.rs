//! US keyboard layout.
//!
//! Every entry maps a symbolic key name to the description a US QWERTY
//! keyboard reports for it.  Three kinds of names live in the same table:
//!
//! - hardware codes (`"KeyA"`, `"Digit1"`, `"ShiftLeft"`), which carry shifted
//!   variants;
//! - key labels (`"Shift"`, `"Enter"`, `"Clear"`), which resolve to the
//!   left-hand or standard physical key;
//! - literal characters (`"a"`, `"A"`, `"!"`, `" "`), so that a typed
//!   character can be pressed directly.
//!
//! Location 1/2 are left/right modifier keys, 3 is the numeric keypad and 4 is
//! a mobile device key.

use super::KeyDefinition;

const EMPTY: KeyDefinition = KeyDefinition::EMPTY;

/// The complete US layout as `(name, definition)` pairs.
pub const US_KEYBOARD: &[(&str, KeyDefinition)] = &[
    // ── Digit row characters ──────────────────────────────────────────────────
    ("0", KeyDefinition { key_code: Some(48), key: Some("0"), code: Some("Digit0"), ..EMPTY }),
    ("1", KeyDefinition { key_code: Some(49), key: Some("1"), code: Some("Digit1"), ..EMPTY }),
    ("2", KeyDefinition { key_code: Some(50), key: Some("2"), code: Some("Digit2"), ..EMPTY }),
    ("3", KeyDefinition { key_code: Some(51), key: Some("3"), code: Some("Digit3"), ..EMPTY }),
    ("4", KeyDefinition { key_code: Some(52), key: Some("4"), code: Some("Digit4"), ..EMPTY }),
    ("5", KeyDefinition { key_code: Some(53), key: Some("5"), code: Some("Digit5"), ..EMPTY }),
    ("6", KeyDefinition { key_code: Some(54), key: Some("6"), code: Some("Digit6"), ..EMPTY }),
    ("7", KeyDefinition { key_code: Some(55), key: Some("7"), code: Some("Digit7"), ..EMPTY }),
    ("8", KeyDefinition { key_code: Some(56), key: Some("8"), code: Some("Digit8"), ..EMPTY }),
    ("9", KeyDefinition { key_code: Some(57), key: Some("9"), code: Some("Digit9"), ..EMPTY }),

    // ── Control and editing keys ──────────────────────────────────────────────
    ("Power", KeyDefinition { key: Some("Power"), code: Some("Power"), ..EMPTY }),
    ("Eject", KeyDefinition { key: Some("Eject"), code: Some("Eject"), ..EMPTY }),
    ("Abort", KeyDefinition { key_code: Some(3), key: Some("Cancel"), code: Some("Abort"), ..EMPTY }),
    ("Help", KeyDefinition { key_code: Some(6), key: Some("Help"), code: Some("Help"), ..EMPTY }),
    ("Backspace", KeyDefinition { key_code: Some(8), key: Some("Backspace"), code: Some("Backspace"), ..EMPTY }),
    ("Tab", KeyDefinition { key_code: Some(9), key: Some("Tab"), code: Some("Tab"), ..EMPTY }),
    ("Numpad5", KeyDefinition { key_code: Some(12), shift_key_code: Some(101), key: Some("Clear"), shift_key: Some("5"), code: Some("Numpad5"), location: Some(3), ..EMPTY }),
    ("NumpadEnter", KeyDefinition { key_code: Some(13), key: Some("Enter"), code: Some("NumpadEnter"), text: Some("\r"), location: Some(3), ..EMPTY }),
    ("Enter", KeyDefinition { key_code: Some(13), key: Some("Enter"), code: Some("Enter"), text: Some("\r"), ..EMPTY }),
    ("\r", KeyDefinition { key_code: Some(13), key: Some("Enter"), code: Some("Enter"), text: Some("\r"), ..EMPTY }),
    ("\n", KeyDefinition { key_code: Some(13), key: Some("Enter"), code: Some("Enter"), text: Some("\r"), ..EMPTY }),

    // ── Modifiers ─────────────────────────────────────────────────────────────
    ("ShiftLeft", KeyDefinition { key_code: Some(16), key: Some("Shift"), code: Some("ShiftLeft"), location: Some(1), ..EMPTY }),
    ("ShiftRight", KeyDefinition { key_code: Some(16), key: Some("Shift"), code: Some("ShiftRight"), location: Some(2), ..EMPTY }),
    ("ControlLeft", KeyDefinition { key_code: Some(17), key: Some("Control"), code: Some("ControlLeft"), location: Some(1), ..EMPTY }),
    ("ControlRight", KeyDefinition { key_code: Some(17), key: Some("Control"), code: Some("ControlRight"), location: Some(2), ..EMPTY }),
    ("AltLeft", KeyDefinition { key_code: Some(18), key: Some("Alt"), code: Some("AltLeft"), location: Some(1), ..EMPTY }),
    ("AltRight", KeyDefinition { key_code: Some(18), key: Some("Alt"), code: Some("AltRight"), location: Some(2), ..EMPTY }),

    // ── Navigation and numpad navigation aliases ──────────────────────────────
    ("Pause", KeyDefinition { key_code: Some(19), key: Some("Pause"), code: Some("Pause"), ..EMPTY }),
    ("CapsLock", KeyDefinition { key_code: Some(20), key: Some("CapsLock"), code: Some("CapsLock"), ..EMPTY }),
    ("Escape", KeyDefinition { key_code: Some(27), key: Some("Escape"), code: Some("Escape"), ..EMPTY }),
    ("Convert", KeyDefinition { key_code: Some(28), key: Some("Convert"), code: Some("Convert"), ..EMPTY }),
    ("NonConvert", KeyDefinition { key_code: Some(29), key: Some("NonConvert"), code: Some("NonConvert"), ..EMPTY }),
    ("Space", KeyDefinition { key_code: Some(32), key: Some(" "), code: Some("Space"), ..EMPTY }),
    ("Numpad9", KeyDefinition { key_code: Some(33), shift_key_code: Some(105), key: Some("PageUp"), shift_key: Some("9"), code: Some("Numpad9"), location: Some(3), ..EMPTY }),
    ("PageUp", KeyDefinition { key_code: Some(33), key: Some("PageUp"), code: Some("PageUp"), ..EMPTY }),
    ("Numpad3", KeyDefinition { key_code: Some(34), shift_key_code: Some(99), key: Some("PageDown"), shift_key: Some("3"), code: Some("Numpad3"), location: Some(3), ..EMPTY }),
    ("PageDown", KeyDefinition { key_code: Some(34), key: Some("PageDown"), code: Some("PageDown"), ..EMPTY }),
    ("End", KeyDefinition { key_code: Some(35), key: Some("End"), code: Some("End"), ..EMPTY }),
    ("Numpad1", KeyDefinition { key_code: Some(35), shift_key_code: Some(97), key: Some("End"), shift_key: Some("1"), code: Some("Numpad1"), location: Some(3), ..EMPTY }),
    ("Home", KeyDefinition { key_code: Some(36), key: Some("Home"), code: Some("Home"), ..EMPTY }),
    ("Numpad7", KeyDefinition { key_code: Some(36), shift_key_code: Some(103), key: Some("Home"), shift_key: Some("7"), code: Some("Numpad7"), location: Some(3), ..EMPTY }),
    ("ArrowLeft", KeyDefinition { key_code: Some(37), key: Some("ArrowLeft"), code: Some("ArrowLeft"), ..EMPTY }),
    ("Numpad4", KeyDefinition { key_code: Some(37), shift_key_code: Some(100), key: Some("ArrowLeft"), shift_key: Some("4"), code: Some("Numpad4"), location: Some(3), ..EMPTY }),
    ("Numpad8", KeyDefinition { key_code: Some(38), shift_key_code: Some(104), key: Some("ArrowUp"), shift_key: Some("8"), code: Some("Numpad8"), location: Some(3), ..EMPTY }),
    ("ArrowUp", KeyDefinition { key_code: Some(38), key: Some("ArrowUp"), code: Some("ArrowUp"), ..EMPTY }),
    ("ArrowRight", KeyDefinition { key_code: Some(39), key: Some("ArrowRight"), code: Some("ArrowRight"), ..EMPTY }),
    ("Numpad6", KeyDefinition { key_code: Some(39), shift_key_code: Some(102), key: Some("ArrowRight"), shift_key: Some("6"), code: Some("Numpad6"), location: Some(3), ..EMPTY }),
    ("Numpad2", KeyDefinition { key_code: Some(40), shift_key_code: Some(98), key: Some("ArrowDown"), shift_key: Some("2"), code: Some("Numpad2"), location: Some(3), ..EMPTY }),
    ("ArrowDown", KeyDefinition { key_code: Some(40), key: Some("ArrowDown"), code: Some("ArrowDown"), ..EMPTY }),
    ("Select", KeyDefinition { key_code: Some(41), key: Some("Select"), code: Some("Select"), ..EMPTY }),
    ("Open", KeyDefinition { key_code: Some(43), key: Some("Execute"), code: Some("Open"), ..EMPTY }),
    ("PrintScreen", KeyDefinition { key_code: Some(44), key: Some("PrintScreen"), code: Some("PrintScreen"), ..EMPTY }),
    ("Insert", KeyDefinition { key_code: Some(45), key: Some("Insert"), code: Some("Insert"), ..EMPTY }),
    ("Numpad0", KeyDefinition { key_code: Some(45), shift_key_code: Some(96), key: Some("Insert"), shift_key: Some("0"), code: Some("Numpad0"), location: Some(3), ..EMPTY }),
    ("Delete", KeyDefinition { key_code: Some(46), key: Some("Delete"), code: Some("Delete"), ..EMPTY }),
    ("NumpadDecimal", KeyDefinition { key_code: Some(46), shift_key_code: Some(110), key: Some("\0"), shift_key: Some("."), code: Some("NumpadDecimal"), location: Some(3), ..EMPTY }),

    // ── Digit row (hardware codes) ────────────────────────────────────────────
    ("Digit0", KeyDefinition { key_code: Some(48), key: Some("0"), shift_key: Some(")"), code: Some("Digit0"), ..EMPTY }),
    ("Digit1", KeyDefinition { key_code: Some(49), key: Some("1"), shift_key: Some("!"), code: Some("Digit1"), ..EMPTY }),
    ("Digit2", KeyDefinition { key_code: Some(50), key: Some("2"), shift_key: Some("@"), code: Some("Digit2"), ..EMPTY }),
    ("Digit3", KeyDefinition { key_code: Some(51), key: Some("3"), shift_key: Some("#"), code: Some("Digit3"), ..EMPTY }),
    ("Digit4", KeyDefinition { key_code: Some(52), key: Some("4"), shift_key: Some("$"), code: Some("Digit4"), ..EMPTY }),
    ("Digit5", KeyDefinition { key_code: Some(53), key: Some("5"), shift_key: Some("%"), code: Some("Digit5"), ..EMPTY }),
    ("Digit6", KeyDefinition { key_code: Some(54), key: Some("6"), shift_key: Some("^"), code: Some("Digit6"), ..EMPTY }),
    ("Digit7", KeyDefinition { key_code: Some(55), key: Some("7"), shift_key: Some("&"), code: Some("Digit7"), ..EMPTY }),
    ("Digit8", KeyDefinition { key_code: Some(56), key: Some("8"), shift_key: Some("*"), code: Some("Digit8"), ..EMPTY }),
    ("Digit9", KeyDefinition { key_code: Some(57), key: Some("9"), shift_key: Some("("), code: Some("Digit9"), ..EMPTY }),

    // ── Letters (hardware codes) ──────────────────────────────────────────────
    ("KeyA", KeyDefinition { key_code: Some(65), key: Some("a"), shift_key: Some("A"), code: Some("KeyA"), ..EMPTY }),
    ("KeyB", KeyDefinition { key_code: Some(66), key: Some("b"), shift_key: Some("B"), code: Some("KeyB"), ..EMPTY }),
    ("KeyC", KeyDefinition { key_code: Some(67), key: Some("c"), shift_key: Some("C"), code: Some("KeyC"), ..EMPTY }),
    ("KeyD", KeyDefinition { key_code: Some(68), key: Some("d"), shift_key: Some("D"), code: Some("KeyD"), ..EMPTY }),
    ("KeyE", KeyDefinition { key_code: Some(69), key: Some("e"), shift_key: Some("E"), code: Some("KeyE"), ..EMPTY }),
    ("KeyF", KeyDefinition { key_code: Some(70), key: Some("f"), shift_key: Some("F"), code: Some("KeyF"), ..EMPTY }),
    ("KeyG", KeyDefinition { key_code: Some(71), key: Some("g"), shift_key: Some("G"), code: Some("KeyG"), ..EMPTY }),
    ("KeyH", KeyDefinition { key_code: Some(72), key: Some("h"), shift_key: Some("H"), code: Some("KeyH"), ..EMPTY }),
    ("KeyI", KeyDefinition { key_code: Some(73), key: Some("i"), shift_key: Some("I"), code: Some("KeyI"), ..EMPTY }),
    ("KeyJ", KeyDefinition { key_code: Some(74), key: Some("j"), shift_key: Some("J"), code: Some("KeyJ"), ..EMPTY }),
    ("KeyK", KeyDefinition { key_code: Some(75), key: Some("k"), shift_key: Some("K"), code: Some("KeyK"), ..EMPTY }),
    ("KeyL", KeyDefinition { key_code: Some(76), key: Some("l"), shift_key: Some("L"), code: Some("KeyL"), ..EMPTY }),
    ("KeyM", KeyDefinition { key_code: Some(77), key: Some("m"), shift_key: Some("M"), code: Some("KeyM"), ..EMPTY }),
    ("KeyN", KeyDefinition { key_code: Some(78), key: Some("n"), shift_key: Some("N"), code: Some("KeyN"), ..EMPTY }),
    ("KeyO", KeyDefinition { key_code: Some(79), key: Some("o"), shift_key: Some("O"), code: Some("KeyO"), ..EMPTY }),
    ("KeyP", KeyDefinition { key_code: Some(80), key: Some("p"), shift_key: Some("P"), code: Some("KeyP"), ..EMPTY }),
    ("KeyQ", KeyDefinition { key_code: Some(81), key: Some("q"), shift_key: Some("Q"), code: Some("KeyQ"), ..EMPTY }),
    ("KeyR", KeyDefinition { key_code: Some(82), key: Some("r"), shift_key: Some("R"), code: Some("KeyR"), ..EMPTY }),
    ("KeyS", KeyDefinition { key_code: Some(83), key: Some("s"), shift_key: Some("S"), code: Some("KeyS"), ..EMPTY }),
    ("KeyT", KeyDefinition { key_code: Some(84), key: Some("t"), shift_key: Some("T"), code: Some("KeyT"), ..EMPTY }),
    ("KeyU", KeyDefinition { key_code: Some(85), key: Some("u"), shift_key: Some("U"), code: Some("KeyU"), ..EMPTY }),
    ("KeyV", KeyDefinition { key_code: Some(86), key: Some("v"), shift_key: Some("V"), code: Some("KeyV"), ..EMPTY }),
    ("KeyW", KeyDefinition { key_code: Some(87), key: Some("w"), shift_key: Some("W"), code: Some("KeyW"), ..EMPTY }),
    ("KeyX", KeyDefinition { key_code: Some(88), key: Some("x"), shift_key: Some("X"), code: Some("KeyX"), ..EMPTY }),
    ("KeyY", KeyDefinition { key_code: Some(89), key: Some("y"), shift_key: Some("Y"), code: Some("KeyY"), ..EMPTY }),
    ("KeyZ", KeyDefinition { key_code: Some(90), key: Some("z"), shift_key: Some("Z"), code: Some("KeyZ"), ..EMPTY }),

    // ── Meta and numpad operators ─────────────────────────────────────────────
    ("MetaLeft", KeyDefinition { key_code: Some(91), key: Some("Meta"), code: Some("MetaLeft"), location: Some(1), ..EMPTY }),
    ("MetaRight", KeyDefinition { key_code: Some(92), key: Some("Meta"), code: Some("MetaRight"), location: Some(2), ..EMPTY }),
    ("ContextMenu", KeyDefinition { key_code: Some(93), key: Some("ContextMenu"), code: Some("ContextMenu"), ..EMPTY }),
    ("NumpadMultiply", KeyDefinition { key_code: Some(106), key: Some("*"), code: Some("NumpadMultiply"), location: Some(3), ..EMPTY }),
    ("NumpadAdd", KeyDefinition { key_code: Some(107), key: Some("+"), code: Some("NumpadAdd"), location: Some(3), ..EMPTY }),
    ("NumpadSubtract", KeyDefinition { key_code: Some(109), key: Some("-"), code: Some("NumpadSubtract"), location: Some(3), ..EMPTY }),
    ("NumpadDivide", KeyDefinition { key_code: Some(111), key: Some("/"), code: Some("NumpadDivide"), location: Some(3), ..EMPTY }),

    // ── Function keys ─────────────────────────────────────────────────────────
    ("F1", KeyDefinition { key_code: Some(112), key: Some("F1"), code: Some("F1"), ..EMPTY }),
    ("F2", KeyDefinition { key_code: Some(113), key: Some("F2"), code: Some("F2"), ..EMPTY }),
    ("F3", KeyDefinition { key_code: Some(114), key: Some("F3"), code: Some("F3"), ..EMPTY }),
    ("F4", KeyDefinition { key_code: Some(115), key: Some("F4"), code: Some("F4"), ..EMPTY }),
    ("F5", KeyDefinition { key_code: Some(116), key: Some("F5"), code: Some("F5"), ..EMPTY }),
    ("F6", KeyDefinition { key_code: Some(117), key: Some("F6"), code: Some("F6"), ..EMPTY }),
    ("F7", KeyDefinition { key_code: Some(118), key: Some("F7"), code: Some("F7"), ..EMPTY }),
    ("F8", KeyDefinition { key_code: Some(119), key: Some("F8"), code: Some("F8"), ..EMPTY }),
    ("F9", KeyDefinition { key_code: Some(120), key: Some("F9"), code: Some("F9"), ..EMPTY }),
    ("F10", KeyDefinition { key_code: Some(121), key: Some("F10"), code: Some("F10"), ..EMPTY }),
    ("F11", KeyDefinition { key_code: Some(122), key: Some("F11"), code: Some("F11"), ..EMPTY }),
    ("F12", KeyDefinition { key_code: Some(123), key: Some("F12"), code: Some("F12"), ..EMPTY }),
    ("F13", KeyDefinition { key_code: Some(124), key: Some("F13"), code: Some("F13"), ..EMPTY }),
    ("F14", KeyDefinition { key_code: Some(125), key: Some("F14"), code: Some("F14"), ..EMPTY }),
    ("F15", KeyDefinition { key_code: Some(126), key: Some("F15"), code: Some("F15"), ..EMPTY }),
    ("F16", KeyDefinition { key_code: Some(127), key: Some("F16"), code: Some("F16"), ..EMPTY }),
    ("F17", KeyDefinition { key_code: Some(128), key: Some("F17"), code: Some("F17"), ..EMPTY }),
    ("F18", KeyDefinition { key_code: Some(129), key: Some("F18"), code: Some("F18"), ..EMPTY }),
    ("F19", KeyDefinition { key_code: Some(130), key: Some("F19"), code: Some("F19"), ..EMPTY }),
    ("F20", KeyDefinition { key_code: Some(131), key: Some("F20"), code: Some("F20"), ..EMPTY }),
    ("F21", KeyDefinition { key_code: Some(132), key: Some("F21"), code: Some("F21"), ..EMPTY }),
    ("F22", KeyDefinition { key_code: Some(133), key: Some("F22"), code: Some("F22"), ..EMPTY }),
    ("F23", KeyDefinition { key_code: Some(134), key: Some("F23"), code: Some("F23"), ..EMPTY }),
    ("F24", KeyDefinition { key_code: Some(135), key: Some("F24"), code: Some("F24"), ..EMPTY }),

    // ── Locks and media keys ──────────────────────────────────────────────────
    ("NumLock", KeyDefinition { key_code: Some(144), key: Some("NumLock"), code: Some("NumLock"), ..EMPTY }),
    ("ScrollLock", KeyDefinition { key_code: Some(145), key: Some("ScrollLock"), code: Some("ScrollLock"), ..EMPTY }),
    ("AudioVolumeMute", KeyDefinition { key_code: Some(173), key: Some("AudioVolumeMute"), code: Some("AudioVolumeMute"), ..EMPTY }),
    ("AudioVolumeDown", KeyDefinition { key_code: Some(174), key: Some("AudioVolumeDown"), code: Some("AudioVolumeDown"), ..EMPTY }),
    ("AudioVolumeUp", KeyDefinition { key_code: Some(175), key: Some("AudioVolumeUp"), code: Some("AudioVolumeUp"), ..EMPTY }),
    ("MediaTrackNext", KeyDefinition { key_code: Some(176), key: Some("MediaTrackNext"), code: Some("MediaTrackNext"), ..EMPTY }),
    ("MediaTrackPrevious", KeyDefinition { key_code: Some(177), key: Some("MediaTrackPrevious"), code: Some("MediaTrackPrevious"), ..EMPTY }),
    ("MediaStop", KeyDefinition { key_code: Some(178), key: Some("MediaStop"), code: Some("MediaStop"), ..EMPTY }),
    ("MediaPlayPause", KeyDefinition { key_code: Some(179), key: Some("MediaPlayPause"), code: Some("MediaPlayPause"), ..EMPTY }),

    // ── Punctuation (hardware codes) ──────────────────────────────────────────
    ("Semicolon", KeyDefinition { key_code: Some(186), key: Some(";"), shift_key: Some(":"), code: Some("Semicolon"), ..EMPTY }),
    ("Equal", KeyDefinition { key_code: Some(187), key: Some("="), shift_key: Some("+"), code: Some("Equal"), ..EMPTY }),
    ("NumpadEqual", KeyDefinition { key_code: Some(187), key: Some("="), code: Some("NumpadEqual"), location: Some(3), ..EMPTY }),
    ("Comma", KeyDefinition { key_code: Some(188), key: Some(","), shift_key: Some("<"), code: Some("Comma"), ..EMPTY }),
    ("Minus", KeyDefinition { key_code: Some(189), key: Some("-"), shift_key: Some("_"), code: Some("Minus"), ..EMPTY }),
    ("Period", KeyDefinition { key_code: Some(190), key: Some("."), shift_key: Some(">"), code: Some("Period"), ..EMPTY }),
    ("Slash", KeyDefinition { key_code: Some(191), key: Some("/"), shift_key: Some("?"), code: Some("Slash"), ..EMPTY }),
    ("Backquote", KeyDefinition { key_code: Some(192), key: Some("`"), shift_key: Some("~"), code: Some("Backquote"), ..EMPTY }),
    ("BracketLeft", KeyDefinition { key_code: Some(219), key: Some("["), shift_key: Some("{"), code: Some("BracketLeft"), ..EMPTY }),
    ("Backslash", KeyDefinition { key_code: Some(220), key: Some("\\"), shift_key: Some("|"), code: Some("Backslash"), ..EMPTY }),
    ("BracketRight", KeyDefinition { key_code: Some(221), key: Some("]"), shift_key: Some("}"), code: Some("BracketRight"), ..EMPTY }),
    ("Quote", KeyDefinition { key_code: Some(222), key: Some("'"), shift_key: Some("\""), code: Some("Quote"), ..EMPTY }),
    ("AltGraph", KeyDefinition { key_code: Some(225), key: Some("AltGraph"), code: Some("AltGraph"), ..EMPTY }),
    ("Props", KeyDefinition { key_code: Some(247), key: Some("CrSel"), code: Some("Props"), ..EMPTY }),

    // ── Key label aliases ─────────────────────────────────────────────────────
    ("Cancel", KeyDefinition { key_code: Some(3), key: Some("Cancel"), code: Some("Abort"), ..EMPTY }),
    ("Clear", KeyDefinition { key_code: Some(12), key: Some("Clear"), code: Some("Numpad5"), location: Some(3), ..EMPTY }),
    ("Shift", KeyDefinition { key_code: Some(16), key: Some("Shift"), code: Some("ShiftLeft"), location: Some(1), ..EMPTY }),
    ("Control", KeyDefinition { key_code: Some(17), key: Some("Control"), code: Some("ControlLeft"), location: Some(1), ..EMPTY }),
    ("Alt", KeyDefinition { key_code: Some(18), key: Some("Alt"), code: Some("AltLeft"), location: Some(1), ..EMPTY }),
    ("Accept", KeyDefinition { key_code: Some(30), key: Some("Accept"), ..EMPTY }),
    ("ModeChange", KeyDefinition { key_code: Some(31), key: Some("ModeChange"), ..EMPTY }),
    (" ", KeyDefinition { key_code: Some(32), key: Some(" "), code: Some("Space"), ..EMPTY }),
    ("Print", KeyDefinition { key_code: Some(42), key: Some("Print"), ..EMPTY }),
    ("Execute", KeyDefinition { key_code: Some(43), key: Some("Execute"), code: Some("Open"), ..EMPTY }),
    ("\0", KeyDefinition { key_code: Some(46), key: Some("\0"), code: Some("NumpadDecimal"), location: Some(3), ..EMPTY }),

    // ── Lowercase letters ─────────────────────────────────────────────────────
    ("a", KeyDefinition { key_code: Some(65), key: Some("a"), code: Some("KeyA"), ..EMPTY }),
    ("b", KeyDefinition { key_code: Some(66), key: Some("b"), code: Some("KeyB"), ..EMPTY }),
    ("c", KeyDefinition { key_code: Some(67), key: Some("c"), code: Some("KeyC"), ..EMPTY }),
    ("d", KeyDefinition { key_code: Some(68), key: Some("d"), code: Some("KeyD"), ..EMPTY }),
    ("e", KeyDefinition { key_code: Some(69), key: Some("e"), code: Some("KeyE"), ..EMPTY }),
    ("f", KeyDefinition { key_code: Some(70), key: Some("f"), code: Some("KeyF"), ..EMPTY }),
    ("g", KeyDefinition { key_code: Some(71), key: Some("g"), code: Some("KeyG"), ..EMPTY }),
    ("h", KeyDefinition { key_code: Some(72), key: Some("h"), code: Some("KeyH"), ..EMPTY }),
    ("i", KeyDefinition { key_code: Some(73), key: Some("i"), code: Some("KeyI"), ..EMPTY }),
    ("j", KeyDefinition { key_code: Some(74), key: Some("j"), code: Some("KeyJ"), ..EMPTY }),
    ("k", KeyDefinition { key_code: Some(75), key: Some("k"), code: Some("KeyK"), ..EMPTY }),
    ("l", KeyDefinition { key_code: Some(76), key: Some("l"), code: Some("KeyL"), ..EMPTY }),
    ("m", KeyDefinition { key_code: Some(77), key: Some("m"), code: Some("KeyM"), ..EMPTY }),
    ("n", KeyDefinition { key_code: Some(78), key: Some("n"), code: Some("KeyN"), ..EMPTY }),
    ("o", KeyDefinition { key_code: Some(79), key: Some("o"), code: Some("KeyO"), ..EMPTY }),
    ("p", KeyDefinition { key_code: Some(80), key: Some("p"), code: Some("KeyP"), ..EMPTY }),
    ("q", KeyDefinition { key_code: Some(81), key: Some("q"), code: Some("KeyQ"), ..EMPTY }),
    ("r", KeyDefinition { key_code: Some(82), key: Some("r"), code: Some("KeyR"), ..EMPTY }),
    ("s", KeyDefinition { key_code: Some(83), key: Some("s"), code: Some("KeyS"), ..EMPTY }),
    ("t", KeyDefinition { key_code: Some(84), key: Some("t"), code: Some("KeyT"), ..EMPTY }),
    ("u", KeyDefinition { key_code: Some(85), key: Some("u"), code: Some("KeyU"), ..EMPTY }),
    ("v", KeyDefinition { key_code: Some(86), key: Some("v"), code: Some("KeyV"), ..EMPTY }),
    ("w", KeyDefinition { key_code: Some(87), key: Some("w"), code: Some("KeyW"), ..EMPTY }),
    ("x", KeyDefinition { key_code: Some(88), key: Some("x"), code: Some("KeyX"), ..EMPTY }),
    ("y", KeyDefinition { key_code: Some(89), key: Some("y"), code: Some("KeyY"), ..EMPTY }),
    ("z", KeyDefinition { key_code: Some(90), key: Some("z"), code: Some("KeyZ"), ..EMPTY }),

    // ── Meta and symbol aliases ───────────────────────────────────────────────
    ("Meta", KeyDefinition { key_code: Some(91), key: Some("Meta"), code: Some("MetaLeft"), location: Some(1), ..EMPTY }),
    ("*", KeyDefinition { key_code: Some(106), key: Some("*"), code: Some("NumpadMultiply"), location: Some(3), ..EMPTY }),
    ("+", KeyDefinition { key_code: Some(107), key: Some("+"), code: Some("NumpadAdd"), location: Some(3), ..EMPTY }),
    ("-", KeyDefinition { key_code: Some(109), key: Some("-"), code: Some("NumpadSubtract"), location: Some(3), ..EMPTY }),
    ("/", KeyDefinition { key_code: Some(111), key: Some("/"), code: Some("NumpadDivide"), location: Some(3), ..EMPTY }),
    (";", KeyDefinition { key_code: Some(186), key: Some(";"), code: Some("Semicolon"), ..EMPTY }),
    ("=", KeyDefinition { key_code: Some(187), key: Some("="), code: Some("Equal"), ..EMPTY }),
    (",", KeyDefinition { key_code: Some(188), key: Some(","), code: Some("Comma"), ..EMPTY }),
    (".", KeyDefinition { key_code: Some(190), key: Some("."), code: Some("Period"), ..EMPTY }),
    ("`", KeyDefinition { key_code: Some(192), key: Some("`"), code: Some("Backquote"), ..EMPTY }),
    ("[", KeyDefinition { key_code: Some(219), key: Some("["), code: Some("BracketLeft"), ..EMPTY }),
    ("\\", KeyDefinition { key_code: Some(220), key: Some("\\"), code: Some("Backslash"), ..EMPTY }),
    ("]", KeyDefinition { key_code: Some(221), key: Some("]"), code: Some("BracketRight"), ..EMPTY }),
    ("'", KeyDefinition { key_code: Some(222), key: Some("'"), code: Some("Quote"), ..EMPTY }),
    ("Attn", KeyDefinition { key_code: Some(246), key: Some("Attn"), ..EMPTY }),
    ("CrSel", KeyDefinition { key_code: Some(247), key: Some("CrSel"), code: Some("Props"), ..EMPTY }),
    ("ExSel", KeyDefinition { key_code: Some(248), key: Some("ExSel"), ..EMPTY }),
    ("EraseEof", KeyDefinition { key_code: Some(249), key: Some("EraseEof"), ..EMPTY }),
    ("Play", KeyDefinition { key_code: Some(250), key: Some("Play"), ..EMPTY }),
    ("ZoomOut", KeyDefinition { key_code: Some(251), key: Some("ZoomOut"), ..EMPTY }),

    // ── Shifted digit-row symbols ─────────────────────────────────────────────
    (")", KeyDefinition { key_code: Some(48), key: Some(")"), code: Some("Digit0"), ..EMPTY }),
    ("!", KeyDefinition { key_code: Some(49), key: Some("!"), code: Some("Digit1"), ..EMPTY }),
    ("@", KeyDefinition { key_code: Some(50), key: Some("@"), code: Some("Digit2"), ..EMPTY }),
    ("#", KeyDefinition { key_code: Some(51), key: Some("#"), code: Some("Digit3"), ..EMPTY }),
    ("$", KeyDefinition { key_code: Some(52), key: Some("$"), code: Some("Digit4"), ..EMPTY }),
    ("%", KeyDefinition { key_code: Some(53), key: Some("%"), code: Some("Digit5"), ..EMPTY }),
    ("^", KeyDefinition { key_code: Some(54), key: Some("^"), code: Some("Digit6"), ..EMPTY }),
    ("&", KeyDefinition { key_code: Some(55), key: Some("&"), code: Some("Digit7"), ..EMPTY }),
    ("(", KeyDefinition { key_code: Some(57), key: Some("("), code: Some("Digit9"), ..EMPTY }),

    // ── Uppercase letters ─────────────────────────────────────────────────────
    ("A", KeyDefinition { key_code: Some(65), key: Some("A"), code: Some("KeyA"), ..EMPTY }),
    ("B", KeyDefinition { key_code: Some(66), key: Some("B"), code: Some("KeyB"), ..EMPTY }),
    ("C", KeyDefinition { key_code: Some(67), key: Some("C"), code: Some("KeyC"), ..EMPTY }),
    ("D", KeyDefinition { key_code: Some(68), key: Some("D"), code: Some("KeyD"), ..EMPTY }),
    ("E", KeyDefinition { key_code: Some(69), key: Some("E"), code: Some("KeyE"), ..EMPTY }),
    ("F", KeyDefinition { key_code: Some(70), key: Some("F"), code: Some("KeyF"), ..EMPTY }),
    ("G", KeyDefinition { key_code: Some(71), key: Some("G"), code: Some("KeyG"), ..EMPTY }),
    ("H", KeyDefinition { key_code: Some(72), key: Some("H"), code: Some("KeyH"), ..EMPTY }),
    ("I", KeyDefinition { key_code: Some(73), key: Some("I"), code: Some("KeyI"), ..EMPTY }),
    ("J", KeyDefinition { key_code: Some(74), key: Some("J"), code: Some("KeyJ"), ..EMPTY }),
    ("K", KeyDefinition { key_code: Some(75), key: Some("K"), code: Some("KeyK"), ..EMPTY }),
    ("L", KeyDefinition { key_code: Some(76), key: Some("L"), code: Some("KeyL"), ..EMPTY }),
    ("M", KeyDefinition { key_code: Some(77), key: Some("M"), code: Some("KeyM"), ..EMPTY }),
    ("N", KeyDefinition { key_code: Some(78), key: Some("N"), code: Some("KeyN"), ..EMPTY }),
    ("O", KeyDefinition { key_code: Some(79), key: Some("O"), code: Some("KeyO"), ..EMPTY }),
    ("P", KeyDefinition { key_code: Some(80), key: Some("P"), code: Some("KeyP"), ..EMPTY }),
    ("Q", KeyDefinition { key_code: Some(81), key: Some("Q"), code: Some("KeyQ"), ..EMPTY }),
    ("R", KeyDefinition { key_code: Some(82), key: Some("R"), code: Some("KeyR"), ..EMPTY }),
    ("S", KeyDefinition { key_code: Some(83), key: Some("S"), code: Some("KeyS"), ..EMPTY }),
    ("T", KeyDefinition { key_code: Some(84), key: Some("T"), code: Some("KeyT"), ..EMPTY }),
    ("U", KeyDefinition { key_code: Some(85), key: Some("U"), code: Some("KeyU"), ..EMPTY }),
    ("V", KeyDefinition { key_code: Some(86), key: Some("V"), code: Some("KeyV"), ..EMPTY }),
    ("W", KeyDefinition { key_code: Some(87), key: Some("W"), code: Some("KeyW"), ..EMPTY }),
    ("X", KeyDefinition { key_code: Some(88), key: Some("X"), code: Some("KeyX"), ..EMPTY }),
    ("Y", KeyDefinition { key_code: Some(89), key: Some("Y"), code: Some("KeyY"), ..EMPTY }),
    ("Z", KeyDefinition { key_code: Some(90), key: Some("Z"), code: Some("KeyZ"), ..EMPTY }),

    // ── Shifted punctuation ───────────────────────────────────────────────────
    (":", KeyDefinition { key_code: Some(186), key: Some(":"), code: Some("Semicolon"), ..EMPTY }),
    ("<", KeyDefinition { key_code: Some(188), key: Some("<"), code: Some("Comma"), ..EMPTY }),
    ("_", KeyDefinition { key_code: Some(189), key: Some("_"), code: Some("Minus"), ..EMPTY }),
    (">", KeyDefinition { key_code: Some(190), key: Some(">"), code: Some("Period"), ..EMPTY }),
    ("?", KeyDefinition { key_code: Some(191), key: Some("?"), code: Some("Slash"), ..EMPTY }),
    ("~", KeyDefinition { key_code: Some(192), key: Some("~"), code: Some("Backquote"), ..EMPTY }),
    ("{", KeyDefinition { key_code: Some(219), key: Some("{"), code: Some("BracketLeft"), ..EMPTY }),
    ("|", KeyDefinition { key_code: Some(220), key: Some("|"), code: Some("Backslash"), ..EMPTY }),
    ("}", KeyDefinition { key_code: Some(221), key: Some("}"), code: Some("BracketRight"), ..EMPTY }),
    ("\"", KeyDefinition { key_code: Some(222), key: Some("\""), code: Some("Quote"), ..EMPTY }),

    // ── Mobile keys ───────────────────────────────────────────────────────────
    ("SoftLeft", KeyDefinition { key: Some("SoftLeft"), code: Some("SoftLeft"), location: Some(4), ..EMPTY }),
    ("SoftRight", KeyDefinition { key: Some("SoftRight"), code: Some("SoftRight"), location: Some(4), ..EMPTY }),
    ("Camera", KeyDefinition { key_code: Some(44), key: Some("Camera"), code: Some("Camera"), location: Some(4), ..EMPTY }),
    ("Call", KeyDefinition { key: Some("Call"), code: Some("Call"), location: Some(4), ..EMPTY }),
    ("EndCall", KeyDefinition { key_code: Some(95), key: Some("EndCall"), code: Some("EndCall"), location: Some(4), ..EMPTY }),
    ("VolumeDown", KeyDefinition { key_code: Some(182), key: Some("VolumeDown"), code: Some("VolumeDown"), location: Some(4), ..EMPTY }),
    ("VolumeUp", KeyDefinition { key_code: Some(183), key: Some("VolumeUp"), code: Some("VolumeUp"), location: Some(4), ..EMPTY }),
];
