//! End-to-end markup resolution through the engine facade.

use chromatext::{EncoderKind, Engine, EngineConfig};
use pretty_assertions::assert_eq;

#[test]
fn solid_full_colour() {
    let engine = Engine::new();
    let out = engine.colorize("#ff0000Hello", true);
    insta::assert_snapshot!(out, @"§x§f§f§0§0§0§0Hello");
    assert!(!out.contains("#ff0000"));
}

#[test]
fn two_stop_gradient_full_colour() {
    let engine = Engine::new();
    let out = engine.colorize("<#ff0000:#0000ff>Hi</g>", true);
    insta::assert_snapshot!(out, @"§x§f§f§0§0§0§0H§x§0§0§0§0§f§fi");
}

#[test]
fn two_stop_gradient_legacy() {
    let engine = Engine::new();
    assert_eq!(engine.colorize("<#ff0000:#0000ff>Hi</g>", false), "§4H§1i");
}

#[test]
fn strip_rainbow() {
    let engine = Engine::new();
    assert_eq!(engine.strip_markup("<R:50>Hi</R>"), "Hi");
}

#[test]
fn malformed_hex_is_literal() {
    let engine = Engine::new();
    assert_eq!(engine.colorize("#zz0000Text", true), "#zz0000Text");
    assert_eq!(engine.colorize("#zz0000Text", false), "#zz0000Text");
    assert_eq!(engine.strip_markup("#zz0000Text"), "#zz0000Text");
}

#[test]
fn three_stop_gradient() {
    let engine = Engine::new();
    let out = engine.colorize("<#ff0000:#00ff00:#0000ff>abcd</g>", true);
    insta::assert_snapshot!(out, @"§x§f§f§0§0§0§0a§x§8§0§8§0§0§0b§x§0§0§f§f§0§0c§x§0§0§0§0§f§fd");
}

#[test]
fn rainbow_full_saturation() {
    let engine = Engine::new();
    let out = engine.colorize("<R:100>Hi</R>", true);
    insta::assert_snapshot!(out, @"§x§f§f§0§0§0§0H§x§0§0§f§f§f§fi");
}

#[test]
fn gradient_stops_are_not_consumed_as_solids() {
    let engine = Engine::new();
    let out = engine.colorize("<#ffffff:#ffffff>ok</g>", false);
    assert_eq!(out, "§fok");
}

#[test]
fn legacy_spellings_resolve_like_canonical() {
    let engine = Engine::new();
    let cases = [
        ("<GRADIENT:ff0000>Hi</GRADIENT:0000ff>", "<#ff0000:#0000ff>Hi</g>"),
        ("<#ff0000>Hi</#0000ff>", "<#ff0000:#0000ff>Hi</g>"),
        ("<rainbow:50>Hi</rainbow>", "<R:50>Hi</R>"),
        ("<RAINBOW50>Hi</RAINBOW>", "<R:50>Hi</R>"),
        ("<R>Hi</R>", "<R:100>Hi</R>"),
        ("{#ff0000}x", "#ff0000x"),
        ("[#ff0000]x", "#ff0000x"),
        ("&#ff0000x", "#ff0000x"),
        ("<SOLID:ff0000>x", "#ff0000x"),
    ];
    for (legacy, canonical) in cases {
        assert_eq!(
            engine.colorize(legacy, true),
            engine.colorize(canonical, true),
            "{legacy}"
        );
        assert_eq!(engine.strip_markup(legacy), engine.strip_markup(canonical), "{legacy}");
    }
}

#[test]
fn mixed_markup_in_one_line() {
    let engine = Engine::new();
    let out = engine.colorize("#ffffffa <#ff0000:#0000ff>Hi</g> #ffffffok", false);
    assert_eq!(out, "§fa §4H§1i §fok");
    assert_eq!(engine.strip_markup("#ffffffa <#ff0000:#0000ff>Hi</g> #ffffffok"), "a Hi ok");
}

#[test]
fn malformed_span_does_not_block_the_rest() {
    let engine = Engine::new();
    assert_eq!(engine.colorize("#zz0000a #ff0000b", false), "#zz0000a §4b");
}

#[test]
fn text_without_markup_is_unchanged() {
    let engine = Engine::new();
    let text = "plain text, 100% #1 <not markup>";
    assert_eq!(engine.colorize(text, true), text);
    assert_eq!(engine.strip_markup(text), text);
    assert_eq!(engine.colorize("", true), "");
}

#[test]
fn ansi_engine_from_config() {
    let config = EngineConfig {
        encoder: EncoderKind::Ansi,
        ..EngineConfig::default()
    };
    let engine = Engine::from_config(&config).unwrap();
    assert_eq!(engine.colorize("#ff0000x", true), "\x1b[38;2;255;0;0mx");
    assert_eq!(engine.colorize("#ff0000x", false), "\x1b[31mx");
    assert_eq!(engine.strip_codes(&engine.colorize("<R:80>rainbow</R>", true)), "rainbow");
    assert_eq!(engine.reset(), "\x1b[0m");
}

#[test]
fn config_palette_extras_participate_in_quantization() {
    let config = EngineConfig::parse(
        "palette:\n  - name: orange\n    hex: \"#ff8800\"\n    code: g\n",
    )
    .unwrap();
    let engine = Engine::from_config(&config).unwrap();
    assert_eq!(engine.colorize("#ff8800x", false), "§gx");
}

#[test]
fn registry_order_is_observable() {
    use chromatext::pattern::{GradientProcessor, SolidProcessor};
    use chromatext::{PatternRegistry, RegistryBuilder};

    let mut builder = RegistryBuilder::new();
    builder
        .register(SolidProcessor::new())
        .register(GradientProcessor::new());
    let solid_first = Engine::builder().registry(builder.build()).build();
    let standard = Engine::builder()
        .registry(PatternRegistry::standard(100))
        .build();

    let input = "<#ff0000:#0000ff>Hi</g>";
    assert_eq!(solid_first.colorize(input, false), "<§4:§1>Hi</g>");
    assert_eq!(standard.colorize(input, false), "§4H§1i");
}

#[test]
fn nested_markup_is_dropped_whatever_the_stops() {
    let engine = Engine::new();
    for input in [
        "<#ff0000:#ff0000>#00ff00x</g>",
        "<#ff0000:#0000ff>#00ff00x</g>",
        "<#ff0000:#0000ff>#00ff00ab</g>",
    ] {
        let parsed = engine.colorize(input, true);
        assert_eq!(engine.strip_codes(&parsed), engine.strip_markup(input), "{input}");
    }

    let out = engine.colorize("<R:100>#00ff00ab</R>", true);
    insta::assert_snapshot!(out, @"§x§f§f§0§0§0§0a§x§0§0§f§f§f§fb");
}

#[test]
fn strip_is_stable_when_removal_exposes_markup() {
    let engine = Engine::new();
    for input in ["<R:5#aaaaaa0>x</R>", "<R#aaaaaa>x</R>", "<R:100>x</R#aaaaaa>"] {
        let once = engine.strip_markup(input);
        assert_eq!(once, "x", "{input}");
        assert_eq!(engine.strip_markup(&once), once);
    }
}
