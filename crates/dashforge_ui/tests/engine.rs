//! Theme application against an in-memory document

use std::sync::Arc;

use dashforge_theme::{light_theme, Theme, UTILITY_MARKER};
use dashforge_ui::{ApplyOptions, Document, MemoryDocument, NoDocument, ThemeEngine, UtilityOptions};

fn engine() -> ThemeEngine<Arc<MemoryDocument>> {
    ThemeEngine::new(Arc::new(MemoryDocument::new()))
}

#[test]
fn apply_theme_writes_root_custom_properties() {
    let engine = engine();
    let theme = Theme::from_colors([("primary", "#test123")]);

    engine.apply_theme(&theme, ApplyOptions::default()).unwrap();

    assert_eq!(
        engine.document().root_property("--df-color-primary").as_deref(),
        Some("#test123")
    );
}

#[test]
fn apply_theme_writes_every_projected_variable() {
    let engine = engine();
    engine
        .apply_theme(light_theme(), ApplyOptions::default())
        .unwrap();

    let vars = dashforge_theme::generate_css_vars(light_theme());
    let written = engine.document().root_style();
    assert_eq!(written.len(), vars.len());
    for (name, value) in &vars {
        assert_eq!(written.get(name), Some(value), "{name}");
    }
}

#[test]
fn utilities_are_opt_in() {
    let engine = engine();
    let theme = light_theme();

    engine.apply_theme(theme, ApplyOptions::default()).unwrap();
    assert!(engine.document().style_elements(UTILITY_MARKER).is_empty());
    assert!(engine.utility_node().is_none());

    engine
        .apply_theme(theme, ApplyOptions { generate_utilities: true })
        .unwrap();
    let sheets = engine.document().style_elements(UTILITY_MARKER);
    assert_eq!(sheets.len(), 1);
    for key in theme.colors.keys() {
        for class in ["bg", "text", "border"] {
            let selector = format!(".{class}-{key}{{");
            assert!(sheets[0].text.contains(&selector), "missing {selector}");
        }
    }
}

#[test]
fn regeneration_replaces_the_stylesheet() {
    let engine = engine();
    let first = Theme::from_colors([("color1", "#111111")]);
    let second = Theme::from_colors([("color2", "#222222")]);

    engine
        .generate_utility_classes(&first, UtilityOptions::default())
        .unwrap();
    let old_node = engine.utility_node().unwrap();
    engine
        .generate_utility_classes(&second, UtilityOptions { replace: true })
        .unwrap();

    let sheets = engine.document().style_elements(UTILITY_MARKER);
    assert_eq!(sheets.len(), 1);
    assert_ne!(sheets[0].id, old_node);
    assert!(sheets[0].text.contains(".bg-color2"));
    assert!(!sheets[0].text.contains("color1"));
}

#[test]
fn detached_stylesheet_is_recreated() {
    let engine = engine();
    let theme = Theme::from_colors([("primary", "#00af67")]);

    engine
        .generate_utility_classes(&theme, UtilityOptions::default())
        .unwrap();
    let node = engine.utility_node().unwrap();
    assert!(engine.document().detach(node));

    engine
        .generate_utility_classes(&theme, UtilityOptions::default())
        .unwrap();

    let sheets = engine.document().style_elements(UTILITY_MARKER);
    assert_eq!(sheets.len(), 1);
    assert_ne!(sheets[0].id, node);
    assert_eq!(engine.utility_node(), Some(sheets[0].id));
}

#[test]
fn engines_sharing_a_document_keep_their_own_stylesheets() {
    let document = Arc::new(MemoryDocument::new());
    let left = ThemeEngine::new(document.clone());
    let right = ThemeEngine::new(document.clone());

    left.generate_utility_classes(
        &Theme::from_colors([("left", "#111111")]),
        UtilityOptions { replace: true },
    )
    .unwrap();
    right
        .generate_utility_classes(
            &Theme::from_colors([("right", "#222222")]),
            UtilityOptions { replace: true },
        )
        .unwrap();

    let sheets = document.style_elements(UTILITY_MARKER);
    assert_eq!(sheets.len(), 2);
    assert_ne!(left.utility_node(), right.utility_node());
}

#[test]
fn headless_document_is_left_alone() {
    let engine = ThemeEngine::new(NoDocument);
    assert!(engine
        .generate_utility_classes(light_theme(), UtilityOptions { replace: true })
        .is_ok());
    assert!(engine
        .apply_theme(light_theme(), ApplyOptions { generate_utilities: true })
        .is_ok());
}
