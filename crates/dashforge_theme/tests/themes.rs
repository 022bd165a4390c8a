use dashforge_theme::{
    create_dark_theme, create_light_theme, create_theme, dark_theme, generate_css_vars,
    light_theme, merge_themes, PartialTheme, Shade, Theme, ThemeName,
};
use pretty_assertions::assert_eq;

#[test]
fn merging_an_empty_layer_is_identity() {
    for theme in [light_theme(), dark_theme()] {
        assert_eq!(&merge_themes(theme, &PartialTheme::new()), theme);
    }

    let sparse = Theme::from_colors([("primary", "#000000")]);
    assert_eq!(merge_themes(&sparse, &PartialTheme::default()), sparse);
}

#[test]
fn override_wins_and_other_colors_survive() {
    let merged = merge_themes(light_theme(), &PartialTheme::new().color("primary", "#abcdef"));

    assert_eq!(merged.colors["primary"], Shade::new("#abcdef"));
    for (key, shade) in &light_theme().colors {
        if key != "primary" {
            assert_eq!(&merged.colors[key.as_str()], shade, "color `{key}` changed");
        }
    }
}

#[test]
fn partial_only_colors_are_added() {
    let merged = merge_themes(light_theme(), &PartialTheme::new().color("brand", "#ff6b35"));
    assert_eq!(merged.colors.len(), light_theme().colors.len() + 1);
    assert_eq!(merged.name.as_deref(), Some("light"));
}

#[test]
fn create_theme_keeps_base_categories() {
    let custom = create_light_theme(
        &PartialTheme::new()
            .name("custom")
            .color("primary", "#ff0000")
            .color("on-primary", "#ffffff"),
    );

    assert_eq!(custom.name.as_deref(), Some("custom"));
    assert_eq!(custom.colors["primary"].base, "#ff0000");
    assert_eq!(custom.colors["on-primary"].base, "#ffffff");
    assert_eq!(custom.colors["secondary"], light_theme().colors["secondary"]);
    assert_eq!(custom.spacing, light_theme().spacing);
    assert_eq!(custom.typography, light_theme().typography);
    assert_eq!(custom.shape, light_theme().shape);
    assert_eq!(custom.elevation, light_theme().elevation);
}

#[test]
fn create_theme_config_category_beats_base() {
    let config = PartialTheme::new().spacing("md", "18px");
    let custom = create_theme(&config, dark_theme());
    let spacing = custom.spacing.unwrap();
    assert_eq!(spacing.len(), 1);
    assert_eq!(spacing["md"], "18px");
    assert!(!spacing.contains_key("lg"));
    assert_eq!(custom.typography, dark_theme().typography);
}

#[test]
fn dark_helper_builds_on_dark_base() {
    let custom = create_dark_theme(&PartialTheme::new().color("primary", "#abc"));

    assert_eq!(custom.colors["background"], dark_theme().colors["background"]);
    assert_ne!(custom.colors["background"], light_theme().colors["background"]);
    assert_eq!(custom.name.as_deref(), Some("dark"));
}

#[test]
fn projection_is_deterministic() {
    let theme = create_light_theme(
        &PartialTheme::new().token("brand-gradient", "linear-gradient(red, blue)"),
    );
    let first = generate_css_vars(&theme);
    let second = generate_css_vars(&theme);

    assert_eq!(first, second);
    let first_keys: Vec<&String> = first.keys().collect();
    let second_keys: Vec<&String> = second.keys().collect();
    assert_eq!(first_keys, second_keys);
    assert_eq!(first["--df-brand-gradient"], "linear-gradient(red, blue)");
}

#[test]
fn built_in_projection_covers_every_category() {
    let vars = generate_css_vars(light_theme());

    assert_eq!(vars["--df-color-primary"], "#6750a4");
    assert_eq!(vars["--df-color-on-primary"], "#ffffff");
    assert_eq!(vars["--df-spacing-2xl"], "48px");
    assert_eq!(vars["--df-font-weight-title-large"], "500");
    assert_eq!(vars["--df-corner-medium"], "12px");
    assert_eq!(vars["--df-level-0"], "none");
    assert_eq!(vars["--df-elevation-5"], "0px 20px 40px rgba(0, 0, 0, 0.2)");
    assert!(vars.values().all(|v| !v.is_empty()));
}

#[test]
fn theme_names_resolve_to_built_ins() {
    assert_eq!(ThemeName::Dark.theme(), dark_theme());
    assert_eq!(ThemeName::default().theme(), light_theme());
}

#[test]
fn partial_theme_from_json() {
    let partial: PartialTheme = parse_partial(
        r##"{
            "name": "brand",
            "colors": {
                "primary": { "base": "#ff6b35", "on-base": "#ffffff" },
                "accent": "#0077b6"
            },
            "typography": {
                "body-large": { "fontSize": "17px", "fontWeight": 400, "lineHeight": "24px", "letterSpacing": "0px" }
            }
        }"##,
    );
    let theme = create_light_theme(&partial);
    let vars = generate_css_vars(&theme);

    assert_eq!(vars["--df-color-on-primary"], "#ffffff");
    assert_eq!(vars["--df-color-accent"], "#0077b6");
    assert_eq!(vars["--df-font-size-body-large"], "17px");
    assert!(!vars.contains_key("--df-font-size-body-small"));
    assert_eq!(vars["--df-spacing-md"], light_theme().spacing.as_ref().unwrap()["md"]);
}

fn parse_partial(src: &str) -> PartialTheme {
    serde_json::from_str(src).expect("valid partial theme")
}
