// SPDX-License-Identifier: MPL-2.0
use shelfwise::app::{App, Flags, Message};
use shelfwise::config::{self, Config};
use shelfwise::domain::inventory::Field;
use shelfwise::i18n::fluent::I18n;
use shelfwise::ui::notifications::Kind;
use shelfwise::ui::pages::{self, Page};
use shelfwise::ui::theming::ThemeMode;
use shelfwise::ui::{product_form, settings, sidebar};
use tempfile::tempdir;

fn flags(dir: &std::path::Path) -> Flags {
    let path = dir.to_string_lossy().into_owned();
    Flags {
        lang: Some("en-US".to_string()),
        data_dir: Some(path.clone()),
        config_dir: Some(path),
        route: None,
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &config_path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("nav-inventory"), "Inventaire");
}

#[test]
fn test_settings_changes_are_persisted() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut app, _) = App::new(flags(dir.path()));

    let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
        ThemeMode::Dark,
    )));
    let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
        "fr".parse().expect("valid locale"),
    )));

    let saved = config::load_from_path(&dir.path().join("settings.toml"))
        .expect("settings were written");
    assert_eq!(saved.general.theme_mode, ThemeMode::Dark);
    assert_eq!(saved.general.language.as_deref(), Some("fr"));
    assert_eq!(app.i18n().tr("nav-dashboard"), "Tableau de bord");

    // a fresh start picks the saved preferences up
    let (restarted, _) = App::new(Flags {
        lang: None,
        ..flags(dir.path())
    });
    assert_eq!(restarted.theme_mode(), ThemeMode::Dark);
    assert_eq!(restarted.i18n().current_locale().to_string(), "fr");
}

#[test]
fn test_add_product_flow() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut app, _) = App::new(flags(dir.path()));

    let _ = app.update(Message::Sidebar(sidebar::Message::Navigate("/inventory")));
    let _ = app.update(Message::Page(pages::Message::Navigate(pages::ADD_PRODUCT_PATH)));
    assert_eq!(app.page(), Page::AddProduct);

    let edits = [
        (Field::Name, "Incubator"),
        (Field::ProductId, "EQ-7"),
        (Field::BuyingPrice, "120"),
        (Field::Quantity, "2"),
        (Field::Unit, "piece"),
    ];
    for (field, value) in edits {
        let _ = app.update(Message::ProductForm(product_form::Message::Edit(
            field,
            value.to_string(),
        )));
    }
    let _ = app.update(Message::ProductForm(product_form::Message::CategorySelected(
        "Equipment".to_string(),
    )));
    let _ = app.update(Message::ProductForm(product_form::Message::Submit));

    assert_eq!(app.page(), Page::Inventory);
    assert_eq!(app.catalogue().len(), 1);
    let toast = app.notifications().active().last().expect("confirmation toast");
    assert_eq!(toast.kind(), Kind::Success);
    assert_eq!(toast.message(), "Product \"Incubator\" added");
}

#[test]
fn test_mobile_navigation_closes_panel() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut app, _) = App::new(flags(dir.path()));

    let _ = app.update(Message::WindowResized(iced::Size::new(600.0, 800.0)));
    let _ = app.update(Message::Sidebar(sidebar::Message::Toggle));
    assert!(!app.sidebar().collapsed());

    let _ = app.update(Message::Sidebar(sidebar::Message::Navigate("/sales")));
    assert_eq!(app.page(), Page::Sales);
    assert!(app.sidebar().collapsed());
    assert!(app.sidebar().layout().floating_button);
}
