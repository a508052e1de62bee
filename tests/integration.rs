// SPDX-License-Identifier: MPL-2.0
use ion_kiosk::config::{self, Config};
use ion_kiosk::content::gallery::{self, Gallery};
use ion_kiosk::content::{SectionId, SectionLayout};
use ion_kiosk::i18n::fluent::I18n;
use ion_kiosk::ui::scroll_effects::{self, LazyLoader, RevealTracker};
use ion_kiosk::ui::{contact_form, lightbox};
use tempfile::tempdir;

#[test]
fn language_preference_round_trips_through_the_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Persist an English preference
    let initial = Config {
        language: Some("en".to_string()),
    };
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en");
    assert!(!i18n_en.direction().is_rtl());

    // 2. Switch the preference to Arabic and reload
    let arabic = Config {
        language: Some("ar".to_string()),
    };
    config::save_to_path(&arabic, &config_path).expect("Failed to write arabic config file");

    let loaded = config::load_from_path(&config_path).expect("Failed to load arabic config");
    let i18n_ar = I18n::new(None, &loaded);
    assert_eq!(i18n_ar.current_locale().to_string(), "ar");
    assert!(i18n_ar.direction().is_rtl());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_the_persisted_preference() {
    let config = Config {
        language: Some("ar".to_string()),
    };
    let i18n = I18n::new(Some("en".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en");
}

#[test]
fn every_nav_label_is_translated_in_both_languages() {
    let mut i18n = I18n::new(Some("ar".to_string()), &Config::default());

    for locale in ["ar", "en"] {
        i18n.set_locale(locale.parse().unwrap());
        for section in SectionId::ALL {
            let label = i18n.tr(section.nav_key());
            assert!(
                !label.starts_with("MISSING"),
                "missing {} translation for {:?}",
                locale,
                section
            );
        }
    }
}

#[test]
fn contact_form_full_flow() {
    let mut form = contact_form::State::new();

    // Empty submit fails validation
    assert_eq!(
        form.update(contact_form::Message::SubmitPressed),
        contact_form::Effect::Invalid("notification-form-missing-fields")
    );

    // Fill everything but use a malformed email
    form.update(contact_form::Message::NameChanged("Nour".into()));
    form.update(contact_form::Message::EmailChanged("nour-at-example".into()));
    form.update(contact_form::Message::BodyChanged("Availability in May?".into()));
    assert_eq!(
        form.update(contact_form::Message::SubmitPressed),
        contact_form::Effect::Invalid("notification-form-invalid-email")
    );

    // Fix the email and submit for real
    form.update(contact_form::Message::EmailChanged("nour@example.com".into()));
    assert_eq!(
        form.update(contact_form::Message::SubmitPressed),
        contact_form::Effect::StartSend
    );
    assert!(form.is_sending());

    // Timer elapses: form resets and can be reused
    form.finish_send();
    assert!(!form.is_sending());
    assert_eq!(
        form.update(contact_form::Message::SubmitPressed),
        contact_form::Effect::Invalid("notification-form-missing-fields")
    );
}

#[test]
fn lightbox_open_zoom_pan_close_cycle() {
    let mut state = lightbox::State::new();
    state.open(1);
    assert_eq!(state.current_image(), Some(1));
    assert_eq!(state.zoom().value(), 1.0);

    // Zoom in, pan, and verify the scroll offset moves with the pan
    let window = iced::Size::new(1280.0, 800.0);
    for _ in 0..5 {
        state.zoom_in();
    }

    state.drag_start(iced::Point::new(600.0, 400.0));
    state.drag_move(iced::Point::new(560.0, 380.0));
    state.drag_end();

    let offset = lightbox::scroll_offset(&state, (4000, 3000), window);
    let centered = {
        let mut fresh = lightbox::State::new();
        fresh.open(1);
        for _ in 0..5 {
            fresh.zoom_in();
        }
        lightbox::scroll_offset(&fresh, (4000, 3000), window)
    };
    // Dragging left/up moves the viewport further into the image.
    assert!(offset.x > centered.x);
    assert!(offset.y > centered.y);

    // Closing resets everything
    state.close();
    assert!(!state.is_open());
    state.open(2);
    assert_eq!(state.zoom().value(), 1.0);
    assert_eq!(state.pan(), lightbox::PanOffset::ZERO);
}

#[test]
fn scrolling_to_the_gallery_schedules_every_slot_once() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["pool.png", "lobby.jpg", "suite.webp"] {
        std::fs::write(dir.path().join(name), b"stub").unwrap();
    }

    let paths = gallery::scan(dir.path()).expect("scan should succeed");
    let gallery = Gallery::new(paths);
    assert_eq!(gallery.len(), 3);

    let mut loader = LazyLoader::new();
    let viewport = 800.0;

    // Above the gallery: nothing due.
    assert!(loader.due(0.0, viewport, gallery.len()).is_empty());

    // Scrolled to the gallery: all slots due exactly once.
    let gallery_top = SectionLayout::top(SectionId::Gallery);
    let due = loader.due(gallery_top, viewport, gallery.len());
    assert_eq!(due.len(), gallery.len());
    assert!(loader.due(gallery_top, viewport, gallery.len()).is_empty());
}

#[test]
fn scroll_effects_agree_on_the_section_layout() {
    let header = 64.0;

    // Navigating to a section puts its active-link range in effect.
    for section in SectionId::ALL {
        let anchor = scroll_effects::anchor_offset(header, section);
        assert_eq!(
            scroll_effects::active_section(header, anchor),
            Some(section),
            "anchor for {:?} should land inside its own range",
            section
        );
    }

    // Reveal triggers fire for each section as the page scrolls through.
    let mut tracker = RevealTracker::new();
    let viewport = 800.0;
    let mut y = 0.0;
    while y < SectionLayout::total_height() {
        tracker.observe(y, viewport);
        y += 200.0;
    }
    for section in SectionId::ALL {
        assert!(tracker.is_revealed(section), "{:?} never revealed", section);
    }
}
