/*!
 * Tests for title translation
 */

use std::collections::HashMap;

use docsync::translation::{CZECH_TITLES, TitleTranslator};

#[test]
fn test_czech_withKnownTitles_shouldTranslate() {
    let translator = TitleTranslator::czech();
    assert_eq!(translator.translate("Installation"), "Instalace");
    assert_eq!(translator.translate("CI/CD Security"), "Zabezpečení CI/CD");
    assert_eq!(translator.translate("Rust, Go & Tauri Security"), "Zabezpečení Rust, Go & Tauri");
    assert_eq!(translator.len(), CZECH_TITLES.len());
}

#[test]
fn test_czech_withUnknownOrDifferentCase_shouldPassThrough() {
    let translator = TitleTranslator::czech();
    assert_eq!(translator.translate("installation"), "installation");
    assert_eq!(translator.translate("Installation "), "Installation ");
    assert_eq!(translator.translate("Changelog"), "Changelog");
    assert_eq!(translator.translate(""), "");
}

#[test]
fn test_forLanguage_shouldPickTableByCode() {
    assert!(TitleTranslator::for_language("cs").contains("Quick Start"));
    assert!(TitleTranslator::for_language("ces").contains("Quick Start"));
    assert!(TitleTranslator::for_language("de").is_empty());
}

#[test]
fn test_new_withCustomTable_shouldUseOnlyThatTable() {
    let mut table = HashMap::new();
    table.insert("Installation".to_string(), "Installation (DE)".to_string());

    let translator = TitleTranslator::new(table);
    assert_eq!(translator.translate("Installation"), "Installation (DE)");
    assert_eq!(translator.translate("Quick Start"), "Quick Start");
    assert!(TitleTranslator::identity().is_empty());
}
